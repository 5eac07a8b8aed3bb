use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance validation failed")]
    ValidationFailed,
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
///
/// Used by the test harness to assert that the `inputSchema` objects the
/// registry advertises in `tools/list` are well-formed and agree with the
/// hand-rolled argument validator.
pub fn validate_value(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator = validator_for(schema)
        .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    if validator.is_valid(instance) {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed)
    }
}

/// String-input convenience wrapper around [`validate_value`].
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaValidationError> {
    let schema: Value =
        serde_json::from_str(schema_str).map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;
    let instance: Value = serde_json::from_str(instance_str)
        .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;
    validate_value(&schema, &instance)
}
