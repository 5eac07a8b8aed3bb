//! Argument validation against a tool descriptor.
//!
//! Checks required presence and JSON types for every declared parameter and
//! injects declared defaults. Unknown extra parameters are ignored, not
//! rejected — forward-compatible callers may send fields this catalogue
//! does not know about. Failures are local to the call and never touch
//! session state.

use serde_json::{Map, Value};

use crate::protocol::{BridgeErrorCode, BridgeErrorResponse};
use crate::tools::{ParamKind, ToolSpec};

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("arguments must be a JSON object")]
    NotAnObject,
    #[error("missing required parameter: {0}")]
    MissingParam(String),
    #[error("parameter {param} must be of type {expected}")]
    WrongType {
        param: String,
        expected: &'static str,
    },
}

impl From<ValidationError> for BridgeErrorResponse {
    fn from(err: ValidationError) -> Self {
        BridgeErrorResponse::new(BridgeErrorCode::InvalidArguments, err.to_string())
    }
}

/// Validate raw call arguments against a descriptor.
///
/// Returns the declared parameters only (defaults injected), keyed by the
/// tool-facing name. `null` counts as absent. Pagination parameters are not
/// declared per tool and are handled by [`crate::paginate`] from the same
/// raw map.
pub fn validate(
    spec: &ToolSpec,
    arguments: Option<&Value>,
) -> Result<Map<String, Value>, ValidationError> {
    let empty = Map::new();
    let raw = match arguments {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => return Err(ValidationError::NotAnObject),
    };

    let mut validated = Map::new();
    for param in spec.params {
        match raw.get(param.name) {
            None | Some(Value::Null) => {
                if param.required {
                    return Err(ValidationError::MissingParam(param.name.to_string()));
                }
                if let Some(default) = param.default {
                    validated.insert(param.name.to_string(), Value::String(default.into()));
                }
            }
            Some(value) => {
                check_kind(param.name, param.kind, value)?;
                validated.insert(param.name.to_string(), value.clone());
            }
        }
    }

    Ok(validated)
}

fn check_kind(name: &str, kind: ParamKind, value: &Value) -> Result<(), ValidationError> {
    let ok = match kind {
        ParamKind::String => value.is_string(),
        ParamKind::Integer => value.is_i64() || value.is_u64(),
        ParamKind::Boolean => value.is_boolean(),
        ParamKind::Object => value.is_object(),
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::WrongType {
            param: name.to_string(),
            expected: kind.as_schema_type(),
        })
    }
}
