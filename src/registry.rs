//! Process-wide tool registry.
//!
//! Built once at startup from the static catalogue in [`crate::tools`] and
//! never mutated afterwards. Lookup is by exact tool name; `tools/list`
//! output preserves registration order.

use std::collections::HashMap;

use serde_json::{json, Value};

use crate::paginate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::tools::{self, ToolSpec};

/// Registry construction failures. All of these are programming errors in
/// the catalogue and abort startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate tool name: {0}")]
    DuplicateName(&'static str),
    #[error("tool {0} aliases unknown tool {1}")]
    DanglingAlias(&'static str, &'static str),
    #[error("tool {0} aliases {1} but declares a different endpoint")]
    AliasEndpointMismatch(&'static str, &'static str),
    #[error("tool {0} aliases {1}, which is itself an alias")]
    AliasOfAlias(&'static str, &'static str),
}

pub struct Registry {
    ordered: Vec<&'static ToolSpec>,
    by_name: HashMap<&'static str, &'static ToolSpec>,
}

impl Registry {
    /// Build the registry from the full catalogue.
    pub fn build() -> Result<Self, RegistryError> {
        Self::from_specs(tools::catalog())
    }

    fn from_specs(
        specs: impl Iterator<Item = &'static ToolSpec>,
    ) -> Result<Self, RegistryError> {
        let mut ordered = Vec::new();
        let mut by_name = HashMap::new();

        for spec in specs {
            if by_name.insert(spec.name, spec).is_some() {
                return Err(RegistryError::DuplicateName(spec.name));
            }
            ordered.push(spec);
        }

        let registry = Self { ordered, by_name };
        registry.check_aliases()?;
        Ok(registry)
    }

    fn check_aliases(&self) -> Result<(), RegistryError> {
        for spec in &self.ordered {
            let Some(target_name) = spec.alias_of else {
                continue;
            };
            let target = self
                .by_name
                .get(target_name)
                .ok_or(RegistryError::DanglingAlias(spec.name, target_name))?;
            if target.alias_of.is_some() {
                return Err(RegistryError::AliasOfAlias(spec.name, target_name));
            }
            if target.endpoint != spec.endpoint {
                return Err(RegistryError::AliasEndpointMismatch(spec.name, target_name));
            }
        }
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&'static ToolSpec> {
        self.by_name.get(name).copied()
    }

    /// Resolve a descriptor to its canonical operation.
    ///
    /// Pure and idempotent: a canonical descriptor resolves to itself, and
    /// `check_aliases` guarantees alias chains are one level deep.
    pub fn resolve(&self, spec: &'static ToolSpec) -> &'static ToolSpec {
        match spec.alias_of {
            Some(target) => self.by_name[target],
            None => spec,
        }
    }

    /// Descriptors in registration order.
    pub fn list(&self) -> impl Iterator<Item = &'static ToolSpec> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// JSON Schema for a tool's arguments, as advertised in `tools/list`.
    pub fn input_schema(spec: &ToolSpec) -> Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();

        for param in spec.params {
            let mut prop = serde_json::Map::new();
            prop.insert("type".into(), json!(param.kind.as_schema_type()));
            prop.insert("description".into(), json!(param.description));
            if let Some(default) = param.default {
                prop.insert("default".into(), json!(default));
            }
            properties.insert(param.name.to_string(), Value::Object(prop));
            if param.required {
                required.push(param.name);
            }
        }

        if spec.paged {
            properties.insert(
                "offset".into(),
                json!({
                    "type": "integer",
                    "description": "Starting index for pagination",
                    "minimum": 0,
                    "default": 0
                }),
            );
            properties.insert(
                "count".into(),
                json!({
                    "type": "integer",
                    "description": "Maximum number of items to return",
                    "minimum": 1,
                    "maximum": MAX_PAGE_SIZE,
                    "default": DEFAULT_PAGE_SIZE
                }),
            );
        }

        let mut schema = serde_json::Map::new();
        schema.insert("type".into(), json!("object"));
        schema.insert("properties".into(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".into(), json!(required));
        }
        Value::Object(schema)
    }

    /// The `tools/list` result payload.
    pub fn list_json(&self) -> Value {
        let tools: Vec<Value> = self
            .list()
            .map(|spec| {
                json!({
                    "name": spec.name,
                    "description": spec.description,
                    "inputSchema": Self::input_schema(spec),
                })
            })
            .collect();
        json!({ "tools": tools })
    }
}
