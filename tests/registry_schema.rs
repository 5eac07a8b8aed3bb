//! Registry construction, alias resolution, and agreement between the
//! advertised `inputSchema` objects and the hand-rolled argument validator.

use serde_json::{json, Map, Value};

use mcp_jadx_server::protocol::{BridgeErrorCode, BridgeErrorResponse};
use mcp_jadx_server::registry::Registry;
use mcp_jadx_server::schema::validate_value;
use mcp_jadx_server::tools::{ParamKind, ToolSpec};
use mcp_jadx_server::validate::validate;

fn sample_value(kind: ParamKind) -> Value {
    match kind {
        ParamKind::String => json!("sample"),
        ParamKind::Integer => json!(1),
        ParamKind::Boolean => json!(true),
        ParamKind::Object => json!({}),
    }
}

fn minimal_arguments(spec: &ToolSpec) -> Value {
    let mut map = Map::new();
    for param in spec.params.iter().filter(|p| p.required) {
        map.insert(param.name.to_string(), sample_value(param.kind));
    }
    Value::Object(map)
}

#[test]
fn registry_builds_and_lists_in_registration_order() {
    let registry = Registry::build().expect("catalogue must have no duplicates");
    assert!(!registry.is_empty());

    let names: Vec<&str> = registry.list().map(|spec| spec.name).collect();
    assert_eq!(names.len(), registry.len());

    // Spot-check the catalogue across domains.
    for expected in [
        "health",
        "fetch_current_class",
        "get_class_source",
        "get_method_by_name",
        "get_method_code",
        "get_android_manifest",
        "get_strings",
        "rename_class",
        "get_xrefs_to_field",
        "debug_get_threads",
    ] {
        assert!(names.contains(&expected), "missing {expected}");
        assert!(registry.lookup(expected).is_some());
    }

    assert!(registry.lookup("no_such_tool").is_none());
}

#[test]
fn alias_resolution_is_idempotent() {
    let registry = Registry::build().unwrap();

    let alias = registry.lookup("get_method_code").unwrap();
    let canonical = registry.resolve(alias);
    assert_eq!(canonical.name, "get_method_by_name");
    assert_eq!(canonical.endpoint, alias.endpoint);

    // Re-resolving an already-canonical descriptor yields itself.
    let twice = registry.resolve(canonical);
    assert_eq!(twice.name, canonical.name);

    for spec in registry.list() {
        let resolved = registry.resolve(spec);
        assert!(resolved.alias_of.is_none(), "{} resolves to an alias", spec.name);
        assert_eq!(registry.resolve(resolved).name, resolved.name);
    }
}

#[test]
fn every_input_schema_compiles_and_accepts_minimal_arguments() {
    let registry = Registry::build().unwrap();

    for spec in registry.list() {
        let schema = Registry::input_schema(spec);
        let instance = minimal_arguments(spec);
        validate_value(&schema, &instance).unwrap_or_else(|e| {
            panic!("schema for {} rejects its own minimal arguments: {e}", spec.name)
        });
    }
}

#[test]
fn schema_and_validator_agree_on_missing_required_parameters() {
    let registry = Registry::build().unwrap();

    for spec in registry.list() {
        if spec.params.iter().all(|p| !p.required) {
            continue;
        }
        let schema = Registry::input_schema(spec);
        let empty = json!({});

        assert!(
            validate_value(&schema, &empty).is_err(),
            "advertised schema for {} must require its parameters",
            spec.name
        );
        assert!(
            validate(spec, Some(&empty)).is_err(),
            "validator for {} must require its parameters",
            spec.name
        );
    }
}

#[test]
fn validator_injects_declared_defaults() {
    let registry = Registry::build().unwrap();
    let spec = registry.lookup("search_classes_by_keyword").unwrap();

    let validated = validate(spec, Some(&json!({"search_term": "crypto"}))).unwrap();
    assert_eq!(validated["search_term"], json!("crypto"));
    assert_eq!(validated["package"], json!(""));
    assert_eq!(validated["search_in"], json!("code"));
}

#[test]
fn paged_tools_advertise_bounded_pagination_parameters() {
    let registry = Registry::build().unwrap();

    for name in ["get_all_classes", "get_strings", "get_xrefs_to_class", "search_classes_by_keyword"] {
        let spec = registry.lookup(name).unwrap();
        assert!(spec.paged, "{name} must be paged");

        let schema = Registry::input_schema(spec);
        let props = &schema["properties"];
        assert_eq!(props["offset"]["type"], json!("integer"), "{name}");
        assert_eq!(props["offset"]["minimum"], json!(0), "{name}");
        assert_eq!(props["count"]["minimum"], json!(1), "{name}");
        assert_eq!(props["count"]["maximum"], json!(10_000), "{name}");
    }

    let plain = registry.lookup("get_class_source").unwrap();
    let schema = Registry::input_schema(plain);
    assert!(schema["properties"].get("offset").is_none());
}

// ---------------------------------------------------------------------------
// Bridge error wire format
// ---------------------------------------------------------------------------

#[test]
fn golden_bridge_error_schema_validation() {
    // 1. Build a canonical backend-status error
    let response = BridgeErrorResponse::with_status(
        BridgeErrorCode::BackendStatus,
        "JADX plugin returned HTTP 404: not found",
        404,
    );

    let json_value = serde_json::to_value(&response).unwrap();

    // 2. Schema (v0) — frozen
    let schema = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Bridge Error Response v0",
        "type": "object",
        "required": ["error"],
        "additionalProperties": false,
        "properties": {
            "error": {
                "type": "object",
                "required": ["code", "message"],
                "additionalProperties": false,
                "properties": {
                    "code": {
                        "type": "string",
                        "enum": [
                            "not_initialized",
                            "invalid_session",
                            "session_closed",
                            "tool_not_found",
                            "invalid_arguments",
                            "backend_timeout",
                            "backend_unreachable",
                            "backend_status",
                            "backend_malformed"
                        ]
                    },
                    "message": { "type": "string", "minLength": 1 },
                    "status": { "type": "integer", "minimum": 100, "maximum": 599 }
                }
            }
        }
    });

    // 3. Validate against schema
    validate_value(&schema, &json_value).expect("bridge error JSON must satisfy v0 schema");

    // 4. Golden snapshot (byte-identical, stable)
    let expected = r#"{
  "error": {
    "code": "backend_status",
    "message": "JADX plugin returned HTTP 404: not found",
    "status": 404
  }
}"#;
    assert_eq!(serde_json::to_string_pretty(&response).unwrap(), expected);
}

#[test]
fn session_error_codes_round_trip_through_the_schema() {
    for code in [
        BridgeErrorCode::NotInitialized,
        BridgeErrorCode::InvalidSession,
        BridgeErrorCode::SessionClosed,
        BridgeErrorCode::ToolNotFound,
        BridgeErrorCode::InvalidArguments,
    ] {
        let response = BridgeErrorResponse::new(code, "detail");
        let value = serde_json::to_value(&response).unwrap();
        let parsed: BridgeErrorResponse = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.error.code, code);
        assert!(parsed.error.status.is_none());
    }
}
