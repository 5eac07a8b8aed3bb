//! JSON-RPC method dispatch and the tool-call pipeline.
//!
//! `dispatch` routes a decoded envelope through the session state machine;
//! `dispatch_tool_call` runs the per-call pipeline: registry lookup → alias
//! resolution → argument validation → pagination normalization → backend
//! call → result wrapping. Tool-level failures become `isError: true`
//! results and never touch session state.

use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::backend::BackendClient;
use crate::paginate::{self, PageWindow};
use crate::protocol::{
    BridgeErrorCode, BridgeErrorResponse, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ToolCallParams, ToolResult,
};
use crate::registry::Registry;
use crate::session::{Session, SessionState};
use crate::validate;

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(
    req: &JsonRpcRequest,
    session: &mut Session,
    registry: &Registry,
    backend: &BackendClient,
) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => Some(handle_initialize(req, session)),

        "notifications/initialized" => {
            if !session.acknowledge(req.session.as_deref()) {
                warn!(
                    state = ?session.state(),
                    "ignoring initialized notification (wrong state or session id)"
                );
            }
            None
        }

        "ping" => match authorized(req, session) {
            Ok(()) => Some(JsonRpcResponse::success(req.id.clone(), json!({}))),
            Err(resp) => resp,
        },

        "tools/list" => match authorized(req, session) {
            Ok(()) => Some(JsonRpcResponse::success(req.id.clone(), registry.list_json())),
            Err(resp) => resp,
        },

        "tools/call" => match authorized(req, session) {
            Ok(()) => {
                let params: ToolCallParams = match &req.params {
                    Some(v) => match serde_json::from_value(v.clone()) {
                        Ok(p) => p,
                        Err(e) => {
                            return Some(JsonRpcResponse::error(
                                req.id.clone(),
                                JsonRpcError::invalid_params(format!(
                                    "Invalid tools/call params: {e}"
                                )),
                            ));
                        }
                    },
                    None => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params("Missing params for tools/call"),
                        ));
                    }
                };

                let tool_result = dispatch_tool_call(&params, registry, backend).await;
                let result_json = serde_json::to_value(&tool_result)
                    .expect("ToolResult must serialize to JSON Value");
                Some(JsonRpcResponse::success(req.id.clone(), result_json))
            }
            Err(resp) => resp,
        },

        "shutdown" => match authorized(req, session) {
            Ok(()) => {
                session.terminate();
                Some(JsonRpcResponse::success(req.id.clone(), json!({})))
            }
            Err(resp) => resp,
        },

        _ => match authorized(req, session) {
            Ok(()) => Some(JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::method_not_found(&req.method),
            )),
            Err(resp) => resp,
        },
    }
}

fn handle_initialize(req: &JsonRpcRequest, session: &mut Session) -> JsonRpcResponse {
    match session.state() {
        SessionState::Uninitialized => {}
        SessionState::Terminated => {
            return JsonRpcResponse::error(
                req.id.clone(),
                BridgeErrorResponse::new(
                    BridgeErrorCode::SessionClosed,
                    "Session is closed",
                )
                .into(),
            );
        }
        SessionState::Initializing | SessionState::Ready => {
            return JsonRpcResponse::error(
                req.id.clone(),
                JsonRpcError::invalid_request_with("initialize may only be called once"),
            );
        }
    }

    let params = match &req.params {
        Some(v) => match serde_json::from_value(v.clone()) {
            Ok(p) => Some(p),
            Err(e) => {
                return JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::invalid_params(format!("Invalid initialize params: {e}")),
                );
            }
        },
        None => None,
    };

    let session_id = session.initialize(params).to_string();
    let client = session
        .client_info()
        .and_then(|c| c.name.as_deref())
        .unwrap_or("unknown");
    debug!(session_id = %session_id, client = %client, "session initialized");

    let result = json!({
        "protocolVersion": session.protocol_version(),
        "capabilities": {
            "tools": {}
        },
        "serverInfo": {
            "name": "mcp-jadx-server",
            "version": env!("CARGO_PKG_VERSION")
        },
        "sessionId": session_id,
    });
    JsonRpcResponse::success(req.id.clone(), result)
}

/// Gate an ordinary call through the session state machine.
///
/// On rejection, produces the protocol-level error response (or `None` for
/// a notification, which cannot be answered).
fn authorized(
    req: &JsonRpcRequest,
    session: &Session,
) -> Result<(), Option<JsonRpcResponse>> {
    match session.authorize(req.session.as_deref()) {
        Ok(()) => Ok(()),
        Err(err) => {
            if req.id.is_none() {
                // A notification cannot be answered; log the rejection.
                warn!(method = %req.method, error = %err, "rejected notification");
                return Err(None);
            }
            Err(Some(JsonRpcResponse::error(
                req.id.clone(),
                BridgeErrorResponse::from(err).into(),
            )))
        }
    }
}

/// The per-call tool pipeline.
pub async fn dispatch_tool_call(
    params: &ToolCallParams,
    registry: &Registry,
    backend: &BackendClient,
) -> ToolResult {
    let Some(spec) = registry.lookup(&params.name) else {
        return BridgeErrorResponse::new(
            BridgeErrorCode::ToolNotFound,
            format!("Unknown tool: {}", params.name),
        )
        .into();
    };
    // Aliases validate against their own schema but run the canonical
    // operation.
    let canonical = registry.resolve(spec);

    let validated = match validate::validate(spec, params.arguments.as_ref()) {
        Ok(v) => v,
        Err(e) => return BridgeErrorResponse::from(e).into(),
    };

    let mut query: Vec<(String, String)> = Vec::with_capacity(spec.params.len() + 2);
    for param in spec.params {
        if let Some(value) = validated.get(param.name) {
            query.push((param.wire_name().to_string(), wire_value(value)));
        }
    }

    let window = if canonical.paged {
        let empty = Map::new();
        let raw = match params.arguments.as_ref() {
            Some(Value::Object(map)) => map,
            _ => &empty,
        };
        match PageWindow::from_args(raw) {
            Ok(window) => {
                for (key, value) in window.query_pairs() {
                    query.push((key.to_string(), value));
                }
                Some(window)
            }
            Err(e) => return BridgeErrorResponse::from(e).into(),
        }
    } else {
        None
    };

    match backend.call(canonical.endpoint, &query).await {
        Ok(value) => {
            let payload = match &window {
                Some(window) => paginate::page_envelope(window, &value),
                None => value,
            };
            let text = serde_json::to_string(&payload)
                .expect("backend payload must serialize to JSON string");
            ToolResult::text(text)
        }
        Err(err) => {
            warn!(tool = %params.name, endpoint = canonical.endpoint, error = %err, "backend call failed");
            BridgeErrorResponse::from(err).into()
        }
    }
}

/// Encode a validated argument for the query string.
fn wire_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
