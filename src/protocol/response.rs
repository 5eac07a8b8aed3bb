use serde::{Deserialize, Serialize};

use super::request::RpcId;

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object (protocol-level errors).
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self { code: -32700, message: "Parse error".into(), data: None }
    }

    pub fn invalid_request() -> Self {
        Self { code: -32600, message: "Invalid Request".into(), data: None }
    }

    pub fn invalid_request_with(detail: impl Into<String>) -> Self {
        Self { code: -32600, message: detail.into(), data: None }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self { code: -32602, message: detail.into(), data: None }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self { code: -32603, message: detail.into(), data: None }
    }
}

// ---------------------------------------------------------------------------
// MCP tool result layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// MCP tool call result wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    pub content: Vec<ToolResultContent>,
    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// A single content block inside a tool result.
#[derive(Debug, Clone, Serialize)]
pub struct ToolResultContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub text: String,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolResultContent {
                content_type: "text".into(),
                text: text.into(),
            }],
            is_error: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Bridge error taxonomy (wire form)
// ---------------------------------------------------------------------------

/// Bridge error code (v0).
///
/// Session codes reject the call at the protocol layer; tool codes travel
/// inside an `isError: true` tool result without touching session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeErrorCode {
    NotInitialized,
    InvalidSession,
    SessionClosed,
    ToolNotFound,
    InvalidArguments,
    BackendTimeout,
    BackendUnreachable,
    BackendStatus,
    BackendMalformed,
}

impl BridgeErrorCode {
    /// Map to the corresponding JSON-RPC 2.0 error code.
    ///
    /// Session lifecycle failures → -32600 (Invalid Request)
    /// Caller mistakes            → -32602 (Invalid params)
    /// Backend failures           → -32603 (Internal error)
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::NotInitialized | Self::InvalidSession | Self::SessionClosed => -32600,
            Self::ToolNotFound | Self::InvalidArguments => -32602,
            Self::BackendTimeout
            | Self::BackendUnreachable
            | Self::BackendStatus
            | Self::BackendMalformed => -32603,
        }
    }
}

/// Bridge error object.
///
/// `status` is present only for `backend_status` and carries the HTTP status
/// the JADX plugin answered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeError {
    pub code: BridgeErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Bridge error response (top-level).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeErrorResponse {
    pub error: BridgeError,
}

impl BridgeErrorResponse {
    pub fn new(code: BridgeErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: BridgeError {
                code,
                message: message.into(),
                status: None,
            },
        }
    }

    pub fn with_status(code: BridgeErrorCode, message: impl Into<String>, status: u16) -> Self {
        Self {
            error: BridgeError {
                code,
                message: message.into(),
                status: Some(status),
            },
        }
    }
}

/// Convert a bridge error into a JSON-RPC error.
///
/// The JSON-RPC `code` is derived from the bridge error code.
/// The JSON-RPC `message` is the human-readable bridge message.
/// The full bridge error object is carried in `data` for structured clients.
impl From<BridgeErrorResponse> for JsonRpcError {
    fn from(bridge: BridgeErrorResponse) -> Self {
        Self {
            code: bridge.error.code.json_rpc_code(),
            message: bridge.error.message.clone(),
            data: Some(
                serde_json::to_value(&bridge)
                    .expect("BridgeErrorResponse must serialize to JSON Value"),
            ),
        }
    }
}

/// Convert a bridge error into a tool result with `isError: true`.
///
/// The text content is the JSON-serialized `BridgeErrorResponse`, preserving
/// the structured error for clients that inspect tool output.
impl From<BridgeErrorResponse> for ToolResult {
    fn from(bridge: BridgeErrorResponse) -> Self {
        let json = serde_json::to_string(&bridge)
            .expect("BridgeErrorResponse must serialize to JSON string");
        Self::error(format!("{json}\n"))
    }
}
