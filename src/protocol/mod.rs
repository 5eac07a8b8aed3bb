pub mod request;
pub mod response;

pub use request::{ClientInfo, InitializeParams, JsonRpcRequest, RpcId, ToolCallParams};
pub use response::{
    BridgeError, BridgeErrorCode, BridgeErrorResponse, JsonRpcError, JsonRpcResponse, ToolResult,
    ToolResultContent,
};
