//! Shared test fixtures: a canned JADX plugin speaking just enough HTTP/1.1,
//! plus helpers for driving the dispatch layer through a ready session.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

use mcp_jadx_server::backend::BackendClient;
use mcp_jadx_server::config::ServerConfig;
use mcp_jadx_server::handlers;
use mcp_jadx_server::protocol::{JsonRpcRequest, RpcId};
use mcp_jadx_server::registry::Registry;
use mcp_jadx_server::session::Session;

/// Spawn a one-listener stand-in for the JADX plugin.
///
/// `respond` maps the request target (path + query) to a status and JSON
/// body. Connections are closed after each response; the listener serves
/// until the test ends.
pub async fn spawn_backend<F>(respond: F) -> SocketAddr
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub backend");
    let addr = listener.local_addr().expect("stub backend addr");
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                break;
            };
            let respond = respond.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                // Read until end of headers; the bridge only sends GETs.
                loop {
                    match stream.read(&mut chunk).await {
                        Ok(0) => return,
                        Ok(n) => {
                            buf.extend_from_slice(&chunk[..n]);
                            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                        Err(_) => return,
                    }
                }
                let head = String::from_utf8_lossy(&buf);
                let target = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();

                let (status, body) = respond(&target);
                let reason = match status {
                    200 => "OK",
                    404 => "Not Found",
                    500 => "Internal Server Error",
                    _ => "Status",
                };
                let resp = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(resp.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

pub fn test_config(addr: SocketAddr) -> ServerConfig {
    ServerConfig {
        backend_base: Url::parse(&format!("http://{addr}")).expect("stub backend url"),
        backend_timeout: Duration::from_secs(5),
    }
}

pub fn request(
    id: i64,
    method: &str,
    params: Option<serde_json::Value>,
    session: Option<&str>,
) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: Some(RpcId::Number(id)),
        method: method.into(),
        params,
        session: session.map(|s| s.to_string()),
    }
}

pub fn notification(method: &str, session: Option<&str>) -> JsonRpcRequest {
    JsonRpcRequest {
        jsonrpc: "2.0".into(),
        id: None,
        method: method.into(),
        params: None,
        session: session.map(|s| s.to_string()),
    }
}

pub fn tool_call(id: i64, name: &str, arguments: serde_json::Value, session: &str) -> JsonRpcRequest {
    request(
        id,
        "tools/call",
        Some(serde_json::json!({ "name": name, "arguments": arguments })),
        Some(session),
    )
}

/// Run the full handshake: `initialize` + `notifications/initialized`.
pub async fn ready_session(registry: &Registry, backend: &BackendClient) -> (Session, String) {
    let mut session = Session::new();

    let init = request(1, "initialize", None, None);
    let resp = handlers::dispatch(&init, &mut session, registry, backend)
        .await
        .expect("initialize must reply");
    let sid = resp.result.expect("initialize result")["sessionId"]
        .as_str()
        .expect("sessionId in initialize result")
        .to_string();

    let ack = notification("notifications/initialized", Some(&sid));
    let none = handlers::dispatch(&ack, &mut session, registry, backend).await;
    assert!(none.is_none(), "acknowledgment must not be answered");

    (session, sid)
}

/// Pull the JSON text payload out of a tools/call response.
pub fn tool_text(resp: &serde_json::Value) -> serde_json::Value {
    let text = resp["content"][0]["text"].as_str().expect("text content block");
    serde_json::from_str(text).expect("tool text payload is JSON")
}
