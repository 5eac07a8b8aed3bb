//! HTTP client for the JADX plugin backend.
//!
//! Every backend operation is a single GET against the plugin's local HTTP
//! server with query-encoded parameters. One call maps to exactly one HTTP
//! request; the client never retries — rename operations mutate live GUI
//! state and a blind retry could apply them twice.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ServerConfig;
use crate::protocol::{BridgeErrorCode, BridgeErrorResponse};

/// Upper bound on the diagnostic body excerpt carried in errors.
const BODY_SNIPPET_MAX: usize = 512;

/// Backend call failures.
///
/// Network-level failures (`Timeout`, `ConnectionFailed`) are distinguished
/// from application-level ones (`HttpStatus`, `MalformedResponse`) so the
/// caller can decide whether a retry makes sense. The bridge itself never
/// retries.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend call timed out after {0} seconds")]
    Timeout(u64),

    #[error("cannot reach JADX plugin: {0}")]
    ConnectionFailed(String),

    #[error("JADX plugin returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("JADX plugin returned a malformed response: {0}")]
    MalformedResponse(String),
}

impl From<BackendError> for BridgeErrorResponse {
    fn from(err: BackendError) -> Self {
        match &err {
            BackendError::Timeout(_) => {
                BridgeErrorResponse::new(BridgeErrorCode::BackendTimeout, err.to_string())
            }
            BackendError::ConnectionFailed(_) => {
                BridgeErrorResponse::new(BridgeErrorCode::BackendUnreachable, err.to_string())
            }
            BackendError::HttpStatus { status, .. } => BridgeErrorResponse::with_status(
                BridgeErrorCode::BackendStatus,
                err.to_string(),
                *status,
            ),
            BackendError::MalformedResponse(_) => {
                BridgeErrorResponse::new(BridgeErrorCode::BackendMalformed, err.to_string())
            }
        }
    }
}

/// Thin client over the JADX plugin HTTP API.
///
/// Holds no per-call state beyond one HTTP exchange. The underlying
/// connection pool is safe to share across concurrent callers.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base: Url,
    timeout: Duration,
}

impl BackendClient {
    pub fn new(config: &ServerConfig) -> Result<Self, String> {
        let http = reqwest::Client::builder()
            .timeout(config.backend_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| format!("cannot build HTTP client: {e}"))?;
        Ok(Self {
            http,
            base: config.backend_base.clone(),
            timeout: config.backend_timeout,
        })
    }

    /// Issue one GET against `endpoint` and decode the JSON body.
    pub async fn call(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, BackendError> {
        let url = self.operation_url(endpoint, params);
        debug!(%url, "backend request");

        let resp = match self.http.get(url).send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => {
                return Err(BackendError::Timeout(self.timeout.as_secs()));
            }
            Err(e) => return Err(BackendError::ConnectionFailed(e.to_string())),
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => {
                return Err(BackendError::Timeout(self.timeout.as_secs()));
            }
            Err(e) => return Err(BackendError::ConnectionFailed(e.to_string())),
        };

        if !status.is_success() {
            return Err(BackendError::HttpStatus {
                status: status.as_u16(),
                body: snippet(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| BackendError::MalformedResponse(format!("{e}; body: {}", snippet(&body))))
    }

    fn operation_url(&self, endpoint: &str, params: &[(String, String)]) -> Url {
        let mut url = self.base.clone();
        let path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        url.set_path(&path);
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

/// Truncate a response body for diagnostics, respecting char boundaries.
fn snippet(body: &str) -> String {
    if body.len() <= BODY_SNIPPET_MAX {
        return body.to_string();
    }
    let mut end = BODY_SNIPPET_MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
