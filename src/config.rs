use std::time::Duration;

use url::Url;

/// Default base URL of the JADX plugin HTTP server.
const DEFAULT_JADX_HTTP_BASE: &str = "http://127.0.0.1:8650";

/// Default timeout for backend calls (60 seconds).
const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 60;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub backend_base: Url,
    pub backend_timeout: Duration,
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `JADX_HTTP_BASE` (optional, default `http://127.0.0.1:8650`) — base
    ///   URL of the JADX plugin HTTP server
    /// - `JADX_TOOL_TIMEOUT_SECS` (optional, default 60) — max seconds per
    ///   backend call
    pub fn from_env() -> Result<Self, String> {
        let base = std::env::var("JADX_HTTP_BASE")
            .unwrap_or_else(|_| DEFAULT_JADX_HTTP_BASE.to_string());
        let backend_base = Url::parse(&base)
            .map_err(|e| format!("JADX_HTTP_BASE is not a valid URL: {e}"))?;

        let timeout_secs = match std::env::var("JADX_TOOL_TIMEOUT_SECS") {
            Ok(val) => val
                .parse::<u64>()
                .map_err(|_| "JADX_TOOL_TIMEOUT_SECS must be a positive integer".to_string())?,
            Err(_) => DEFAULT_TOOL_TIMEOUT_SECS,
        };

        Ok(Self {
            backend_base,
            backend_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
