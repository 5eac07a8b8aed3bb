//! Session lifecycle state machine.
//!
//! One session per client connection, advancing linearly:
//! `Uninitialized → Initializing → Ready → Terminated`. `initialize` issues
//! an opaque session identifier that every subsequent call must echo; the
//! `notifications/initialized` acknowledgment unlocks ordinary tool calls.

use uuid::Uuid;

use crate::protocol::{BridgeErrorCode, BridgeErrorResponse, ClientInfo, InitializeParams};

/// Protocol revision this server speaks by default.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    /// `initialize` has been answered; waiting for `notifications/initialized`.
    Initializing,
    Ready,
    Terminated,
}

/// Session lifecycle failures. Surfaced verbatim at the protocol layer and
/// never mutate session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Server not initialized")]
    NotInitialized,
    #[error("Missing or mismatched session identifier")]
    InvalidSession,
    #[error("Session is closed")]
    SessionClosed,
}

impl From<SessionError> for BridgeErrorResponse {
    fn from(err: SessionError) -> Self {
        let code = match err {
            SessionError::NotInitialized => BridgeErrorCode::NotInitialized,
            SessionError::InvalidSession => BridgeErrorCode::InvalidSession,
            SessionError::SessionClosed => BridgeErrorCode::SessionClosed,
        };
        BridgeErrorResponse::new(code, err.to_string())
    }
}

pub struct Session {
    id: Option<String>,
    state: SessionState,
    protocol_version: String,
    client: Option<ClientInfo>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: None,
            state: SessionState::Uninitialized,
            protocol_version: PROTOCOL_VERSION.to_string(),
            client: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    /// Client metadata recorded at `initialize`, if any was sent.
    pub fn client_info(&self) -> Option<&ClientInfo> {
        self.client.as_ref()
    }

    /// Complete the `initialize` handshake: allocate the session identifier
    /// and record the negotiated protocol version and client metadata.
    ///
    /// Only legal in `Uninitialized`; the caller rejects repeats.
    pub fn initialize(&mut self, params: Option<InitializeParams>) -> &str {
        debug_assert_eq!(self.state, SessionState::Uninitialized);

        if let Some(params) = params {
            if let Some(version) = params.protocol_version {
                self.protocol_version = version;
            }
            self.client = params.client_info;
        }

        self.state = SessionState::Initializing;
        self.id.insert(Uuid::new_v4().to_string()).as_str()
    }

    /// Apply the client's `notifications/initialized` acknowledgment.
    ///
    /// Takes effect only in `Initializing` with a matching session
    /// identifier; returns whether the session became ready. A notification
    /// cannot be answered, so a mismatch is reported to the caller for
    /// logging only.
    pub fn acknowledge(&mut self, session_field: Option<&str>) -> bool {
        if self.state != SessionState::Initializing {
            return false;
        }
        if session_field != self.id.as_deref() {
            return false;
        }
        self.state = SessionState::Ready;
        true
    }

    /// Authorize an ordinary call (`tools/list`, `tools/call`, `shutdown`).
    ///
    /// Never mutates state: a mismatched identifier rejects the call, not
    /// the session.
    pub fn authorize(&self, session_field: Option<&str>) -> Result<(), SessionError> {
        match self.state {
            SessionState::Terminated => Err(SessionError::SessionClosed),
            SessionState::Uninitialized | SessionState::Initializing => {
                Err(SessionError::NotInitialized)
            }
            SessionState::Ready => match (self.id.as_deref(), session_field) {
                (Some(id), Some(given)) if id == given => Ok(()),
                _ => Err(SessionError::InvalidSession),
            },
        }
    }

    /// Explicit termination or transport teardown. Idempotent.
    pub fn terminate(&mut self) {
        self.state = SessionState::Terminated;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
