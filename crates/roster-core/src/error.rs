use thiserror::Error;

/// The one message shown to the user when a character fetch fails.
///
/// Transport, status and decode failures all collapse to this text; the
/// detailed cause only goes to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load characters.";

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Whether this error came from talking to the remote character service.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            RosterError::Transport(_) | RosterError::Status { .. } | RosterError::Decode(_)
        )
    }

    /// Human-readable message for the UI.
    pub fn user_message(&self) -> String {
        if self.is_fetch_failure() {
            FETCH_FAILED_MESSAGE.to_string()
        } else {
            self.to_string()
        }
    }
}
