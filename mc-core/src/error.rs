//! Error types for the MediaCloud client.
//!
//! Every client operation returns `McError`. The variant tells the caller where
//! the failure came from: the server (`Remote`), the network (`Transport`),
//! the local filesystem (`Io`), or a success body that did not have the
//! expected shape (`MalformedResponse`).

use thiserror::Error;

/// Convenience type alias for Results using McError.
pub type McResult<T> = Result<T, McError>;

/// Unified error type for the MediaCloud client.
#[derive(Error, Debug)]
pub enum McError {
    // -- Remote errors --
    /// The server responded with a non-2xx status.
    ///
    /// `message` is the server's own `message` field when it sent one,
    /// otherwise the operation's default message.
    #[error("{message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Server-provided or default message.
        message: String,
    },

    /// A 2xx response whose body is missing required data.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    // -- Transport errors --
    /// No response was obtained. Holds the original reqwest error.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    // -- File/IO errors --
    /// A local file could not be opened or read. Holds the original error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    // -- Configuration errors --
    /// Failed to load, parse, or apply configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl McError {
    /// Build a remote error, preferring the server's message over `default`.
    pub fn remote(status: u16, server_message: Option<String>, default: &str) -> Self {
        let message = server_message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| default.to_string());
        McError::Remote { status, message }
    }

    /// Whether the server answered with an error status.
    pub fn is_remote(&self) -> bool {
        matches!(self, McError::Remote { .. })
    }

    /// Whether the request failed before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, McError::Transport(_))
    }

    /// The HTTP status of a remote error.
    pub fn status(&self) -> Option<u16> {
        match self {
            McError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message of a remote error.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            McError::Remote { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for McError {
    fn from(e: toml::de::Error) -> Self {
        McError::Config(e.to_string())
    }
}
