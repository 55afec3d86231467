//! Error types for the rpc boundary.

use std::error::Error;
use std::fmt;

/// Failure of a remote call to settle to a result.
///
/// A record that does not exist is not a `RemoteError`; it comes back as a
/// `false` result from the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The request never completed (connection refused, reset, timeout).
    Transport(String),
    /// The server answered with a non-success status.
    Server { status: u16, message: String },
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Transport(msg) => write!(f, "transport failure: {}", msg),
            RemoteError::Server { status, message } => {
                write!(f, "server error {}: {}", status, message)
            }
            RemoteError::Decode(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl Error for RemoteError {}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        RemoteError::Decode(err.to_string())
    }
}

/// Error type for command handler operations.
#[derive(Debug)]
pub enum HandlerError {
    /// No handler registered for this command name.
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    DecodeFailed(String),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::UnknownCommand(name) => write!(f, "unknown command: {}", name),
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl Error for HandlerError {}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
        }
    }
}
