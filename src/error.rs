use std::io;
use thiserror::Error;

/// Custom error type for the bridge
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Hardware session error: {0}")]
    HardwareInit(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the bridge
pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    /// Create a hardware session error
    pub fn hardware_init<S: Into<String>>(msg: S) -> Self {
        BridgeError::HardwareInit(msg.into())
    }

    /// Create a platform error
    pub fn platform<S: Into<String>>(msg: S) -> Self {
        BridgeError::Platform(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        BridgeError::Other(msg.into())
    }
}
