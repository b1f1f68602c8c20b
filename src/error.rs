//! Error types for the configure-BIOS task.
//!

use thiserror::Error;

/// Every failure the task can report as its terminal outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BiosTaskError {
    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),
    #[error("Node not found: {node_id}")]
    NodeNotFound { node_id: String },
    #[error("Cannot find DELL WSMAN OBM settings for node {node_id}")]
    ObmNotFound { node_id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Remote operation failed: {0}")]
    RemoteOperationFailed(String),
    #[error("Datastore error: {0}")]
    Datastore(String),
    #[error("Decryption error: {0}")]
    Decryption(String),
    #[error("State transition error: {0}")]
    StateTransition(String),
}

impl BiosTaskError {
    /// Stable code used when the terminal outcome is logged or reported.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing(_) => "CONFIGURATION_MISSING",
            Self::NodeNotFound { .. } => "NODE_NOT_FOUND",
            Self::ObmNotFound { .. } => "OBM_NOT_FOUND",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::TransportError(_) => "TRANSPORT_ERROR",
            Self::RemoteOperationFailed(_) => "REMOTE_OPERATION_FAILED",
            Self::Datastore(_) => "DATASTORE_ERROR",
            Self::Decryption(_) => "DECRYPTION_ERROR",
            Self::StateTransition(_) => "STATE_TRANSITION_ERROR",
        }
    }

    /// Detail carried by a remote failure, i.e. the service's `message` field.
    pub fn remote_detail(&self) -> Option<&str> {
        match self {
            Self::RemoteOperationFailed(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn configuration_missing(what: impl Into<String>) -> Self {
        Self::ConfigurationMissing(what.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<::config::ConfigError> for BiosTaskError {
    fn from(error: ::config::ConfigError) -> Self {
        BiosTaskError::ConfigurationMissing(format!("Failed to load configuration: {error}"))
    }
}

pub type Result<T> = std::result::Result<T, BiosTaskError>;
