use serde::{Deserialize, Serialize};

/// Events that drive the task lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum TaskEvent {
    /// Topology resolved; start checking the node
    Begin,
    /// OBM credentials found; call the microservice
    Eligible,
    /// Node class not applicable
    Skip { node_type: String },
    /// Microservice reported OK
    Invoked,
    /// Cleanup handled
    Finish,
    /// Any failure, with its error message
    Fail(String),
}

impl TaskEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Begin => "begin",
            Self::Eligible => "eligible",
            Self::Skip { .. } => "skip",
            Self::Invoked => "invoked",
            Self::Finish => "finish",
            Self::Fail(_) => "fail",
        }
    }

    /// Create a failure event with the given error message
    pub fn fail_with_error(error: impl Into<String>) -> Self {
        Self::Fail(error.into())
    }
}
