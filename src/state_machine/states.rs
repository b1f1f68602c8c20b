use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle states of a configure-BIOS task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Created, topology not yet resolved
    Started,
    /// Looking up the node and its OBM settings
    CheckingEligibility,
    /// Waiting on the SCP microservice
    Invoking,
    /// Remote call succeeded; removing the staged file if asked to
    CleaningUp,
    /// Finished successfully
    Complete,
    /// Node class not applicable; finished without doing anything
    Cancelled,
    /// Finished with an error
    Error,
}

impl TaskState {
    /// Check if this is a terminal state (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled | Self::Error)
    }

    /// Terminal states reported to the host as success
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "started"),
            Self::CheckingEligibility => write!(f, "checking_eligibility"),
            Self::Invoking => write!(f, "invoking"),
            Self::CleaningUp => write!(f, "cleaning_up"),
            Self::Complete => write!(f, "complete"),
            Self::Cancelled => write!(f, "cancelled"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl Default for TaskState {
    fn default() -> Self {
        Self::Started
    }
}
