//! # Execution Context
//!
//! Identifies the task instance and the node it targets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for one configure-BIOS task instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContext {
    /// Unique identifier for this task instance
    pub task_id: Uuid,

    /// Identifier of the node being configured
    pub target: String,
}

impl TaskContext {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            task_id: Uuid::new_v4(),
            target: target.into(),
        }
    }

    pub fn with_task_id(task_id: Uuid, target: impl Into<String>) -> Self {
        Self {
            task_id,
            target: target.into(),
        }
    }
}
