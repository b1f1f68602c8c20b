//! # Task Lifecycle Traits
//!
//! Contracts between a task and the host that schedules it.

use crate::error::BiosTaskError;
use crate::task::configure_bios::TaskOutcome;
use async_trait::async_trait;
use std::path::PathBuf;

/// A unit of work the host orchestrator can run to a terminal outcome.
#[async_trait]
pub trait TaskLifecycle: Send + Sync {
    /// Run the task; the outcome has already been reported when this returns.
    async fn run(&self) -> TaskOutcome;

    /// Get the task name for identification
    ///
    /// Used for logging. Default implementation returns the type name.
    fn task_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Host-side sink for the single terminal report of a task instance.
///
/// `None` signals success; `Some(error)` signals failure.
#[async_trait]
pub trait TaskCompletion: Send + Sync {
    async fn report(&self, error: Option<&BiosTaskError>);
}

/// Best-effort removal of a staged file.
///
/// Returns immediately; failures are the implementation's to log and are
/// never surfaced to the task.
pub trait StagedFileCleaner: Send + Sync {
    fn discard(&self, path: PathBuf);
}
