//! # Configure-BIOS Task
//!
//! The task controller and the lifecycle contracts it is driven through.
//!
//! - [`traits`] - `TaskLifecycle`, `TaskCompletion`, `StagedFileCleaner`
//! - [`reporter`] - report-once wrapper around the completion mechanism
//! - [`cleanup`] - fire-and-forget staged file removal
//! - [`definition`] - static task registration metadata
//! - [`configure_bios`] - the controller itself

pub mod cleanup;
pub mod configure_bios;
pub mod definition;
pub mod reporter;
pub mod traits;

pub use cleanup::TokioFileCleaner;
pub use configure_bios::{ConfigureBiosTask, TaskOutcome, TaskServices};
pub use definition::TaskDefinition;
pub use reporter::{CompletionReporter, LoggingCompletion};
pub use traits::{StagedFileCleaner, TaskCompletion, TaskLifecycle};
