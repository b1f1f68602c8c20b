use crate::error::BiosTaskError;
use crate::task::traits::TaskCompletion;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Wraps a [`TaskCompletion`] so that it is called at most once.
pub struct CompletionReporter {
    completion: Arc<dyn TaskCompletion>,
    reported: AtomicBool,
}

impl CompletionReporter {
    pub fn new(completion: Arc<dyn TaskCompletion>) -> Self {
        Self {
            completion,
            reported: AtomicBool::new(false),
        }
    }

    /// Forward the outcome unless one was already reported.
    ///
    /// Returns whether this call delivered the report.
    pub async fn report(&self, error: Option<&BiosTaskError>) -> bool {
        if self
            .reported
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Terminal report already delivered; ignoring duplicate");
            return false;
        }

        self.completion.report(error).await;
        true
    }

    pub fn has_reported(&self) -> bool {
        self.reported.load(Ordering::Acquire)
    }
}

/// Completion sink that only logs; for hosts without a completion callback.
#[derive(Debug, Default, Clone)]
pub struct LoggingCompletion;

#[async_trait]
impl TaskCompletion for LoggingCompletion {
    async fn report(&self, error: Option<&BiosTaskError>) {
        match error {
            None => info!("Task completed successfully"),
            Some(err) => error!(error = %err, error_code = err.error_code(), "Task failed"),
        }
    }
}
