use crate::task::traits::StagedFileCleaner;
use std::path::PathBuf;
use tokio::runtime::Handle;
use tracing::{debug, warn};

/// Removes staged files on a background tokio task.
#[derive(Debug, Default, Clone)]
pub struct TokioFileCleaner;

impl StagedFileCleaner for TokioFileCleaner {
    fn discard(&self, path: PathBuf) {
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    match tokio::fs::remove_file(&path).await {
                        Ok(()) => debug!(path = %path.display(), "Removed staged file"),
                        Err(e) => warn!(path = %path.display(), error = %e, "Could not remove staged file"),
                    }
                });
            }
            Err(_) => {
                if let Err(e) = std::fs::remove_file(&path) {
                    warn!(path = %path.display(), error = %e, "Could not remove staged file");
                }
            }
        }
    }
}
