//! Fixed values shared by the configure-BIOS task.

use std::time::Duration;

/// Only nodes of this class are configured; anything else is skipped.
pub const ELIGIBLE_NODE_TYPE: &str = "compute";

/// OBM service tag the credentials must be registered under.
pub const WSMAN_OBM_SERVICE: &str = "dell-wsman-obm-service";

/// Receive timeout for the updateComponents call.
pub const RECEIVE_TIMEOUT: Duration = Duration::from_millis(60_000);

/// The only status value the microservice uses to signal success.
pub const STATUS_OK: &str = "OK";

/// Path used when the topology does not name an updateComponents path.
pub const DEFAULT_SERVICE_PATH: &str = "/";

pub mod task {
    pub const FRIENDLY_NAME: &str = "Dell Wsman Configure BIOS";
    pub const INJECTABLE_NAME: &str = "Task.Dell.Wsman.ConfigureBios";
    pub const IMPLEMENTS_TASK: &str = "Task.Base.Dell.Wsman.ConfigureBios";
    pub const JOB_NAME: &str = "Job.Dell.Wsman.ConfigureBios";
}
