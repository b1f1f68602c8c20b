//! Registration metadata for the task, in the shape the host's task
//! catalogue expects.

use crate::constants::task::{FRIENDLY_NAME, IMPLEMENTS_TASK, INJECTABLE_NAME, JOB_NAME};
use serde::Serialize;
use serde_json::{Map, Value};

/// Options the task accepts; all default to null.
pub const OPTION_NAMES: [&str; 12] = [
    "serverIP",
    "serverUsername",
    "serverPassword",
    "attributes",
    "biosBootSequenceOrder",
    "hddSequenceOrder",
    "enableBootDevices",
    "disableBootDevices",
    "shareAddress",
    "shareName",
    "fileName",
    "cleanup",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    pub friendly_name: &'static str,
    pub injectable_name: &'static str,
    pub implements_task: &'static str,
    /// Job the host runs for this task
    pub run_job: &'static str,
    pub options: Map<String, Value>,
    pub properties: Map<String, Value>,
}

impl TaskDefinition {
    pub fn configure_bios() -> Self {
        Self {
            friendly_name: FRIENDLY_NAME,
            injectable_name: INJECTABLE_NAME,
            implements_task: IMPLEMENTS_TASK,
            run_job: JOB_NAME,
            options: OPTION_NAMES
                .iter()
                .map(|name| (name.to_string(), Value::Null))
                .collect(),
            properties: Map::new(),
        }
    }
}
