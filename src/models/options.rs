//! Options a configure-BIOS task is created with.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Immutable task input, in the camelCase shape the task schema declares.
///
/// The BIOS fields are forwarded to the microservice untouched, so they are
/// kept as raw JSON. Absent and explicit `null` both read as `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigureBiosOptions {
    #[serde(default, rename = "serverIP")]
    pub server_ip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_password: Option<String>,
    #[serde(default)]
    pub attributes: Value,
    #[serde(default)]
    pub bios_boot_sequence_order: Value,
    #[serde(default)]
    pub hdd_sequence_order: Value,
    #[serde(default)]
    pub enable_boot_devices: Value,
    #[serde(default)]
    pub disable_boot_devices: Value,
    #[serde(default)]
    pub share_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub cleanup: bool,
}

impl ConfigureBiosOptions {
    /// `{shareName}/{fileName}` when both are known
    pub fn staged_file_path(&self) -> Option<PathBuf> {
        match (self.share_name.as_deref(), self.file_name.as_deref()) {
            (Some(share), Some(file)) if !share.is_empty() && !file.is_empty() => {
                Some(PathBuf::from(format!("{share}/{file}")))
            }
            _ => None,
        }
    }
}
