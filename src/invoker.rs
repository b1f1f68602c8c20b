//! # Remote Configuration Invoker
//!
//! Builds the updateComponents request for the SCP configuration service,
//! sends it, and interprets the reply. The service answers HTTP 200 for
//! failures too, so the `status` field of the body is the only success
//! signal. It can also answer `"OK"` when the hardware operation did not take
//! effect; nothing here tries to second-guess that.

use crate::config::ServiceTopology;
use crate::constants::{RECEIVE_TIMEOUT, STATUS_OK};
use crate::error::{BiosTaskError, Result};
use crate::logging::redact_sensitive;
use crate::models::{ConfigureBiosOptions, Obm};
use crate::services::Encryption;
use crate::transport::{HttpTransport, RequestDescriptor};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Body of the updateComponents call; BIOS fields the task was not given
/// are sent as `null`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComponentsRequest {
    pub server_request: ServerRequest,
    pub attributes: Value,
    pub bios_boot_sequence_order: Value,
    pub hdd_sequence_order: Value,
    pub enable_boot_devices: Value,
    pub disable_boot_devices: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRequest {
    #[serde(rename = "serverIP")]
    pub server_ip: String,
    pub server_username: String,
    pub server_password: String,
}

impl UpdateComponentsRequest {
    fn build(options: &ConfigureBiosOptions, username: &str, password: String) -> Self {
        Self {
            server_request: ServerRequest {
                server_ip: options.server_ip.clone(),
                server_username: username.to_string(),
                server_password: password,
            },
            attributes: options.attributes.clone(),
            bios_boot_sequence_order: options.bios_boot_sequence_order.clone(),
            hdd_sequence_order: options.hdd_sequence_order.clone(),
            enable_boot_devices: options.enable_boot_devices.clone(),
            disable_boot_devices: options.disable_boot_devices.clone(),
        }
    }
}

/// Reply envelope; fields other than `status` and `message` are kept as-is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl RemoteResponse {
    pub fn is_ok(&self) -> bool {
        matches!(&self.status, Some(Value::String(status)) if status == STATUS_OK)
    }

    /// `message` rendered as text, as carried by `RemoteOperationFailed`
    pub fn message_text(&self) -> String {
        match &self.message {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

pub struct RemoteConfigurationInvoker {
    transport: Arc<dyn HttpTransport>,
    encryption: Arc<dyn Encryption>,
    receive_timeout: Duration,
}

impl RemoteConfigurationInvoker {
    pub fn new(transport: Arc<dyn HttpTransport>, encryption: Arc<dyn Encryption>) -> Self {
        Self {
            transport,
            encryption,
            receive_timeout: RECEIVE_TIMEOUT,
        }
    }

    pub fn with_receive_timeout(mut self, timeout: Duration) -> Self {
        self.receive_timeout = timeout;
        self
    }

    #[instrument(skip_all, fields(server_ip = %options.server_ip))]
    pub async fn invoke(
        &self,
        topology: &ServiceTopology,
        options: &ConfigureBiosOptions,
        obm: &Obm,
    ) -> Result<RemoteResponse> {
        validate_addresses(options)?;

        let password = self.encryption.decrypt(&obm.config.password)?;
        let request = UpdateComponentsRequest::build(options, &obm.config.user, password);
        let body = serde_json::to_value(&request).map_err(|e| {
            BiosTaskError::invalid_input(format!("Could not serialize updateComponents request: {e}"))
        })?;
        drop(request);

        if tracing::enabled!(tracing::Level::DEBUG) {
            let mut logged = body.clone();
            redact_sensitive(&mut logged);
            debug!(body = %logged, "updateComponents request body");
        }

        let descriptor = RequestDescriptor {
            protocol: topology.endpoint.protocol.clone(),
            host: topology.endpoint.host.clone(),
            port: topology.endpoint.port,
            path: topology.update_components_path().to_string(),
            method: Method::POST,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            verify_tls: false,
            receive_timeout: self.receive_timeout,
            body: Some(body),
        };

        let response = self.transport.send(descriptor).await?;

        info!(
            http_status = response.status,
            body = %response.body,
            "Response from SCP Microservice for ConfigureBios"
        );

        let envelope: RemoteResponse = serde_json::from_str(&response.body).map_err(|e| {
            BiosTaskError::RemoteOperationFailed(format!(
                "Could not parse SCP Microservice response: {e}"
            ))
        })?;

        info!(status = ?envelope.status, "Status from SCP Microservice for Configure Bios");

        if envelope.is_ok() {
            Ok(envelope)
        } else {
            warn!(status = ?envelope.status, message = %envelope.message_text(), "SCP Microservice reported failure");
            Err(BiosTaskError::RemoteOperationFailed(envelope.message_text()))
        }
    }
}

fn validate_addresses(options: &ConfigureBiosOptions) -> Result<()> {
    let is_ip = |value: &str| value.parse::<IpAddr>().is_ok();

    if !is_ip(&options.server_ip) || !is_ip(&options.share_address) {
        return Err(BiosTaskError::invalid_input("Invalid ServerIP/ShareAddress"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_addresses() {
        let mut options = ConfigureBiosOptions {
            server_ip: "10.240.19.130".to_string(),
            share_address: "fe80::1".to_string(),
            ..Default::default()
        };
        assert!(validate_addresses(&options).is_ok());

        options.server_ip = "not-an-ip".to_string();
        assert_eq!(
            validate_addresses(&options),
            Err(BiosTaskError::invalid_input("Invalid ServerIP/ShareAddress"))
        );

        options.server_ip = "10.240.19.130".to_string();
        options.share_address = "".to_string();
        assert!(validate_addresses(&options).is_err());
    }

    #[test]
    fn test_request_shape() {
        let options = ConfigureBiosOptions {
            server_ip: "10.240.19.130".to_string(),
            share_address: "10.240.19.10".to_string(),
            attributes: json!([{ "name": "NumLock", "value": "On" }]),
            disable_boot_devices: json!(["HardDisk.List.1-1"]),
            ..Default::default()
        };

        let request = UpdateComponentsRequest::build(&options, "root", "calvin".to_string());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "serverRequest": {
                    "serverIP": "10.240.19.130",
                    "serverUsername": "root",
                    "serverPassword": "calvin"
                },
                "attributes": [{ "name": "NumLock", "value": "On" }],
                "biosBootSequenceOrder": null,
                "hddSequenceOrder": null,
                "enableBootDevices": null,
                "disableBootDevices": ["HardDisk.List.1-1"]
            })
        );
    }

    #[test]
    fn test_explicit_null_fields_are_forwarded() {
        let options: ConfigureBiosOptions = serde_json::from_value(json!({
            "serverIP": "10.240.19.130",
            "shareAddress": "10.240.19.10",
            "attributes": null,
            "hddSequenceOrder": ["Disk.SATAEmbedded.A-1"]
        }))
        .unwrap();

        let request = UpdateComponentsRequest::build(&options, "root", "calvin".to_string());
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["attributes"], Value::Null);
        assert!(body.as_object().unwrap().contains_key("attributes"));
        assert!(body.as_object().unwrap().contains_key("enableBootDevices"));
        assert_eq!(body["hddSequenceOrder"], json!(["Disk.SATAEmbedded.A-1"]));
    }

    #[test]
    fn test_response_envelope() {
        let ok: RemoteResponse =
            serde_json::from_str(r#"{"status":"OK","message":"done","jobId":"JID_1"}"#).unwrap();
        assert!(ok.is_ok());
        assert_eq!(ok.payload.get("jobId"), Some(&json!("JID_1")));

        let failed: RemoteResponse =
            serde_json::from_str(r#"{"status":"ERROR","message":"boom"}"#).unwrap();
        assert!(!failed.is_ok());
        assert_eq!(failed.message_text(), "boom");

        let lowercase: RemoteResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(!lowercase.is_ok());
        assert_eq!(lowercase.message_text(), "");
    }
}
