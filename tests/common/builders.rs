//! Fixtures for configure-BIOS task tests.

use super::mocks::*;
use bios_config_task::config::{ConfigurationResolver, SmiConfig};
use bios_config_task::constants::WSMAN_OBM_SERVICE;
use bios_config_task::models::{ConfigureBiosOptions, Node, Obm, ObmConfig, TaskContext};
use bios_config_task::task::{ConfigureBiosTask, TaskServices};
use serde_json::json;
use std::sync::Arc;

pub const NODE_ID: &str = "58a4cf1bd3dd8b5b4c6f1a2e";
pub const UPDATE_PATH: &str = "/api/1.0/server/configuration/updateComponents";

pub fn smi_config() -> SmiConfig {
    serde_json::from_value(json!({
        "dell": {
            "gateway": "https://10.240.19.5:46018",
            "services": {
                "configuration": { "updateComponents": UPDATE_PATH }
            }
        }
    }))
    .unwrap()
}

pub fn compute_node() -> Node {
    Node::new(NODE_ID, "compute")
}

pub fn wsman_obm() -> Obm {
    Obm {
        node: NODE_ID.to_string(),
        service: WSMAN_OBM_SERVICE.to_string(),
        config: ObmConfig {
            host: "10.240.19.130".to_string(),
            user: "root".to_string(),
            password: "enc:calvin".to_string(),
        },
    }
}

pub fn bios_options() -> ConfigureBiosOptions {
    serde_json::from_value(json!({
        "serverIP": "10.240.19.130",
        "shareAddress": "10.240.19.10",
        "shareName": "/home/share",
        "fileName": "bios_config.xml",
        "attributes": [{ "name": "NumLock", "value": "On" }],
        "biosBootSequenceOrder": ["NIC.Integrated.1-1-1", "HardDisk.List.1-1"],
        "hddSequenceOrder": ["Disk.SATAEmbedded.A-1"],
        "enableBootDevices": ["NIC.Integrated.1-1-1"],
        "disableBootDevices": [],
        "cleanup": true
    }))
    .unwrap()
}

pub fn harness(store: MockNodeStore, transport: MockTransport) -> Harness {
    Harness {
        store: Arc::new(store),
        transport: Arc::new(transport),
        encryption: Arc::new(MockEncryption::default()),
        cleaner: Arc::new(MockCleaner::default()),
        completion: Arc::new(MockCompletion::default()),
    }
}

impl Harness {
    pub fn services(&self, config: SmiConfig) -> TaskServices {
        TaskServices {
            configuration: ConfigurationResolver::new(config),
            store: self.store.clone(),
            transport: self.transport.clone(),
            encryption: self.encryption.clone(),
            cleaner: self.cleaner.clone(),
            completion: self.completion.clone(),
        }
    }

    pub fn task(&self, options: ConfigureBiosOptions) -> ConfigureBiosTask {
        ConfigureBiosTask::new(options, TaskContext::new(NODE_ID), self.services(smi_config()))
    }
}

/// Store holding an eligible node with WS-Man credentials
pub fn eligible_store() -> MockNodeStore {
    MockNodeStore::new()
        .with_node(compute_node())
        .with_obm(wsman_obm())
}
