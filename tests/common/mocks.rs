//! Hand-written collaborators that record every call for assertions.

use async_trait::async_trait;
use bios_config_task::error::{BiosTaskError, Result};
use bios_config_task::models::{Node, Obm};
use bios_config_task::services::{Encryption, NodeStore};
use bios_config_task::task::{StagedFileCleaner, TaskCompletion};
use bios_config_task::transport::{HttpResponse, HttpTransport, RequestDescriptor};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Datastore double with per-method call counters
#[derive(Default)]
pub struct MockNodeStore {
    nodes: HashMap<String, Node>,
    obms: Vec<Obm>,
    pub node_lookups: Mutex<Vec<String>>,
    pub obm_lookups: Mutex<Vec<(String, String, bool)>>,
}

impl MockNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.insert(node.id.clone(), node);
        self
    }

    pub fn with_obm(mut self, obm: Obm) -> Self {
        self.obms.push(obm);
        self
    }

    pub fn total_calls(&self) -> usize {
        self.node_lookups.lock().unwrap().len() + self.obm_lookups.lock().unwrap().len()
    }

    pub fn obm_lookup_count(&self) -> usize {
        self.obm_lookups.lock().unwrap().len()
    }
}

#[async_trait]
impl NodeStore for MockNodeStore {
    async fn find_node_by_identifier(&self, id: &str) -> Result<Option<Node>> {
        self.node_lookups.lock().unwrap().push(id.to_string());
        Ok(self.nodes.get(id).cloned())
    }

    async fn find_obm_by_node(
        &self,
        node_id: &str,
        service: &str,
        exact_match: bool,
    ) -> Result<Option<Obm>> {
        self.obm_lookups
            .lock()
            .unwrap()
            .push((node_id.to_string(), service.to_string(), exact_match));
        Ok(self
            .obms
            .iter()
            .find(|obm| obm.node == node_id && obm.service == service)
            .cloned())
    }
}

/// What the mock transport answers with
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Body(String),
    Error(String),
}

/// Stateless transport double: every request gets the same reply
pub struct MockTransport {
    reply: ScriptedReply,
    pub requests: Mutex<Vec<RequestDescriptor>>,
}

impl MockTransport {
    pub fn replying(body: serde_json::Value) -> Self {
        Self {
            reply: ScriptedReply::Body(body.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn replying_raw(body: impl Into<String>) -> Self {
        Self {
            reply: ScriptedReply::Body(body.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: ScriptedReply::Error(message.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<RequestDescriptor> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: RequestDescriptor) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            ScriptedReply::Body(body) => Ok(HttpResponse {
                status: 200,
                body: body.clone(),
            }),
            ScriptedReply::Error(message) => Err(BiosTaskError::TransportError(message.clone())),
        }
    }
}

/// Treats `enc:<plaintext>` as the ciphertext format
#[derive(Default)]
pub struct MockEncryption {
    pub calls: Mutex<usize>,
}

impl Encryption for MockEncryption {
    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        ciphertext
            .strip_prefix("enc:")
            .map(str::to_string)
            .ok_or_else(|| BiosTaskError::Decryption("not an encrypted value".to_string()))
    }
}

#[derive(Default)]
pub struct MockCleaner {
    pub discarded: Mutex<Vec<PathBuf>>,
}

impl MockCleaner {
    pub fn discarded(&self) -> Vec<PathBuf> {
        self.discarded.lock().unwrap().clone()
    }
}

impl StagedFileCleaner for MockCleaner {
    fn discard(&self, path: PathBuf) {
        self.discarded.lock().unwrap().push(path);
    }
}

#[derive(Default)]
pub struct MockCompletion {
    pub reports: Mutex<Vec<Option<BiosTaskError>>>,
}

impl MockCompletion {
    pub fn reports(&self) -> Vec<Option<BiosTaskError>> {
        self.reports.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskCompletion for MockCompletion {
    async fn report(&self, error: Option<&BiosTaskError>) {
        self.reports.lock().unwrap().push(error.cloned());
    }
}

/// Shared handles to every mock, kept so tests can assert after the run
pub struct Harness {
    pub store: Arc<MockNodeStore>,
    pub transport: Arc<MockTransport>,
    pub encryption: Arc<MockEncryption>,
    pub cleaner: Arc<MockCleaner>,
    pub completion: Arc<MockCompletion>,
}
