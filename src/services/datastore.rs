//! # Node and OBM lookups

use crate::error::Result;
use crate::models::{Node, Obm};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Read-only access to node and OBM records.
///
/// `Ok(None)` means the record does not exist; `Err` is reserved for the
/// datastore itself failing.
#[async_trait]
pub trait NodeStore: Send + Sync {
    async fn find_node_by_identifier(&self, id: &str) -> Result<Option<Node>>;

    /// OBM settings of `node_id` registered under `service`.
    ///
    /// With `exact_match` the record's service tag must equal `service`;
    /// otherwise a prefix match is accepted.
    async fn find_obm_by_node(
        &self,
        node_id: &str,
        service: &str,
        exact_match: bool,
    ) -> Result<Option<Obm>>;
}

/// `NodeStore` held in memory, for embedding the task without a database.
#[derive(Debug, Default)]
pub struct InMemoryNodeStore {
    nodes: RwLock<HashMap<String, Node>>,
    obms: RwLock<Vec<Obm>>,
}

impl InMemoryNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_node(&self, node: Node) {
        self.nodes.write().insert(node.id.clone(), node);
    }

    pub fn insert_obm(&self, obm: Obm) {
        self.obms.write().push(obm);
    }
}

#[async_trait]
impl NodeStore for InMemoryNodeStore {
    async fn find_node_by_identifier(&self, id: &str) -> Result<Option<Node>> {
        Ok(self.nodes.read().get(id).cloned())
    }

    async fn find_obm_by_node(
        &self,
        node_id: &str,
        service: &str,
        exact_match: bool,
    ) -> Result<Option<Obm>> {
        let obms = self.obms.read();
        let found = obms.iter().find(|obm| {
            obm.node == node_id
                && if exact_match {
                    obm.service == service
                } else {
                    obm.service.starts_with(service)
                }
        });
        Ok(found.cloned())
    }
}
