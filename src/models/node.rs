use crate::constants::ELIGIBLE_NODE_TYPE;
use serde::{Deserialize, Serialize};

/// Node record as stored by the datastore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    /// Node class, e.g. `compute`, `switch`, `pdu`
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Node {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            name: None,
        }
    }

    /// Whether BIOS configuration applies to this node class
    pub fn is_eligible(&self) -> bool {
        self.node_type == ELIGIBLE_NODE_TYPE
    }
}
