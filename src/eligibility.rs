//! # Eligibility & Credential Resolution
//!
//! Decides whether the target node is one BIOS configuration applies to and,
//! only if it is, fetches the WS-Man OBM credentials for it.

use crate::constants::WSMAN_OBM_SERVICE;
use crate::error::{BiosTaskError, Result};
use crate::models::Obm;
use crate::services::NodeStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// Result of checking a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible(Obm),
    /// Node class does not take BIOS configuration; not an error
    Skip { node_type: String },
}

pub struct EligibilityResolver {
    store: Arc<dyn NodeStore>,
}

impl EligibilityResolver {
    pub fn new(store: Arc<dyn NodeStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn resolve(&self, node_id: &str) -> Result<Eligibility> {
        info!(node_id = %node_id, "Checking OBM settings");

        let node = self
            .store
            .find_node_by_identifier(node_id)
            .await?
            .ok_or_else(|| BiosTaskError::NodeNotFound {
                node_id: node_id.to_string(),
            })?;

        if !node.is_eligible() {
            info!(
                node_id = %node_id,
                node_type = %node.node_type,
                "SCP UpdateComponents is not applicable to node type"
            );
            return Ok(Eligibility::Skip {
                node_type: node.node_type,
            });
        }

        let obm = self
            .store
            .find_obm_by_node(node_id, WSMAN_OBM_SERVICE, true)
            .await?
            .ok_or_else(|| BiosTaskError::ObmNotFound {
                node_id: node_id.to_string(),
            })?;

        Ok(Eligibility::Eligible(obm))
    }
}
