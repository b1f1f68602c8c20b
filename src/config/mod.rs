//! # Service Topology Configuration
//!
//! Static description of where the SCP configuration microservice lives. The
//! raw structure is deserialized with every level optional so that a missing
//! section, or a gateway that is not a usable URL, is reported by
//! [`ConfigurationResolver::resolve`] as `ConfigurationMissing` before the
//! task touches the datastore or network.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bios_config_task::config::{ConfigManager, ConfigurationResolver};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ConfigManager::load_from_file("config/smiConfig.json")?;
//! let topology = ConfigurationResolver::new(manager.config().clone()).resolve()?;
//! println!("gateway: {}", topology.gateway);
//! # Ok(())
//! # }
//! ```

pub mod loader;

use crate::constants::DEFAULT_SERVICE_PATH;
use crate::error::{BiosTaskError, Result};
use crate::transport::ServiceEndpoint;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use loader::ConfigManager;

/// Root of the topology file; only the `dell` section is read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmiConfig {
    #[serde(default)]
    pub dell: Option<DellConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DellConfig {
    /// Base URL of the microservice gateway, e.g. `https://10.0.0.5:46018`
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub services: Option<DellServices>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DellServices {
    #[serde(default)]
    pub configuration: Option<ConfigurationService>,
}

/// Paths exposed by the SCP configuration service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationService {
    #[serde(
        default,
        rename = "updateComponents",
        alias = "updatecomponents",
        alias = "update_components"
    )]
    pub update_components: Option<String>,
}

/// Resolved topology the invoker works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTopology {
    pub gateway: String,
    /// `gateway` split into protocol, host and port
    pub endpoint: ServiceEndpoint,
    pub update_components: Option<String>,
}

impl ServiceTopology {
    /// Path of the updateComponents operation, `/` when not configured.
    pub fn update_components_path(&self) -> &str {
        self.update_components
            .as_deref()
            .filter(|path| !path.is_empty())
            .unwrap_or(DEFAULT_SERVICE_PATH)
    }
}

/// Fast-fail guard over the static topology.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationResolver {
    config: SmiConfig,
}

impl ConfigurationResolver {
    pub fn new(config: SmiConfig) -> Self {
        Self { config }
    }

    pub fn resolve(&self) -> Result<ServiceTopology> {
        let dell = self.config.dell.as_ref().ok_or_else(|| {
            BiosTaskError::configuration_missing(
                "Dell SCP UpdateComponents web service is not defined in smiConfig.json",
            )
        })?;

        let configuration = dell
            .services
            .as_ref()
            .and_then(|services| services.configuration.as_ref())
            .ok_or_else(|| {
                BiosTaskError::configuration_missing(
                    "Dell SCP UpdateComponents web service is not defined in smiConfig.json",
                )
            })?;

        let gateway = dell
            .gateway
            .as_deref()
            .map(str::trim)
            .filter(|gateway| !gateway.is_empty())
            .ok_or_else(|| {
                BiosTaskError::configuration_missing("Dell gateway is not defined in smiConfig.json")
            })?;

        let endpoint = ServiceEndpoint::parse(gateway)?;

        debug!(
            gateway = %gateway,
            update_components = ?configuration.update_components,
            "Resolved SCP service topology"
        );

        Ok(ServiceTopology {
            gateway: gateway.to_string(),
            endpoint,
            update_components: configuration.update_components.clone(),
        })
    }
}
