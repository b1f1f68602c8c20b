//! Configuration Loader
//!
//! Loads the SCP topology file (`smiConfig.json` or any format the `config`
//! crate recognises by extension) and layers `BIOS_TASK__*` environment
//! overrides on top, e.g. `BIOS_TASK__DELL__GATEWAY=https://10.0.0.5:46018`.

use super::{ConfigurationResolver, SmiConfig};
use crate::error::{BiosTaskError, Result};
use crate::logging::redact_sensitive;
use ::config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

const DEFAULT_CONFIG_FILE: &str = "config/smiConfig.json";
const CONFIG_PATH_ENV: &str = "BIOS_TASK_SMI_CONFIG";
const ENV_PREFIX: &str = "BIOS_TASK";

/// Holds the loaded topology and where it came from.
#[derive(Debug)]
pub struct ConfigManager {
    config: SmiConfig,
    source: PathBuf,
}

impl ConfigManager {
    /// Load from `$BIOS_TASK_SMI_CONFIG`, falling back to `config/smiConfig.json`
    pub fn load() -> Result<Arc<ConfigManager>> {
        let path = env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from_file(path)
    }

    /// Load from a specific file, applying environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Arc<ConfigManager>> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(BiosTaskError::configuration_missing(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        debug!("Loading SCP topology from: {}", path.display());

        let config: SmiConfig = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        debug!(
            "Configuration loaded successfully: {}",
            serde_json::to_string_pretty(&Self::sanitize_config_for_logging(&config))
                .unwrap_or_else(|_| "[serialization error]".to_string())
        );

        info!(
            source = %path.display(),
            dell_configured = config.dell.is_some(),
            "Configuration loaded successfully"
        );

        Ok(Arc::new(ConfigManager {
            config,
            source: path.to_path_buf(),
        }))
    }

    pub fn config(&self) -> &SmiConfig {
        &self.config
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Resolver over the loaded topology
    pub fn resolver(&self) -> ConfigurationResolver {
        ConfigurationResolver::new(self.config.clone())
    }

    /// Sanitized configuration for debugging, with credential-like fields masked
    pub fn debug_config(&self) -> serde_json::Value {
        Self::sanitize_config_for_logging(&self.config)
    }

    fn sanitize_config_for_logging(config: &SmiConfig) -> serde_json::Value {
        let mut value = serde_json::to_value(config).unwrap_or(serde_json::Value::Null);
        redact_sensitive(&mut value);
        value
    }
}
