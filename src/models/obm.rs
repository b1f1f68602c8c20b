use serde::{Deserialize, Serialize};

/// Out-of-band management settings registered for a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obm {
    pub node: String,
    /// OBM service tag, e.g. `dell-wsman-obm-service`
    pub service: String,
    pub config: ObmConfig,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObmConfig {
    pub host: String,
    pub user: String,
    /// Ciphertext; only the encryption service can turn this into a password
    pub password: String,
}

impl std::fmt::Debug for ObmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObmConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"[MASKED]")
            .finish()
    }
}
