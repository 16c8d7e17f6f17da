//! Event manager configuration.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Display name for an endpoint TID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketName {
    pub tid: u8,
    pub name: String,
}

/// Configuration for an [`OemEventManager`](crate::manager::OemEventManager).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// TID to socket name table used in message prefixes.
    #[serde(default = "default_sockets")]
    pub sockets: Vec<SocketName>,
}

fn default_sockets() -> Vec<SocketName> {
    vec![
        SocketName {
            tid: 1,
            name: "SOCKET 0".to_string(),
        },
        SocketName {
            tid: 2,
            name: "SOCKET 1".to_string(),
        },
    ]
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            sockets: default_sockets(),
        }
    }
}

impl ManagerConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ManagerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Configured socket name for `tid`, if any.
    pub fn socket_name(&self, tid: u8) -> Option<&str> {
        self.sockets
            .iter()
            .find(|s| s.tid == tid)
            .map(|s| s.name.as_str())
    }
}
