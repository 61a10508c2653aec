use std::{fs, path::Path};

use anyhow::Context;
use quorum_consensus::config::NetworkConfig;
use tracing::debug;

use crate::cli::NetworkArgs;

/// Loads a [`NetworkConfig`] from a YAML file. Fields the file leaves out keep
/// their mainnet defaults.
pub fn load_network_config(path: &Path) -> anyhow::Result<NetworkConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read network config {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse network config {}", path.display()))
}

impl NetworkArgs {
    /// Builds the effective config: defaults, then the YAML file, then the
    /// individual flags.
    pub fn resolve(&self) -> anyhow::Result<NetworkConfig> {
        let mut config = match &self.network_config {
            Some(path) => load_network_config(path)?,
            None => NetworkConfig::default(),
        };

        if let Some(fork) = self.fork {
            config.fork_version = fork.version();
        }
        if let Some(root) = self.genesis_validators_root {
            config.genesis_validators_root = root;
        }

        debug!(
            domain_type = %config.domain_type,
            fork_version = %config.fork_version,
            genesis_validators_root = %config.genesis_validators_root,
            "Resolved network config"
        );

        Ok(config)
    }
}
