use alloy_primitives::B256;
use quorum_primitives::{
    constants::{CAPELLA_FORK_VERSION, DOMAIN_BEACON_ATTESTER, MAINNET_GENESIS_VALIDATORS_ROOT},
    primitives::{Domain, DomainType, Version},
};
use serde::{Deserialize, Serialize};

use crate::misc::compute_domain;

/// Network constants that feed the attester signing domain.
///
/// Missing fields fall back to mainnet Capella, so a config file only needs
/// to list what differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub domain_type: DomainType,
    pub fork_version: Version,
    pub genesis_validators_root: B256,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            domain_type: DOMAIN_BEACON_ATTESTER,
            fork_version: CAPELLA_FORK_VERSION,
            genesis_validators_root: MAINNET_GENESIS_VALIDATORS_ROOT,
        }
    }
}

impl NetworkConfig {
    pub fn domain(&self) -> Domain {
        compute_domain(
            self.domain_type,
            self.fork_version,
            self.genesis_validators_root,
        )
    }
}
