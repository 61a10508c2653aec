use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use quorum_consensus::{
    beacon_block::BlockResponse,
    committee::CommitteeResponse,
    validator::{ValidatorRegistry, ValidatorResponse},
};
use quorum_primitives::primitives::{Slot, ValidatorIndex};
use serde::de::DeserializeOwned;
use tracing::debug;

/// A directory of beacon API responses saved as JSON.
///
/// Files are named after the request that produced them:
/// `beacon_blocks_{slot}.json`, `beacon_states_{slot}_committees.json` and
/// `beacon_states_{slot}_validators_{id}.json`.
#[derive(Debug, Clone)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn block_path(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("beacon_blocks_{slot}.json"))
    }

    pub fn committees_path(&self, slot: Slot) -> PathBuf {
        self.root.join(format!("beacon_states_{slot}_committees.json"))
    }

    pub fn validator_path(&self, slot: Slot, validator_index: ValidatorIndex) -> PathBuf {
        self.root.join(format!("beacon_states_{slot}_validators_{validator_index}.json"))
    }

    pub fn block(&self, slot: Slot) -> anyhow::Result<BlockResponse> {
        read_json(&self.block_path(slot))
    }

    pub fn committees(&self, slot: Slot) -> anyhow::Result<CommitteeResponse> {
        read_json(&self.committees_path(slot))
    }

    pub fn validator(
        &self,
        slot: Slot,
        validator_index: ValidatorIndex,
    ) -> anyhow::Result<ValidatorResponse> {
        read_json(&self.validator_path(slot, validator_index))
    }

    /// Loads the validator documents for ``validator_indices`` at ``slot``
    /// into ``registry``, skipping the ones it already holds.
    pub fn load_validators(
        &self,
        registry: &mut ValidatorRegistry,
        slot: Slot,
        validator_indices: &[ValidatorIndex],
    ) -> anyhow::Result<()> {
        for &validator_index in validator_indices {
            if registry.contains(slot, validator_index) {
                continue;
            }
            let response = self.validator(slot, validator_index)?;
            registry.insert(slot, validator_index, response.data.validator);
        }
        debug!(slot, loaded = registry.len(), "Loaded validators");
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents =
        fs::read(path).with_context(|| format!("Failed to read fixture {}", path.display()))?;
    serde_json::from_slice(&contents)
        .with_context(|| format!("Failed to parse fixture {}", path.display()))
}
