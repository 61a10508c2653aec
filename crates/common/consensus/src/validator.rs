use std::collections::HashMap;

use alloy_primitives::B256;
use quorum_primitives::primitives::{BLSPubkey, Epoch, Gwei, Slot, ValidatorIndex};
use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

/// Response of `/eth/v1/beacon/states/{state_id}/validators/{validator_id}`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ValidatorResponse {
    pub execution_optimistic: bool,
    pub finalized: bool,
    pub data: ValidatorData,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ValidatorData {
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: ValidatorIndex,
    #[serde(with = "serde_utils::quoted_u64")]
    pub balance: Gwei,
    pub status: String,
    pub validator: Validator,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Validator {
    pub pubkey: BLSPubkey,

    /// Commitment to pubkey for withdrawals
    pub withdrawal_credentials: B256,

    /// Balance at stake
    #[serde(with = "serde_utils::quoted_u64")]
    pub effective_balance: Gwei,
    pub slashed: bool,

    /// When criteria for activation were met
    #[serde(with = "serde_utils::quoted_u64")]
    pub activation_eligibility_epoch: Epoch,
    #[serde(with = "serde_utils::quoted_u64")]
    pub activation_epoch: Epoch,
    #[serde(with = "serde_utils::quoted_u64")]
    pub exit_epoch: Epoch,

    /// When validator can withdraw funds
    #[serde(with = "serde_utils::quoted_u64")]
    pub withdrawable_epoch: Epoch,
}

/// Source of validator public keys for the attestation verifier.
///
/// Keys are returned as served. Whether they decode to a valid curve point is
/// decided by the signature check, so a bad key makes the attestation invalid
/// rather than unverifiable.
pub trait PublicKeyLookup {
    fn public_key(
        &self,
        slot: Slot,
        validator_index: ValidatorIndex,
    ) -> Result<BLSPubkey, ConsensusError>;
}

/// Validators known at a given slot. Populated up front and only read during
/// verification, so it can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    validators: HashMap<(Slot, ValidatorIndex), Validator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, slot: Slot, validator_index: ValidatorIndex, validator: Validator) {
        self.validators.insert((slot, validator_index), validator);
    }

    pub fn insert_response(&mut self, slot: Slot, response: ValidatorResponse) {
        self.insert(slot, response.data.index, response.data.validator);
    }

    pub fn get(&self, slot: Slot, validator_index: ValidatorIndex) -> Option<&Validator> {
        self.validators.get(&(slot, validator_index))
    }

    pub fn contains(&self, slot: Slot, validator_index: ValidatorIndex) -> bool {
        self.validators.contains_key(&(slot, validator_index))
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl PublicKeyLookup for ValidatorRegistry {
    fn public_key(
        &self,
        slot: Slot,
        validator_index: ValidatorIndex,
    ) -> Result<BLSPubkey, ConsensusError> {
        self.get(slot, validator_index)
            .map(|validator| validator.pubkey)
            .ok_or(ConsensusError::ValidatorNotFound {
                slot,
                validator_index,
            })
    }
}
