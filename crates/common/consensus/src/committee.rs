use quorum_primitives::primitives::{BLSPubkey, CommitteeIndex, Slot, ValidatorIndex};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{error::ConsensusError, validator::PublicKeyLookup};

/// Response of `/eth/v1/beacon/states/{state_id}/committees`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CommitteeResponse {
    pub execution_optimistic: bool,
    pub finalized: bool,
    pub data: Vec<Committee>,
}

impl CommitteeResponse {
    /// Return the beacon committee at ``slot`` for ``index``.
    pub fn find_committee(
        &self,
        slot: Slot,
        index: CommitteeIndex,
    ) -> Result<&Committee, ConsensusError> {
        self.data
            .iter()
            .find(|committee| committee.slot == slot && committee.index == index)
            .ok_or(ConsensusError::CommitteeNotFound { slot, index })
    }
}

/// A beacon committee. Position `i` in ``validators`` is the member whose
/// participation is recorded by aggregation bit `i`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Committee {
    #[serde(with = "serde_utils::quoted_u64")]
    pub index: CommitteeIndex,
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64_vec")]
    pub validators: Vec<ValidatorIndex>,
}

impl Committee {
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Maps aggregation bit positions to validator indices, in order.
    ///
    /// Bitlists can run past the end of the committee; those positions are
    /// skipped.
    pub fn members_at(&self, positions: &[usize]) -> Vec<ValidatorIndex> {
        positions
            .iter()
            .filter_map(|&position| {
                let member = self.validators.get(position).copied();
                if member.is_none() {
                    trace!(
                        slot = self.slot,
                        index = self.index,
                        position,
                        size = self.validators.len(),
                        "Skipping aggregation bit outside committee"
                    );
                }
                member
            })
            .collect()
    }

    /// Public keys of the members at ``positions``, in committee order.
    pub fn public_keys<L: PublicKeyLookup + ?Sized>(
        &self,
        positions: &[usize],
        lookup: &L,
    ) -> Result<Vec<BLSPubkey>, ConsensusError> {
        self.members_at(positions)
            .into_iter()
            .map(|validator_index| lookup.public_key(self.slot, validator_index))
            .collect()
    }
}
