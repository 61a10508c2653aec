use alloy_primitives::hex::FromHexError;
use quorum_primitives::primitives::{CommitteeIndex, Slot, ValidatorIndex};
use ssz::DecodeError;
use thiserror::Error;

/// Reasons an attestation could not be checked at all.
///
/// A signature that simply does not verify is not an error; it is reported as
/// `valid: false` in [`crate::attester::AttestationOutcome`].
#[derive(Debug, Error)]
pub enum ConsensusError {
    #[error("SSZ size mismatch for {container}: expected {expected} bytes, got {actual}")]
    SszSize {
        container: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("SSZ decoding of {container} failed: {error:?}")]
    SszDecode {
        container: &'static str,
        error: DecodeError,
    },

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] FromHexError),

    #[error("committee not found for slot {slot}, index {index}")]
    CommitteeNotFound { slot: Slot, index: CommitteeIndex },

    #[error("validator {validator_index} not found at slot {slot}")]
    ValidatorNotFound {
        slot: Slot,
        validator_index: ValidatorIndex,
    },

    #[error("no attestation at position {position} for committee index {index} ({available} available)")]
    AttestationNotFound {
        index: CommitteeIndex,
        position: usize,
        available: usize,
    },
}
