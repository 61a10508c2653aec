use alloy_primitives::B256;
use quorum_primitives::primitives::{Domain, ValidatorIndex};
use tracing::debug;

use crate::{
    attestation::Attestation, attestation_data::AttestationData, bls::fast_aggregate_verify,
    committee::CommitteeResponse, config::NetworkConfig, error::ConsensusError,
    misc::compute_signing_root, validator::PublicKeyLookup,
};

/// Result of checking one attestation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttestationOutcome {
    pub signing_root: B256,

    /// Set aggregation bits, including any past the end of the committee.
    pub participants: Vec<usize>,

    /// Committee members behind the in-range bits.
    pub signers: Vec<ValidatorIndex>,
    pub valid: bool,
}

/// Verifies attestations against one network's attester domain.
///
/// Holds no mutable state; a single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct AttestationVerifier {
    config: NetworkConfig,
    domain: Domain,
}

impl AttestationVerifier {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            domain: config.domain(),
            config,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn signing_root(&self, data: &AttestationData) -> B256 {
        compute_signing_root(data, self.domain)
    }

    /// Resolves the signers of ``attestation`` and checks its aggregate
    /// signature.
    ///
    /// An invalid signature yields `Ok` with `valid: false`; errors are
    /// reserved for input that cannot be checked at all.
    pub fn verify<L: PublicKeyLookup + ?Sized>(
        &self,
        attestation: &Attestation,
        committees: &CommitteeResponse,
        validators: &L,
    ) -> Result<AttestationOutcome, ConsensusError> {
        let data = &attestation.data;
        let committee = committees.find_committee(data.slot, data.index)?;

        let participants = attestation.aggregation_bits.participants();
        let signers = committee.members_at(&participants);
        let public_keys = committee.public_keys(&participants, validators)?;

        let signing_root = self.signing_root(data);
        let valid = fast_aggregate_verify(&public_keys, signing_root, &attestation.signature);

        debug!(
            slot = data.slot,
            index = data.index,
            signers = signers.len(),
            committee_size = committee.len(),
            %signing_root,
            valid,
            "Verified attestation"
        );

        Ok(AttestationOutcome {
            signing_root,
            participants,
            signers,
            valid,
        })
    }
}
