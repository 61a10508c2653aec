use alloy_primitives::B256;
use quorum_primitives::primitives::{Domain, DomainType, Version};
use tree_hash::TreeHash;

use crate::{fork_data::ForkData, signing_data::SigningData};

/// Return the 32-byte fork data root for the ``current_version`` and
/// ``genesis_validators_root``.
pub fn compute_fork_data_root(current_version: Version, genesis_validators_root: B256) -> B256 {
    ForkData {
        current_version,
        genesis_validators_root,
    }
    .tree_hash_root()
}

/// Return the domain for the ``domain_type`` and ``fork_version``.
///
/// The domain is the 4-byte domain type followed by the first 28 bytes of the
/// fork data root.
pub fn compute_domain(
    domain_type: DomainType,
    fork_version: Version,
    genesis_validators_root: B256,
) -> Domain {
    let fork_data_root = compute_fork_data_root(fork_version, genesis_validators_root);
    let mut domain = B256::ZERO;
    domain[..4].copy_from_slice(domain_type.as_slice());
    domain[4..].copy_from_slice(&fork_data_root[..28]);
    domain
}

/// Return the signing root for the corresponding signing data.
pub fn compute_signing_root<SSZObject: TreeHash>(ssz_object: &SSZObject, domain: Domain) -> B256 {
    SigningData {
        object_root: ssz_object.tree_hash_root(),
        domain,
    }
    .tree_hash_root()
}

/// Builds the domain and the signing root in one go.
pub fn signing_root<SSZObject: TreeHash>(
    ssz_object: &SSZObject,
    domain_type: DomainType,
    fork_version: Version,
    genesis_validators_root: B256,
) -> B256 {
    compute_signing_root(
        ssz_object,
        compute_domain(domain_type, fork_version, genesis_validators_root),
    )
}
