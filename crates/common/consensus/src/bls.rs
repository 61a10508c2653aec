use alloy_primitives::B256;
use blst::{
    min_pk::{PublicKey, Signature},
    BLST_ERROR,
};
use quorum_primitives::{constants::BLS_SIGNATURE_LEN, primitives::BLSPubkey};
use tracing::warn;

/// Ciphersuite of Ethereum consensus signatures (proof-of-possession scheme).
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Checks that ``signature`` is an aggregate over ``signing_root`` by exactly
/// the holders of ``public_keys``.
///
/// Returns `false` for an empty key set, an undecodable or out-of-subgroup
/// signature and for any key that does not decode to a valid curve point,
/// including the identity.
pub fn fast_aggregate_verify(
    public_keys: &[BLSPubkey],
    signing_root: B256,
    signature: &[u8],
) -> bool {
    if public_keys.is_empty() {
        warn!("Refusing to verify an aggregate signature without public keys");
        return false;
    }

    if signature.len() != BLS_SIGNATURE_LEN {
        warn!(len = signature.len(), "Aggregate signature has the wrong length");
        return false;
    }

    let signature = match Signature::from_bytes(signature) {
        Ok(signature) => signature,
        Err(err) => {
            warn!(?err, "Failed to decode aggregate signature");
            return false;
        }
    };

    let public_keys = match public_keys
        .iter()
        .enumerate()
        .map(|(position, public_key)| {
            PublicKey::key_validate(public_key.as_slice()).map_err(|err| (position, err))
        })
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(public_keys) => public_keys,
        Err((position, err)) => {
            warn!(?err, position, "Rejecting invalid public key");
            return false;
        }
    };

    let public_keys: Vec<&PublicKey> = public_keys.iter().collect();
    signature.fast_aggregate_verify(true, signing_root.as_slice(), DST, &public_keys)
        == BLST_ERROR::BLST_SUCCESS
}
