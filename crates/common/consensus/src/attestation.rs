use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::{aggregation_bits::AggregationBits, attestation_data::AttestationData};

/// One aggregate vote as found in a block body. The same `(slot, index)` pair
/// can appear several times, each aggregate covering a different set of
/// committee members.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Attestation {
    pub aggregation_bits: AggregationBits,

    /// Compressed BLS signature. Kept as raw bytes so that a malformed
    /// signature surfaces as a failed verification rather than a parse error.
    pub signature: Bytes,
    pub data: AttestationData,
}
