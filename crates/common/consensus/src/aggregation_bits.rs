use std::fmt;

use alloy_primitives::{hex, Bytes};
use serde::{Deserialize, Serialize};

use crate::error::ConsensusError;

/// Packed participation bits of an aggregate attestation.
///
/// Bit `j` (least significant first) of byte `k` marks committee position
/// `8 * k + j`. The bytes are kept exactly as served, so trailing bits past the
/// end of the committee are preserved and left for the caller to ignore.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationBits(Bytes);

impl AggregationBits {
    pub fn from_hex(bits: &str) -> Result<Self, ConsensusError> {
        Ok(Self(hex::decode(bits)?.into()))
    }

    /// Packs the given committee positions into the smallest byte string
    /// that holds all of them.
    pub fn from_indices(indices: &[usize]) -> Self {
        let len = indices.iter().max().map_or(0, |max| max / 8 + 1);
        let mut bytes = vec![0u8; len];
        for index in indices {
            bytes[index / 8] |= 1 << (index % 8);
        }
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of bit positions covered, including unset ones.
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    pub fn is_set(&self, index: usize) -> bool {
        self.0
            .get(index / 8)
            .is_some_and(|byte| (byte >> (index % 8)) & 1 == 1)
    }

    /// Positions of every set bit, in ascending order.
    pub fn participants(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(byte_index, byte)| {
                (0..8)
                    .filter(move |bit| (byte >> bit) & 1 == 1)
                    .map(move |bit| byte_index * 8 + bit)
            })
            .collect()
    }

    pub fn num_participants(&self) -> usize {
        self.0.iter().map(|byte| byte.count_ones() as usize).sum()
    }
}

impl fmt::Display for AggregationBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decodes a `0x`-prefixed aggregation bitstring into participant positions.
pub fn decode_bits(bits: &str) -> Result<Vec<usize>, ConsensusError> {
    Ok(AggregationBits::from_hex(bits)?.participants())
}
