use alloy_primitives::B256;
use quorum_primitives::primitives::Epoch;
use serde::{Deserialize, Serialize};
use ssz::DecodeError;

use crate::{
    container::{impl_fixed_container, FieldReader, FixedContainer},
    merkle::uint64_chunk,
};

#[derive(Debug, Eq, Hash, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Checkpoint {
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: Epoch,
    pub root: B256,
}

impl FixedContainer for Checkpoint {
    const NAME: &'static str = "Checkpoint";
    const SSZ_FIXED_LEN: usize = 8 + 32;

    fn append_fields(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.epoch.to_le_bytes());
        buf.extend_from_slice(self.root.as_slice());
    }

    fn decode_fields(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = FieldReader::new(bytes);
        Ok(Self {
            epoch: reader.read()?,
            root: reader.read()?,
        })
    }

    fn leaves(&self) -> Vec<B256> {
        vec![uint64_chunk(self.epoch), self.root]
    }
}

impl_fixed_container!(Checkpoint);
