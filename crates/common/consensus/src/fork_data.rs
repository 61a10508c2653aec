use alloy_primitives::B256;
use quorum_primitives::primitives::Version;
use serde::{Deserialize, Serialize};
use ssz::DecodeError;

use crate::{
    container::{impl_fixed_container, FieldReader, FixedContainer},
    merkle::bytes_chunk,
};

/// Input to the signing domain. Only ever hashed, never sent anywhere.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct ForkData {
    pub current_version: Version,
    pub genesis_validators_root: B256,
}

impl FixedContainer for ForkData {
    const NAME: &'static str = "ForkData";
    const SSZ_FIXED_LEN: usize = 4 + 32;

    fn append_fields(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.current_version.as_slice());
        buf.extend_from_slice(self.genesis_validators_root.as_slice());
    }

    fn decode_fields(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = FieldReader::new(bytes);
        Ok(Self {
            current_version: reader.read()?,
            genesis_validators_root: reader.read()?,
        })
    }

    fn leaves(&self) -> Vec<B256> {
        vec![
            bytes_chunk(self.current_version.as_slice()),
            self.genesis_validators_root,
        ]
    }
}

impl_fixed_container!(ForkData);
