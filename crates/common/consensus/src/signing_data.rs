use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz::DecodeError;

use crate::container::{impl_fixed_container, FieldReader, FixedContainer};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct SigningData {
    pub object_root: B256,
    pub domain: B256,
}

impl FixedContainer for SigningData {
    const NAME: &'static str = "SigningData";
    const SSZ_FIXED_LEN: usize = 32 + 32;

    fn append_fields(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(self.object_root.as_slice());
        buf.extend_from_slice(self.domain.as_slice());
    }

    fn decode_fields(bytes: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = FieldReader::new(bytes);
        Ok(Self {
            object_root: reader.read()?,
            domain: reader.read()?,
        })
    }

    fn leaves(&self) -> Vec<B256> {
        vec![self.object_root, self.domain]
    }
}

impl_fixed_container!(SigningData);
