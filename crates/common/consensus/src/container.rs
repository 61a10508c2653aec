//! Fixed-size SSZ containers.
//!
//! Every record the attestation pipeline hashes is a container whose fields
//! all have a fixed length, so its serialization is the plain concatenation of
//! its fields and its hash tree root is the merkleization of one chunk per
//! field. [`FixedContainer`] describes a type in those terms and
//! [`impl_fixed_container!`] derives the `ssz` and `tree_hash` traits from it.

use alloy_primitives::B256;
use ssz::{Decode, DecodeError};

use crate::error::ConsensusError;

pub trait FixedContainer: Sized {
    /// Container name used in decoding errors.
    const NAME: &'static str;

    /// Exact length of the SSZ encoding.
    const SSZ_FIXED_LEN: usize;

    /// Appends every field, in declaration order.
    fn append_fields(&self, buf: &mut Vec<u8>);

    /// Reads the fields back. `bytes` is exactly [`Self::SSZ_FIXED_LEN`] long.
    fn decode_fields(bytes: &[u8]) -> Result<Self, DecodeError>;

    /// One chunk per field, in declaration order.
    fn leaves(&self) -> Vec<B256>;

    /// Decodes an SSZ-encoded container, naming it in the error.
    fn from_ssz(bytes: &[u8]) -> Result<Self, ConsensusError> {
        decode_fixed(bytes).map_err(|err| match err {
            DecodeError::InvalidByteLength { len, expected } => ConsensusError::SszSize {
                container: Self::NAME,
                expected,
                actual: len,
            },
            error => ConsensusError::SszDecode {
                container: Self::NAME,
                error,
            },
        })
    }
}

pub fn decode_fixed<T: FixedContainer>(bytes: &[u8]) -> Result<T, DecodeError> {
    if bytes.len() != T::SSZ_FIXED_LEN {
        return Err(DecodeError::InvalidByteLength {
            len: bytes.len(),
            expected: T::SSZ_FIXED_LEN,
        });
    }
    T::decode_fields(bytes)
}

/// Sequential reader over the fields of a fixed-size container.
pub struct FieldReader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    pub fn read<T: Decode>(&mut self) -> Result<T, DecodeError> {
        let end = self.offset + T::ssz_fixed_len();
        let field = self
            .bytes
            .get(self.offset..end)
            .ok_or(DecodeError::InvalidByteLength {
                len: self.bytes.len(),
                expected: end,
            })?;
        self.offset = end;
        T::from_ssz_bytes(field)
    }
}

macro_rules! impl_fixed_container {
    ($type:ty) => {
        impl ssz::Encode for $type {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                <$type as $crate::container::FixedContainer>::SSZ_FIXED_LEN
            }

            fn ssz_bytes_len(&self) -> usize {
                <$type as $crate::container::FixedContainer>::SSZ_FIXED_LEN
            }

            fn ssz_append(&self, buf: &mut Vec<u8>) {
                $crate::container::FixedContainer::append_fields(self, buf)
            }
        }

        impl ssz::Decode for $type {
            fn is_ssz_fixed_len() -> bool {
                true
            }

            fn ssz_fixed_len() -> usize {
                <$type as $crate::container::FixedContainer>::SSZ_FIXED_LEN
            }

            fn from_ssz_bytes(bytes: &[u8]) -> Result<Self, ssz::DecodeError> {
                $crate::container::decode_fixed(bytes)
            }
        }

        impl tree_hash::TreeHash for $type {
            fn tree_hash_type() -> tree_hash::TreeHashType {
                tree_hash::TreeHashType::Container
            }

            fn tree_hash_packed_encoding(&self) -> tree_hash::PackedEncoding {
                unreachable!("Struct should never be packed.")
            }

            fn tree_hash_packing_factor() -> usize {
                unreachable!("Struct should never be packed.")
            }

            fn tree_hash_root(&self) -> tree_hash::Hash256 {
                $crate::merkle::merkleize(&$crate::container::FixedContainer::leaves(self))
            }
        }
    };
}

pub(crate) use impl_fixed_container;
