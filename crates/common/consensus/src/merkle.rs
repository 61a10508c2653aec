use alloy_primitives::B256;
use ethereum_hashing::hash32_concat;

/// Left-aligns a little-endian `u64` in an otherwise zero chunk.
pub fn uint64_chunk(value: u64) -> B256 {
    let mut chunk = B256::ZERO;
    chunk[..8].copy_from_slice(&value.to_le_bytes());
    chunk
}

/// Right-pads a short fixed byte string (e.g. a fork version) to one chunk.
pub fn bytes_chunk(bytes: &[u8]) -> B256 {
    B256::right_padding_from(bytes)
}

pub fn hash_pair(left: &B256, right: &B256) -> B256 {
    B256::from(hash32_concat(left.as_slice(), right.as_slice()))
}

/// Merkleizes a list of leaf chunks.
///
/// The leaves are padded with zero chunks up to the next power of two and then
/// hashed pairwise, layer by layer, until a single root remains. An empty list
/// merkleizes to the zero chunk.
pub fn merkleize(leaves: &[B256]) -> B256 {
    let width = leaves.len().next_power_of_two();
    let mut layer = leaves.to_vec();
    layer.resize(width, B256::ZERO);

    while layer.len() > 1 {
        layer = layer
            .chunks_exact(2)
            .map(|pair| hash_pair(&pair[0], &pair[1]))
            .collect();
    }

    layer[0]
}
