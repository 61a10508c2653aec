use alloy_primitives::{aliases::B32, b256, fixed_bytes, B256};

pub const DOMAIN_BEACON_PROPOSER: B32 = fixed_bytes!("00000000");
pub const DOMAIN_BEACON_ATTESTER: B32 = fixed_bytes!("01000000");

pub const GENESIS_FORK_VERSION: B32 = fixed_bytes!("00000000");
pub const ALTAIR_FORK_VERSION: B32 = fixed_bytes!("01000000");
pub const BELLATRIX_FORK_VERSION: B32 = fixed_bytes!("02000000");
pub const CAPELLA_FORK_VERSION: B32 = fixed_bytes!("03000000");
pub const DENEB_FORK_VERSION: B32 = fixed_bytes!("04000000");

/// Mainnet `genesis_validators_root`.
pub const MAINNET_GENESIS_VALIDATORS_ROOT: B256 =
    b256!("4b363db94e286120d76eb905340fdd4e54bfe9f06bf33ff6cf5ad27f511bfe95");

pub const BLS_SIGNATURE_LEN: usize = 96;
