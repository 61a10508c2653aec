use std::path::PathBuf;

use alloy_primitives::B256;
use clap::{Args, Parser, Subcommand};
use quorum_primitives::{
    fork_name::ForkName,
    primitives::{CommitteeIndex, Slot},
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (1 = error, 5 = trace). Ignored when RUST_LOG is set.
    #[arg(short, long, global = true, default_value_t = 3)]
    pub verbosity: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify a single attestation of a block
    #[command(name = "verify")]
    Verify(VerifyCommand),

    /// Verify every attestation of a block
    #[command(name = "verify-block")]
    VerifyBlock(VerifyBlockCommand),

    /// Print the signing root of an AttestationData document (JSON or SSZ)
    #[command(name = "signing-root")]
    SigningRoot(SigningRootCommand),
}

#[derive(Debug, Args)]
pub struct NetworkArgs {
    /// YAML file with domain_type, fork_version and genesis_validators_root
    #[arg(long, env = "QUORUM_NETWORK_CONFIG")]
    pub network_config: Option<PathBuf>,

    /// Fork whose mainnet version signs the attestations
    #[arg(long)]
    pub fork: Option<ForkName>,

    /// Genesis validators root overriding the configured one
    #[arg(long)]
    pub genesis_validators_root: Option<B256>,
}

#[derive(Debug, Parser)]
pub struct VerifyCommand {
    /// Directory holding the beacon API JSON fixtures
    #[arg(long, env = "QUORUM_FIXTURES")]
    pub fixtures: PathBuf,

    /// Slot of the block carrying the attestation
    #[arg(long)]
    pub slot: Slot,

    /// Committee index of the attestation
    #[arg(long)]
    pub committee_index: CommitteeIndex,

    /// Which attestation to pick when several share the committee index
    #[arg(long, default_value_t = 0)]
    pub position: usize,

    #[command(flatten)]
    pub network: NetworkArgs,
}

#[derive(Debug, Parser)]
pub struct VerifyBlockCommand {
    /// Directory holding the beacon API JSON fixtures
    #[arg(long, env = "QUORUM_FIXTURES")]
    pub fixtures: PathBuf,

    /// Slot of the block to verify
    #[arg(long)]
    pub slot: Slot,

    #[command(flatten)]
    pub network: NetworkArgs,
}

#[derive(Debug, Parser)]
pub struct SigningRootCommand {
    /// File containing an AttestationData object
    pub attestation_data: PathBuf,

    /// Read the file as SSZ bytes instead of JSON
    #[arg(long)]
    pub ssz: bool,

    #[command(flatten)]
    pub network: NetworkArgs,
}
