pub mod aggregation_bits;
pub mod attestation;
pub mod attestation_data;
pub mod attester;
pub mod beacon_block;
pub mod bls;
pub mod checkpoint;
pub mod committee;
pub mod config;
pub mod container;
pub mod error;
pub mod fork_data;
pub mod merkle;
pub mod misc;
pub mod signing_data;
pub mod validator;
