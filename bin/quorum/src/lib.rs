pub mod cli;
pub mod commands;
pub mod fixtures;
pub mod network;
