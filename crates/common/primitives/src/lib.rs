pub mod constants;
pub mod fork_name;
pub mod primitives;
