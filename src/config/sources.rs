//! Configuration sources layered on top of the defaults.

pub mod env_vars;
pub mod global_file;
