//! Commands module - CLI command implementations.

mod init;
mod remove;

pub use init::{run_init, run_init_in, DEFAULT_CONFIG};
pub use remove::{resolve_options, run_remove};
