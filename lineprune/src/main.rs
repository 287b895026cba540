//! Main binary entry point for the `lineprune` tool.
//!
//! This binary simply delegates to the shared `entry_point::run_with_args()` function
//! so it behaves exactly like the `lineprune-cli` binary.

use anyhow::Result;

fn main() -> Result<()> {
    let code = lineprune::entry_point::run_with_args(std::env::args().skip(1).collect())?;
    std::process::exit(code);
}
