//! CLI command handlers, one per file.

mod algorithms;
mod hash;
mod verify;

pub use algorithms::run_algorithms;
pub use hash::run_hash;
pub use verify::{run_verify, VerifyArgs};
