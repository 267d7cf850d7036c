//! Hash command: print a file's digest in `md5sum` layout.

use anyhow::{Context, Result};
use modelsum_core::digest;
use std::fs;
use std::path::Path;

/// Compute and print the digest of the given file.
pub fn run_hash(path: &Path, algorithm: &str) -> Result<()> {
    let algorithm = digest::lookup(algorithm)?;
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    println!("{}  {}", algorithm.hash(&data), path.display());
    Ok(())
}
