//! Load declared files from the repository directory.

use std::fs;
use std::path::Path;

use crate::error::{ChecksumError, Result};

/// Read the whole of `relative_path` under `base_dir` into memory.
///
/// Files are hashed from a full buffer, so either the complete content or
/// an error comes back; never a partial read.
pub fn read(base_dir: &Path, relative_path: &str) -> Result<Vec<u8>> {
    let path = base_dir.join(relative_path);
    fs::read(&path).map_err(|source| ChecksumError::UnreadableFile {
        path: relative_path.to_string(),
        source,
    })
}
