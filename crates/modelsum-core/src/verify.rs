//! Verification driver: load, hash and compare every declaration in order.
//!
//! The first failure ends the run. There is no retry and no aggregation;
//! a repository either passes as a whole or fails with exactly one error.

use std::path::Path;

use crate::declaration::{Declaration, ValueFormat};
use crate::error::{ChecksumError, Result};
use crate::loader;

/// Terminal result of one load event, as handed back to the host.
#[derive(Debug)]
pub enum Outcome {
    Pass,
    Fail(ChecksumError),
}

impl Outcome {
    pub fn from_result(result: Result<()>) -> Self {
        match result {
            Ok(()) => Outcome::Pass,
            Err(e) => Outcome::Fail(e),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            Outcome::Pass => Ok(()),
            Outcome::Fail(e) => Err(e),
        }
    }
}

/// Check each declaration against the file it names under `base_dir`.
pub fn verify(base_dir: &Path, declarations: impl IntoIterator<Item = Declaration>) -> Result<()> {
    for decl in declarations {
        check_one(base_dir, decl)?;
    }
    Ok(())
}

/// Parse and verify raw `(key, value)` parameters one at a time, in order.
///
/// Each parameter is fully checked (parsed, loaded, hashed, compared) before
/// the next one is looked at, so the reported error is always the first
/// failing entry. A bad key is rejected before its file is opened.
pub fn verify_parameters<K, V>(
    base_dir: &Path,
    params: impl IntoIterator<Item = (K, V)>,
    format: ValueFormat,
) -> Result<()>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in params {
        let decl = Declaration::parse(key.as_ref(), value.as_ref(), format)?;
        check_one(base_dir, decl)?;
    }
    Ok(())
}

fn check_one(base_dir: &Path, decl: Declaration) -> Result<()> {
    let data = loader::read(base_dir, &decl.path)?;
    let actual = decl.algorithm.hash(&data);
    if actual != decl.expected {
        return Err(ChecksumError::DigestMismatch {
            path: decl.path,
            algorithm: decl.algorithm.name(),
            expected: decl.expected,
            actual,
        });
    }
    Ok(())
}
