//! Digest algorithms and the registry that resolves algorithm identifiers.
//!
//! Each algorithm hashes a full in-memory buffer and renders the digest as
//! lowercase hex, high nibble first. New algorithms are added by appending a
//! row to [`REGISTRY`]; lookups and callers stay unchanged.

use md5::Md5;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::{ChecksumError, Result};

/// A registered digest algorithm.
#[derive(Clone, Copy)]
pub struct Algorithm {
    id: &'static str,
    name: &'static str,
    digest_len: usize,
    digest: fn(&[u8]) -> Vec<u8>,
}

impl Algorithm {
    /// Lowercase identifier matched against the key prefix (e.g. `md5`).
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Canonical uppercase label used in messages (e.g. `MD5`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw digest size in bytes; the hex rendering is twice as long.
    pub fn digest_len(&self) -> usize {
        self.digest_len
    }

    /// Hash `data` and return the digest as lowercase hex.
    pub fn hash(&self, data: &[u8]) -> String {
        hex::encode((self.digest)(data))
    }
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Algorithm {}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("id", &self.id)
            .field("digest_len", &self.digest_len)
            .finish()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn md5_digest(data: &[u8]) -> Vec<u8> {
    Md5::digest(data).to_vec()
}

fn sha256_digest(data: &[u8]) -> Vec<u8> {
    Sha256::digest(data).to_vec()
}

pub const MD5: Algorithm = Algorithm {
    id: "md5",
    name: "MD5",
    digest_len: 16,
    digest: md5_digest,
};

pub const SHA256: Algorithm = Algorithm {
    id: "sha256",
    name: "SHA256",
    digest_len: 32,
    digest: sha256_digest,
};

/// All supported algorithms, in listing order.
pub static REGISTRY: &[Algorithm] = &[MD5, SHA256];

/// Every registered algorithm, for hosts that list what they support.
pub fn registry() -> &'static [Algorithm] {
    REGISTRY
}

/// Resolve an algorithm identifier, ignoring ASCII case.
///
/// The error names the identifier exactly as the caller wrote it.
pub fn lookup(id: &str) -> Result<&'static Algorithm> {
    REGISTRY
        .iter()
        .find(|a| a.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| ChecksumError::UnsupportedAlgorithm {
            algorithm: id.to_string(),
        })
}
