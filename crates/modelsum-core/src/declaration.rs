//! Parse checksum parameters into declarations.
//!
//! A parameter key has the form `<algorithm>:<relative path>`; the value
//! carries the expected digest in one of the [`ValueFormat`]s. Parsing is
//! pure: nothing here touches the filesystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use crate::digest::{self, Algorithm};
use crate::error::{ChecksumError, Result};

/// How the expected digest is written in a parameter value.
///
/// A repository uses exactly one format for all of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueFormat {
    /// Value is the bare hex digest.
    #[default]
    Bare,
    /// Value is an `md5sum`-style line: `<digest> <mode><path>`, where mode
    /// is `' '` (text) or `'*'` (binary) and path repeats the key's path.
    SumLine,
}

impl ValueFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueFormat::Bare => "bare",
            ValueFormat::SumLine => "sum-line",
        }
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bare" => Ok(ValueFormat::Bare),
            "sum-line" | "sumline" => Ok(ValueFormat::SumLine),
            other => Err(format!(
                "unknown value format '{other}' (expected 'bare' or 'sum-line')"
            )),
        }
    }
}

/// One parsed "this file must hash to this digest" assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub algorithm: &'static Algorithm,
    /// Path relative to the repository root, original case preserved.
    pub path: String,
    pub expected: String,
}

impl Declaration {
    /// Parse one `(key, value)` parameter.
    pub fn parse(key: &str, value: &str, format: ValueFormat) -> Result<Self> {
        let (algorithm, path) = parse_key(key)?;
        let expected = match format {
            ValueFormat::Bare => parse_bare_value(value)?,
            ValueFormat::SumLine => parse_sum_line_value(value, path)?,
        };
        Ok(Declaration {
            algorithm,
            path: path.to_string(),
            expected: expected.to_string(),
        })
    }
}

/// Parse an ordered list of parameters, stopping at the first bad entry.
pub fn parse_all<K, V>(
    params: impl IntoIterator<Item = (K, V)>,
    format: ValueFormat,
) -> Result<Vec<Declaration>>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .into_iter()
        .map(|(k, v)| Declaration::parse(k.as_ref(), v.as_ref(), format))
        .collect()
}

fn parse_key(key: &str) -> Result<(&'static Algorithm, &str)> {
    let (algorithm, path) = key
        .split_once(':')
        .ok_or_else(|| ChecksumError::malformed(key, "expected '<algorithm>:<file>'"))?;
    let algorithm = digest::lookup(&algorithm.to_ascii_lowercase()).map_err(|_| {
        ChecksumError::UnsupportedAlgorithm {
            algorithm: algorithm.to_string(),
        }
    })?;
    if path.is_empty() {
        return Err(ChecksumError::malformed(key, "file path is empty"));
    }
    check_relative(key, path)?;
    Ok((algorithm, path))
}

/// Declarations may only name files inside the repository.
fn check_relative(key: &str, path: &str) -> Result<()> {
    let p = Path::new(path);
    if p.is_absolute() {
        return Err(ChecksumError::malformed(key, "file path must be relative"));
    }
    for component in p.components() {
        match component {
            Component::ParentDir => {
                return Err(ChecksumError::malformed(
                    key,
                    "file path must not contain '..'",
                ))
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ChecksumError::malformed(key, "file path must be relative"))
            }
            Component::CurDir | Component::Normal(_) => {}
        }
    }
    Ok(())
}

fn parse_bare_value(value: &str) -> Result<&str> {
    let digest = value.trim();
    if digest.is_empty() {
        return Err(ChecksumError::malformed(value, "expected digest is empty"));
    }
    if digest.contains(char::is_whitespace) {
        return Err(ChecksumError::malformed(
            value,
            "bare digest contains whitespace (sum-line value?)",
        ));
    }
    Ok(digest)
}

fn parse_sum_line_value<'a>(value: &'a str, key_path: &str) -> Result<&'a str> {
    let line = value.trim_end_matches(['\r', '\n']);
    let (digest, rest) = line
        .split_once(' ')
        .ok_or_else(|| ChecksumError::malformed(value, "expected '<digest> <mode><file>'"))?;
    if digest.is_empty() {
        return Err(ChecksumError::malformed(value, "expected digest is empty"));
    }
    let path = rest
        .strip_prefix(' ')
        .or_else(|| rest.strip_prefix('*'))
        .ok_or_else(|| ChecksumError::malformed(value, "missing ' ' or '*' mode marker"))?;
    if path != key_path {
        return Err(ChecksumError::malformed(
            value,
            format!("file '{path}' does not match declared file '{key_path}'"),
        ));
    }
    Ok(digest)
}
