//! Checksum manifest: a TOML file holding a repository's checksum parameters.
//!
//! ```toml
//! [parameters]
//! "md5:1/model.onnx" = "0cc175b9c0f1b6a831c399e269772661"
//! "MD5:config.pbtxt" = "d41d8cd98f00b204e9800998ecf8427e"
//! ```
//!
//! Entries keep file order; verification runs in that order.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ChecksumError;

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(default)]
    parameters: toml::Table,
}

/// Ordered `(key, value)` checksum parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub parameters: Vec<(String, String)>,
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawManifest = toml::from_str(text)?;
        let mut parameters = Vec::with_capacity(raw.parameters.len());
        for (key, value) in raw.parameters {
            let value = match value {
                toml::Value::String(s) => s,
                other => {
                    return Err(ChecksumError::MalformedDeclaration {
                        entry: key,
                        detail: format!("value must be a string, found {}", other.type_str()),
                    }
                    .into())
                }
            };
            parameters.push((key, value));
        }
        Ok(Self { parameters })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parse manifest {}", path.display()))
    }
}
