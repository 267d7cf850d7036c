//! Repository agent: the host-facing side of checksum verification.
//!
//! A model server fires lifecycle actions for each model it manages. On
//! `Load`, the agent verifies the model's repository against its checksum
//! parameters; every other action is accepted without work.

use std::fmt;
use std::path::PathBuf;

use crate::declaration::ValueFormat;
use crate::error::ChecksumError;
use crate::verify::{self, Outcome};

/// Lifecycle actions a host may deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    LoadComplete,
    LoadFail,
    Unload,
    UnloadComplete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Load => "load",
            Action::LoadComplete => "load-complete",
            Action::LoadFail => "load-fail",
            Action::Unload => "unload",
            Action::UnloadComplete => "unload-complete",
        };
        f.write_str(s)
    }
}

/// Where the model repository lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Filesystem(PathBuf),
    /// Any non-filesystem artifact (object store, remote URL, ...).
    Remote(String),
}

/// Checksum agent configured for one value format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumAgent {
    pub value_format: ValueFormat,
}

impl ChecksumAgent {
    pub fn new(value_format: ValueFormat) -> Self {
        Self { value_format }
    }

    /// Handle one lifecycle action for a model.
    pub fn handle<K, V>(
        &self,
        action: Action,
        location: &Location,
        params: impl IntoIterator<Item = (K, V)>,
    ) -> Outcome
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        tracing::debug!(%action, ?location, "checksum agent action");
        if action != Action::Load {
            return Outcome::Pass;
        }

        let base_dir = match location {
            Location::Filesystem(dir) => dir,
            Location::Remote(kind) => {
                let err = ChecksumError::UnsupportedLocation { kind: kind.clone() };
                tracing::warn!("checksum verification rejected: {}", err);
                return Outcome::Fail(err);
            }
        };

        let outcome = Outcome::from_result(verify::verify_parameters(
            base_dir,
            params,
            self.value_format,
        ));
        match &outcome {
            Outcome::Pass => {
                tracing::info!(repo = %base_dir.display(), "checksum verification passed")
            }
            Outcome::Fail(err) => {
                tracing::warn!(repo = %base_dir.display(), "checksum verification failed: {}", err)
            }
        }
        outcome
    }
}
