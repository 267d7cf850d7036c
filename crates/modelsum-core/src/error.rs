//! Error type for repository checksum verification.

/// Every way a load event can fail. Each variant is terminal for the
/// current verification run.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// Algorithm identifier not present in the registry.
    #[error("unsupported checksum algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    /// Key or value of a checksum parameter does not have the expected shape.
    #[error("malformed checksum declaration '{entry}': {detail}")]
    MalformedDeclaration { entry: String, detail: String },

    /// Declared file could not be opened or read.
    #[error("unable to read file '{path}': {source}")]
    UnreadableFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Recomputed digest differs from the declared one.
    #[error("mismatched {algorithm} hash for file '{path}': expected {expected}, computed {actual}")]
    DigestMismatch {
        path: String,
        algorithm: &'static str,
        expected: String,
        actual: String,
    },

    /// Repository is not backed by the local filesystem.
    #[error("unsupported repository location: {kind}")]
    UnsupportedLocation { kind: String },
}

impl ChecksumError {
    pub(crate) fn malformed(entry: impl Into<String>, detail: impl Into<String>) -> Self {
        ChecksumError::MalformedDeclaration {
            entry: entry.into(),
            detail: detail.into(),
        }
    }
}

/// Result type alias for checksum operations.
pub type Result<T> = std::result::Result<T, ChecksumError>;
