use std::path::PathBuf;

/// All domain errors for bundlecloak.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum CloakError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the bundle file exists."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Operation '{operation}' is not supported by this scheme\n\n  \
         Stream and offset schemes only load whole bundle objects.\n  \
         Raw byte/text extraction is a deliberate capability gap, not a bug."
    )]
    NotImplemented { operation: String },

    /// Raised by `BundleLoader` implementations when the content CRC does
    /// not match. This layer passes checksums through without validating
    /// them itself.
    #[error("Checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("Bundle load failed: {reason}")]
    LoadFailed { reason: String },

    #[error("Malformed bundle file {path}: {detail}")]
    MalformedBundle { path: PathBuf, detail: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CloakError>;
