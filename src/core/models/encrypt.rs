use std::path::PathBuf;

/// Input descriptor for a build-time encryption pass. One call, one file.
#[derive(Debug, Clone)]
pub struct EncryptFileInfo {
    /// Path of the plain bundle file to obfuscate.
    pub load_path: PathBuf,
}

impl EncryptFileInfo {
    pub fn new(load_path: impl Into<PathBuf>) -> Self {
        Self {
            load_path: load_path.into(),
        }
    }
}

/// Output of an encryption pass. The caller owns the buffer and is
/// responsible for persisting it; nothing is written to disk here.
#[derive(Debug, Clone, PartialEq)]
pub struct EncryptResult {
    /// Whether the provider transformed the file. Always true for the
    /// built-in schemes; a pass-through provider would report false.
    pub encrypted: bool,
    /// The transformed bytes, all-or-nothing. Never a partial buffer.
    pub encrypted_data: Vec<u8>,
}
