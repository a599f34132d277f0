pub mod offset;
pub mod stream_cipher;

use std::path::Path;

use crate::core::errors::{CloakError, Result};

/// Read a whole bundle file, mapping a missing path to `FileNotFound`.
pub(crate) fn read_bundle_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CloakError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CloakError::Io(e),
    })
}
