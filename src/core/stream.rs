use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::core::errors::{CloakError, Result};

/// Single-byte XOR key shared by the stream encryptor and the
/// transform-on-read stream. Part of the on-disk format contract:
/// archives produced with any other value are not readable.
pub const OBFUSCATE_KEY: u8 = 64;

/// XOR every byte in `buf` with [`OBFUSCATE_KEY`]. Self-inverse, so the
/// same pass both obfuscates and restores.
pub fn xor_obfuscate(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b ^= OBFUSCATE_KEY;
    }
}

/// A reader that applies a byte transform to everything read from an
/// underlying source.
///
/// The transform must be position-independent (a pure per-byte mapping):
/// `Seek` passes straight through to the inner reader and carries no
/// transform state with it.
///
/// The transform is applied only to the `[0, bytes_read)` slice of the
/// destination buffer. Bytes past the read count are left untouched.
#[derive(Debug)]
pub struct TransformReader<R> {
    inner: R,
    transform: fn(&mut [u8]),
}

impl<R> TransformReader<R> {
    pub fn new(inner: R, transform: fn(&mut [u8])) -> Self {
        Self { inner, transform }
    }

    /// Unwrap the underlying reader, discarding the transform.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for TransformReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        (self.transform)(&mut buf[..n]);
        Ok(n)
    }
}

impl<R: Seek> Seek for TransformReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}

/// The obfuscated bundle file stream: a read-only file with the XOR
/// transform applied to every byte on the way out.
pub type BundleStream = TransformReader<File>;

impl TransformReader<File> {
    /// Open `path` for shared read and wrap it with the XOR transform.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CloakError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => CloakError::Io(e),
        })?;
        Ok(Self::new(file, xor_obfuscate))
    }
}

/// Shared ownership of a bundle stream.
///
/// A decrypt result and the loader-held bundle handle each hold a clone;
/// the last dropper closes the file. This replaces "dispose the stream
/// when the handle is released" conventions with reference counting.
pub type SharedBundleStream = Arc<Mutex<BundleStream>>;
