use std::path::PathBuf;

use crate::core::stream::SharedBundleStream;

/// Input descriptor for a runtime decryption pass.
#[derive(Debug, Clone)]
pub struct DecryptFileInfo {
    /// Path of the obfuscated bundle file.
    pub load_path: PathBuf,
    /// Content checksum, verified by the bundle loader primitive.
    /// This layer passes it through untouched.
    pub load_crc: u32,
}

impl DecryptFileInfo {
    pub fn new(load_path: impl Into<PathBuf>, load_crc: u32) -> Self {
        Self {
            load_path: load_path.into(),
            load_crc,
        }
    }
}

/// Outcome of a decrypt entry point.
///
/// Exactly one of `handle` / `request` is populated, depending on whether
/// the synchronous or asynchronous entry point was invoked. Construct via
/// [`DecryptResult::loaded`] or [`DecryptResult::pending`] to keep that
/// invariant.
///
/// `managed_stream` is present for stream-based schemes and absent for
/// offset-based ones. When present, the loader holds its own clone of the
/// same `Arc`, so the underlying file stays open until both this result
/// and the bundle handle have been dropped.
#[derive(Debug)]
pub struct DecryptResult<H, R> {
    pub managed_stream: Option<SharedBundleStream>,
    pub handle: Option<H>,
    pub request: Option<R>,
}

impl<H, R> DecryptResult<H, R> {
    /// A completed synchronous load.
    pub fn loaded(managed_stream: Option<SharedBundleStream>, handle: H) -> Self {
        Self {
            managed_stream,
            handle: Some(handle),
            request: None,
        }
    }

    /// An in-flight asynchronous load.
    pub fn pending(managed_stream: Option<SharedBundleStream>, request: R) -> Self {
        Self {
            managed_stream,
            handle: None,
            request: Some(request),
        }
    }
}
