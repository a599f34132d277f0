use std::path::Path;

use crate::core::errors::Result;
use crate::core::stream::SharedBundleStream;

/// Port for the engine's bundle-loading primitive.
///
/// This crate never parses bundle content itself; it only prepares
/// correctly transformed streams, byte offsets and checksums for an
/// implementation of this trait. Checksum verification (and any
/// truncation detection) is the implementor's job.
///
/// An implementor reading from a [`SharedBundleStream`] must keep its
/// `Arc` clone alive for as long as the returned handle needs the file.
pub trait BundleLoader {
    /// A loaded, usable bundle.
    type Handle;
    /// An in-flight asynchronous load.
    type Request: LoadRequest<Handle = Self::Handle>;

    /// Load a bundle from an already-deobfuscating stream, verifying
    /// `crc` over the plain content. `read_buffer_size` is a hint for
    /// the implementor's internal buffering.
    fn load_from_stream(
        &self,
        stream: SharedBundleStream,
        crc: u32,
        read_buffer_size: u32,
    ) -> Result<Self::Handle>;

    /// Non-blocking variant of [`BundleLoader::load_from_stream`].
    fn load_from_stream_async(
        &self,
        stream: SharedBundleStream,
        crc: u32,
        read_buffer_size: u32,
    ) -> Result<Self::Request>;

    /// Load a bundle directly from a file, skipping the first `offset`
    /// bytes and verifying `crc` over the remainder.
    fn load_from_file_at_offset(&self, path: &Path, crc: u32, offset: u64)
    -> Result<Self::Handle>;

    /// Non-blocking variant of [`BundleLoader::load_from_file_at_offset`].
    fn load_from_file_at_offset_async(
        &self,
        path: &Path,
        crc: u32,
        offset: u64,
    ) -> Result<Self::Request>;
}

/// An in-flight asynchronous bundle load.
///
/// Waiting on a request yields the same handle the synchronous entry
/// point would have produced for identical input.
pub trait LoadRequest {
    type Handle;

    /// True once the load has completed (successfully or not).
    fn is_finished(&self) -> bool;

    /// Block until the load completes and return its outcome.
    fn wait(self) -> Result<Self::Handle>;
}
