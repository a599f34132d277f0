use std::sync::{Arc, Mutex};

use crate::adapters::providers::read_bundle_file;
use crate::core::errors::{CloakError, Result};
use crate::core::models::decrypt::{DecryptFileInfo, DecryptResult};
use crate::core::models::encrypt::{EncryptFileInfo, EncryptResult};
use crate::core::stream::{BundleStream, xor_obfuscate};
use crate::core::traits::loader::BundleLoader;
use crate::core::traits::provider::{DecryptionProvider, EncryptionProvider};

/// Buffer size hint handed to the loader for stream-based loads.
/// Part of the format contract alongside the XOR key.
pub const MANAGED_READ_BUFFER_SIZE: u32 = 1024;

/// Whole-file XOR obfuscation. Self-inverse, so the encryptor and the
/// stream's read transform share one key and one code path.
#[derive(Debug)]
pub struct StreamCipherEncryptor;

impl EncryptionProvider for StreamCipherEncryptor {
    fn encrypt(&self, info: &EncryptFileInfo) -> Result<EncryptResult> {
        let mut data = read_bundle_file(&info.load_path)?;
        xor_obfuscate(&mut data);
        Ok(EncryptResult {
            encrypted: true,
            encrypted_data: data,
        })
    }

    fn name(&self) -> &str {
        "stream"
    }
}

/// Runtime counterpart of [`StreamCipherEncryptor`]: opens the obfuscated
/// file as a transform-on-read stream and hands it to the loader.
///
/// The stream stays open for the whole lifetime of the returned handle or
/// pending request; the `DecryptResult` and the loader share ownership.
pub struct StreamDecryptor<L> {
    loader: L,
}

impl<L> StreamDecryptor<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }
}

impl<L: BundleLoader> DecryptionProvider for StreamDecryptor<L> {
    type Handle = L::Handle;
    type Request = L::Request;

    fn load_bundle(
        &self,
        info: &DecryptFileInfo,
    ) -> Result<DecryptResult<Self::Handle, Self::Request>> {
        let stream = Arc::new(Mutex::new(BundleStream::open(&info.load_path)?));
        let handle = self.loader.load_from_stream(
            Arc::clone(&stream),
            info.load_crc,
            MANAGED_READ_BUFFER_SIZE,
        )?;
        Ok(DecryptResult::loaded(Some(stream), handle))
    }

    fn load_bundle_async(
        &self,
        info: &DecryptFileInfo,
    ) -> Result<DecryptResult<Self::Handle, Self::Request>> {
        let stream = Arc::new(Mutex::new(BundleStream::open(&info.load_path)?));
        let request = self.loader.load_from_stream_async(
            Arc::clone(&stream),
            info.load_crc,
            MANAGED_READ_BUFFER_SIZE,
        )?;
        Ok(DecryptResult::pending(Some(stream), request))
    }

    fn read_raw_bytes(&self, _info: &DecryptFileInfo) -> Result<Vec<u8>> {
        Err(CloakError::NotImplemented {
            operation: "read_raw_bytes (stream scheme)".into(),
        })
    }

    fn read_raw_text(&self, _info: &DecryptFileInfo) -> Result<String> {
        Err(CloakError::NotImplemented {
            operation: "read_raw_text (stream scheme)".into(),
        })
    }
}
