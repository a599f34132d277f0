use crate::adapters::providers::read_bundle_file;
use crate::core::errors::{CloakError, Result};
use crate::core::models::decrypt::{DecryptFileInfo, DecryptResult};
use crate::core::models::encrypt::{EncryptFileInfo, EncryptResult};
use crate::core::traits::loader::BundleLoader;
use crate::core::traits::provider::{DecryptionProvider, EncryptionProvider};

/// Number of padding bytes prepended by the offset scheme. Part of the
/// on-disk format contract.
pub const BUNDLE_OFFSET: u64 = 32;

/// Obfuscation by byte-offset shifting: content bytes are never mutated,
/// only pushed [`BUNDLE_OFFSET`] bytes into the file behind zeroed
/// padding. Generic archive tools then fail to recognize the header.
#[derive(Debug)]
pub struct OffsetEncryptor;

impl EncryptionProvider for OffsetEncryptor {
    fn encrypt(&self, info: &EncryptFileInfo) -> Result<EncryptResult> {
        let data = read_bundle_file(&info.load_path)?;
        let mut padded = vec![0u8; data.len() + BUNDLE_OFFSET as usize];
        padded[BUNDLE_OFFSET as usize..].copy_from_slice(&data);
        Ok(EncryptResult {
            encrypted: true,
            encrypted_data: padded,
        })
    }

    fn name(&self) -> &str {
        "offset"
    }
}

/// Runtime counterpart of [`OffsetEncryptor`]: no stream wrapping, the
/// loader reads the file directly starting at [`BUNDLE_OFFSET`].
///
/// Truncated files are the loader's problem; this layer adds no size
/// checks of its own.
pub struct OffsetDecryptor<L> {
    loader: L,
}

impl<L> OffsetDecryptor<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }
}

impl<L: BundleLoader> DecryptionProvider for OffsetDecryptor<L> {
    type Handle = L::Handle;
    type Request = L::Request;

    fn load_bundle(
        &self,
        info: &DecryptFileInfo,
    ) -> Result<DecryptResult<Self::Handle, Self::Request>> {
        let handle =
            self.loader
                .load_from_file_at_offset(&info.load_path, info.load_crc, BUNDLE_OFFSET)?;
        Ok(DecryptResult::loaded(None, handle))
    }

    fn load_bundle_async(
        &self,
        info: &DecryptFileInfo,
    ) -> Result<DecryptResult<Self::Handle, Self::Request>> {
        let request = self.loader.load_from_file_at_offset_async(
            &info.load_path,
            info.load_crc,
            BUNDLE_OFFSET,
        )?;
        Ok(DecryptResult::pending(None, request))
    }

    fn read_raw_bytes(&self, _info: &DecryptFileInfo) -> Result<Vec<u8>> {
        Err(CloakError::NotImplemented {
            operation: "read_raw_bytes (offset scheme)".into(),
        })
    }

    fn read_raw_text(&self, _info: &DecryptFileInfo) -> Result<String> {
        Err(CloakError::NotImplemented {
            operation: "read_raw_text (offset scheme)".into(),
        })
    }
}
