use crate::core::errors::Result;
use crate::core::models::decrypt::{DecryptFileInfo, DecryptResult};
use crate::core::models::encrypt::{EncryptFileInfo, EncryptResult};
use crate::core::traits::loader::LoadRequest;

/// Port for build-time obfuscation providers.
///
/// Implementations live in `adapters::providers` (StreamCipherEncryptor,
/// OffsetEncryptor). Callers depend on this trait, never on a concrete
/// scheme, so new schemes can be added without touching call sites.
pub trait EncryptionProvider: std::fmt::Debug {
    /// Read the file named by `info` and return its obfuscated bytes.
    /// All-or-nothing: an error leaves no partial output anywhere.
    fn encrypt(&self, info: &EncryptFileInfo) -> Result<EncryptResult>;

    /// Scheme name as used in configuration (e.g. "stream", "offset").
    fn name(&self) -> &str;
}

/// Port for runtime deobfuscation providers.
///
/// A provider owns its [`BundleLoader`](crate::core::traits::loader::BundleLoader)
/// and turns an obfuscated file into a bundle handle, either blocking or
/// as a pending request.
pub trait DecryptionProvider {
    type Handle;
    type Request: LoadRequest<Handle = Self::Handle>;

    /// Load a bundle handle, blocking until the load completes.
    fn load_bundle(
        &self,
        info: &DecryptFileInfo,
    ) -> Result<DecryptResult<Self::Handle, Self::Request>>;

    /// Start a non-blocking load and return the pending request.
    fn load_bundle_async(
        &self,
        info: &DecryptFileInfo,
    ) -> Result<DecryptResult<Self::Handle, Self::Request>>;

    /// Extract the plain bytes of an obfuscated file.
    ///
    /// Unsupported by both built-in schemes: transform state is tied to
    /// the stream's read cursor, so they fail with
    /// [`NotImplemented`](crate::core::errors::CloakError::NotImplemented).
    fn read_raw_bytes(&self, info: &DecryptFileInfo) -> Result<Vec<u8>>;

    /// Extract the plain text of an obfuscated file. Same capability gap
    /// as [`DecryptionProvider::read_raw_bytes`].
    fn read_raw_text(&self, info: &DecryptFileInfo) -> Result<String>;
}
