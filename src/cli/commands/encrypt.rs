use std::path::PathBuf;

use sha2::{Digest, Sha256};

use crate::adapters::providers::offset::OffsetEncryptor;
use crate::adapters::providers::stream_cipher::StreamCipherEncryptor;
use crate::cli::output;
use crate::core::errors::{CloakError, Result};
use crate::core::models::encrypt::EncryptFileInfo;
use crate::core::traits::provider::EncryptionProvider;

/// Execute the `bundlecloak encrypt` command.
///
/// Obfuscates one bundle file with the configured (or overridden) scheme
/// and reports the SHA-256 of the output, so build pipelines can pin
/// what they ship.
pub fn execute(file: &str, output_path: Option<&str>, scheme_override: Option<&str>) -> Result<()> {
    let scheme = super::resolve_scheme(scheme_override)?;
    let encryptor = encryptor_for(&scheme)?;

    let source = PathBuf::from(file);
    let dest = output_path
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("{file}.cloak")));
    if dest == source {
        return Err(CloakError::InvalidConfig {
            detail: format!("Output path {} would overwrite the source file.", dest.display()),
        });
    }

    let result = encryptor.encrypt(&EncryptFileInfo::new(&source))?;
    std::fs::write(&dest, &result.encrypted_data)?;

    let digest = Sha256::digest(&result.encrypted_data);
    output::success(&format!(
        "Obfuscated {} -> {} ({} scheme)",
        source.display(),
        dest.display(),
        encryptor.name()
    ));
    output::field("size", &format!("{} bytes", result.encrypted_data.len()));
    output::field("sha256", &format!("{digest:x}"));
    Ok(())
}

/// Concrete encryptor for a scheme name. Names are validated upstream,
/// but an unknown one still errors here rather than defaulting, so this
/// dispatch cannot drift apart from `KNOWN_SCHEMES` silently.
pub(crate) fn encryptor_for(scheme: &str) -> Result<Box<dyn EncryptionProvider>> {
    match scheme {
        "stream" => Ok(Box::new(StreamCipherEncryptor)),
        "offset" => Ok(Box::new(OffsetEncryptor)),
        other => Err(CloakError::InvalidConfig {
            detail: format!("Unknown obfuscation scheme: '{other}'. Use 'stream' or 'offset'."),
        }),
    }
}
