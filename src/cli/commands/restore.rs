use std::io::Read;
use std::path::{Path, PathBuf};

use crate::adapters::providers::offset::BUNDLE_OFFSET;
use crate::cli::output;
use crate::core::errors::{CloakError, Result};
use crate::core::stream::BundleStream;

/// Execute the `bundlecloak restore` command.
///
/// Inverse of `encrypt`, for build tooling and spot checks: the stream
/// scheme is read back through the deobfuscating stream (XOR is
/// self-inverse), the offset scheme drops its 32-byte padding.
pub fn execute(file: &str, output_path: Option<&str>, scheme_override: Option<&str>) -> Result<()> {
    let scheme = super::resolve_scheme(scheme_override)?;
    let source = PathBuf::from(file);
    let dest = output_path
        .map(PathBuf::from)
        .unwrap_or_else(|| default_dest(file));
    if dest == source {
        return Err(CloakError::InvalidConfig {
            detail: format!("Output path {} would overwrite the source file.", dest.display()),
        });
    }

    let plain = match scheme.as_str() {
        "stream" => read_through_stream(&source)?,
        "offset" => strip_padding(&source)?,
        other => {
            return Err(CloakError::InvalidConfig {
                detail: format!("Unknown obfuscation scheme: '{other}'. Use 'stream' or 'offset'."),
            });
        }
    };
    std::fs::write(&dest, &plain)?;

    output::success(&format!(
        "Restored {} -> {} ({scheme} scheme)",
        source.display(),
        dest.display()
    ));
    Ok(())
}

/// `<file>` minus a trailing `.cloak`, or `<file>.plain` if it has none.
fn default_dest(file: &str) -> PathBuf {
    match file.strip_suffix(".cloak") {
        Some(stripped) => PathBuf::from(stripped),
        None => PathBuf::from(format!("{file}.plain")),
    }
}

fn read_through_stream(source: &Path) -> Result<Vec<u8>> {
    let mut stream = BundleStream::open(source)?;
    let mut plain = Vec::new();
    stream.read_to_end(&mut plain)?;
    Ok(plain)
}

fn strip_padding(source: &Path) -> Result<Vec<u8>> {
    let data = crate::adapters::providers::read_bundle_file(source)?;
    if (data.len() as u64) < BUNDLE_OFFSET {
        return Err(CloakError::MalformedBundle {
            path: source.to_path_buf(),
            detail: format!(
                "file is {} bytes, shorter than the {BUNDLE_OFFSET}-byte padding",
                data.len()
            ),
        });
    }
    Ok(data[BUNDLE_OFFSET as usize..].to_vec())
}
