use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{CloakError, Result};

/// Scheme names accepted in configuration and on the command line.
pub const KNOWN_SCHEMES: &[&str] = &["stream", "offset"];

/// Default configuration written by `bundlecloak init`.
pub const DEFAULT_CONFIG: &str = r#"[bundle]
# Obfuscation scheme: "stream" (whole-file XOR) or "offset" (32-byte padding)
scheme = "stream"

[remote]
default_host = "https://cdn.example.com/bundles"
fallback_host = "https://mirror.example.com/bundles"
"#;

/// Top-level configuration read from `bundlecloak.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub bundle: BundleSection,
    pub remote: Option<RemoteSection>,
}

impl AppConfig {
    /// Load and validate the configuration at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CloakError::InvalidConfig {
                detail: format!(
                    "{} not found. Run 'bundlecloak init' first.",
                    path.display()
                ),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CloakError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;
        validate_scheme(&config.bundle.scheme)?;
        Ok(config)
    }
}

/// The `[bundle]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleSection {
    pub scheme: String,
}

/// The `[remote]` section: host pair for download URL composition.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteSection {
    pub default_host: String,
    pub fallback_host: String,
}

/// Reject scheme names outside the closed provider set.
pub fn validate_scheme(scheme: &str) -> Result<()> {
    if KNOWN_SCHEMES.contains(&scheme) {
        Ok(())
    } else {
        Err(CloakError::InvalidConfig {
            detail: format!("Unknown obfuscation scheme: '{scheme}'. Use 'stream' or 'offset'."),
        })
    }
}
