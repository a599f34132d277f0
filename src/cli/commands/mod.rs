pub mod encrypt;
pub mod init;
pub mod restore;
pub mod urls;

use crate::config::app_config::{AppConfig, validate_scheme};
use crate::core::errors::Result;

/// Pick the scheme for a command: an explicit `--scheme` wins, otherwise
/// the configured one. Validated either way.
pub(crate) fn resolve_scheme(override_scheme: Option<&str>) -> Result<String> {
    if let Some(scheme) = override_scheme {
        validate_scheme(scheme)?;
        return Ok(scheme.to_string());
    }
    let config = AppConfig::load(crate::cli::context::config_path())?;
    Ok(config.bundle.scheme)
}
