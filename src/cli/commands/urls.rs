use crate::adapters::remote::host_resolver::HostResolver;
use crate::cli::output;
use crate::config::app_config::AppConfig;
use crate::core::errors::{CloakError, Result};
use crate::core::traits::remote::RemoteServices;

/// Execute the `bundlecloak urls` command.
///
/// Composes the primary and fallback download URLs for a published
/// bundle file name from the configured hosts.
pub fn execute(file_name: &str) -> Result<()> {
    let config = AppConfig::load(crate::cli::context::config_path())?;
    let remote = config.remote.ok_or_else(|| CloakError::InvalidConfig {
        detail: "No [remote] section in config. Add default_host and fallback_host.".into(),
    })?;

    let resolver = HostResolver::new(remote.default_host, remote.fallback_host);
    output::field("primary", &resolver.remote_main_url(file_name));
    output::field("fallback", &resolver.remote_fallback_url(file_name));
    Ok(())
}
