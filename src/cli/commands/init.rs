use crate::cli::output;
use crate::config::app_config::DEFAULT_CONFIG;
use crate::core::errors::{CloakError, Result};

/// Execute the `bundlecloak init` command.
///
/// Writes a default config next to the caller; refuses to clobber an
/// existing one.
pub fn execute() -> Result<()> {
    let path = crate::cli::context::config_path();
    if path.exists() {
        return Err(CloakError::InvalidConfig {
            detail: format!("{} already exists — project is already initialized.", path.display()),
        });
    }

    std::fs::write(path, DEFAULT_CONFIG)?;

    output::success(&format!("Created {}", path.display()));
    output::field("scheme", "stream");
    println!("  Edit the [remote] hosts before publishing bundles.");
    Ok(())
}
