//! Command implementations.

pub mod check;
pub mod generate;
pub mod init;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use sitemark_core::Config;

/// Load configuration, falling back to built-in defaults when no file exists.
///
/// The tool must run with zero setup, so a missing file is not an error.
pub(crate) fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        Config::load_with_env(path).wrap_err("Failed to load configuration")
    } else {
        tracing::info!(?path, "no configuration file, using built-in defaults");
        Ok(Config::default())
    }
}
