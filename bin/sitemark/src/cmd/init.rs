//! Init command - write a starter configuration file

use std::{fs, path::Path};

use color_eyre::eyre::{bail, Result, WrapErr};

const STARTER_CONFIG: &str = r#"# Sitemark configuration
# All keys are optional; missing ones fall back to built-in defaults.

[site]
base_url = "https://example.com"
default_language = "en"
languages = ["en"]

[sitemap]
default_priority = 0.8
default_changefreq = "weekly"
homepage = { priority = 1.0, changefreq = "daily" }
translations = { priority = 0.9, changefreq = "daily" }

[robots]
crawl_delay = 10
disallow = ["/css/", "/js/", "/img/", "/node_modules/", "/.git/"]
"#;

/// Run the init command.
///
/// Writes a commented starter configuration to `path`.
pub fn run(path: &Path, force: bool) -> Result<()> {
    tracing::info!(?path, force, "Writing starter configuration");

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
    }

    fs::write(path, STARTER_CONFIG).wrap_err("Failed to write file")?;

    println!("Created: {}", path.display());
    Ok(())
}
