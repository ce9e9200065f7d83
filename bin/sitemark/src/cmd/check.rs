//! Check command - validate configuration without writing

use std::path::Path;

use color_eyre::eyre::{bail, Result};
use sitemark_core::Config;

/// Run the check command.
///
/// Loads and validates the configuration and reports warnings a generation
/// run would not fail on but a site author probably wants to know about.
pub fn run(config_path: &Path, root: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, ?root, strict, "Checking configuration");

    println!("Checking configuration...");
    let config = if config_path.exists() {
        match Config::load_with_env(config_path) {
            Ok(c) => {
                println!("  ✓ Configuration valid");
                c
            }
            Err(e) => {
                println!("  ✗ Configuration invalid: {e}");
                bail!("configuration error: {e}");
            }
        }
    } else {
        println!(
            "  • No configuration file at {}, using built-in defaults",
            config_path.display()
        );
        Config::default()
    };

    let warnings = quick_validate(&config, root);
    if warnings.is_empty() {
        println!("  ✓ No warnings");
    } else {
        println!();
        println!("  Warnings:");
        for warn in &warnings {
            println!("  ⚠ {warn}");
        }
        if strict {
            bail!("{} warning(s) in strict mode", warnings.len());
        }
    }

    Ok(())
}

/// Cheap consistency checks over the loaded configuration and the site tree.
fn quick_validate(config: &Config, root: &Path) -> Vec<String> {
    let mut warnings = Vec::new();

    if !config
        .site
        .languages
        .iter()
        .any(|lang| *lang == config.site.default_language)
    {
        warnings.push(format!(
            "default language '{}' is not listed in site.languages",
            config.site.default_language
        ));
    }

    for lang in config.translated_languages() {
        if !root.join(lang).is_dir() {
            warnings.push(format!(
                "language '{lang}' has no '{lang}/' directory under {}",
                root.display()
            ));
        }
    }

    for prefix in &config.robots.disallow {
        if !prefix.starts_with('/') {
            warnings.push(format!(
                "disallow prefix '{prefix}' does not start with '/'"
            ));
        }
    }

    warnings
}
