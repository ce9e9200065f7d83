//! Generate command - writes the SEO artifacts

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use sitemark_generator::Builder;

/// Which artifacts to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Sitemap then robots, sequentially.
    All,
    /// Sitemap only.
    Sitemap,
    /// Robots only.
    Robots,
}

/// Run the generate command.
pub fn run(config_path: &Path, root: &Path, target: Target) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?config_path, ?root, ?target, "Starting generation");

    let config = super::load_config(config_path)?;
    tracing::debug!(?config, "Loaded configuration");

    let builder = Builder::new(config, root);

    let (urls, rules) = match target {
        Target::All => {
            let stats = builder.generate_all().wrap_err("Generation failed")?;
            (Some(stats.sitemap_urls), Some(stats.robots_rules))
        }
        Target::Sitemap => {
            let urls = builder
                .generate_sitemap()
                .wrap_err("Sitemap generation failed")?;
            (Some(urls), None)
        }
        Target::Robots => {
            let rules = builder
                .generate_robots()
                .wrap_err("Robots generation failed")?;
            (None, Some(rules))
        }
    };

    let duration = start.elapsed();

    println!();
    println!("  Generation completed successfully!");
    println!();
    if let Some(urls) = urls {
        println!("  Sitemap URLs: {urls}");
    }
    if let Some(rules) = rules {
        println!("  Robots rules: {rules}");
    }
    println!();
    println!("  Duration:     {:.2}s", duration.as_secs_f64());
    println!("  Output:       {}", root.display());
    println!();

    tracing::info!(?duration, "Generation completed successfully");

    Ok(())
}
