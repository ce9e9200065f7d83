//! Generation orchestration.
//!
//! Coordinates a full generation run over one project root.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use sitemark_core::Config;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    robots::{RobotsError, RobotsGenerator},
    scan::ScanError,
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory scan error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// Robots generation error.
    #[error("robots error: {0}")]
    Robots(#[from] RobotsError),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Generation statistics.
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    /// Number of URL entries in the sitemap.
    pub sitemap_urls: usize,

    /// Number of Allow/Disallow rules in robots.txt.
    pub robots_rules: usize,

    /// Generation duration in milliseconds.
    pub duration_ms: u64,
}

/// Orchestrates generation of both SEO artifacts for one project root.
#[derive(Debug)]
pub struct Builder {
    config: Config,
    root_dir: PathBuf,
}

impl Builder {
    /// Create a new builder.
    #[must_use]
    pub fn new(config: Config, root_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            root_dir: root_dir.into(),
        }
    }

    /// The project root this builder operates on.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Generate and write the sitemap. Returns the number of URL entries.
    pub fn generate_sitemap(&self) -> Result<usize> {
        let generator = SitemapGenerator::new(self.config.clone());
        Ok(generator.write(&self.root_dir)?)
    }

    /// Generate and write robots.txt. Returns the number of rules.
    pub fn generate_robots(&self) -> Result<usize> {
        let generator = RobotsGenerator::new(self.config.clone());
        generator.write(&self.root_dir)?;
        Ok(generator.rule_count())
    }

    /// Generate both artifacts, sitemap first, sequentially.
    ///
    /// A sitemap failure does not prevent the robots attempt; the first
    /// error is returned once both have run. There is no rollback of a
    /// successfully written artifact.
    pub fn generate_all(&self) -> Result<GenerateStats> {
        let start = Instant::now();
        info!(root = %self.root_dir.display(), "generating SEO artifacts");

        let sitemap = self.generate_sitemap();
        if let Err(e) = &sitemap {
            warn!(error = %e, "sitemap generation failed");
        }

        let robots = self.generate_robots();
        if let Err(e) = &robots {
            warn!(error = %e, "robots generation failed");
        }

        let stats = GenerateStats {
            sitemap_urls: sitemap?,
            robots_rules: robots?,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        info!(
            urls = stats.sitemap_urls,
            rules = stats.robots_rules,
            "generation completed"
        );
        Ok(stats)
    }
}
