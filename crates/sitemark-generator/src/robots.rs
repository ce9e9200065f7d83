//! Robots.txt generation.
//!
//! Generates the robots exclusion file for search engine crawlers.

use std::{fs, path::Path};

use sitemark_core::Config;
use thiserror::Error;
use tracing::info;

/// Robots generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for robots generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Robots.txt generator.
#[derive(Debug)]
pub struct RobotsGenerator {
    config: Config,
}

impl RobotsGenerator {
    /// Create a new robots generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Render the robots.txt body.
    ///
    /// Every configured language gets an `Allow:` line, the default one
    /// included; disallow prefixes are emitted in configured order.
    #[must_use]
    pub fn generate(&self) -> String {
        let base_url = self.config.base_url();
        let mut out = String::new();

        out.push_str(&format!("# robots.txt for {base_url}\n"));
        out.push_str("User-agent: *\n");
        out.push_str("Allow: /\n");
        for lang in &self.config.site.languages {
            out.push_str(&format!("Allow: /{lang}/\n"));
        }

        out.push_str("\n# Sitemap location\n");
        out.push_str(&format!("Sitemap: {base_url}/sitemap.xml\n"));

        out.push_str("\n# Crawler rate limit\n");
        out.push_str(&format!(
            "Crawl-delay: {}\n",
            self.config.robots.crawl_delay
        ));

        out.push_str("\n# Excluded directories\n");
        for prefix in &self.config.robots.disallow {
            out.push_str(&format!("Disallow: {prefix}\n"));
        }

        out
    }

    /// Number of Allow/Disallow rules the generated file carries.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        1 + self.config.site.languages.len() + self.config.robots.disallow.len()
    }

    /// Write `robots.txt` into `root`, replacing any existing file.
    pub fn write(&self, root: &Path) -> Result<()> {
        let path = root.join("robots.txt");
        fs::write(&path, self.generate())?;
        info!(path = %path.display(), rules = self.rule_count(), "wrote robots.txt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn test_config() -> Config {
        let mut config = Config::default();
        config.site.base_url = "https://example.com".to_string();
        config.site.languages = vec!["en".to_string(), "de".to_string()];
        config.robots.crawl_delay = 10;
        config.robots.disallow = vec!["/css/".to_string(), "/js/".to_string()];
        config
    }

    #[test]
    fn test_generate_directives() {
        let body = RobotsGenerator::new(test_config()).generate();

        assert!(body.starts_with("# robots.txt for https://example.com\n"));
        assert!(body.contains("User-agent: *\n"));
        assert!(body.contains("Allow: /\n"));
        assert!(body.contains("Allow: /en/\n"));
        assert!(body.contains("Allow: /de/\n"));
        assert!(body.contains("Sitemap: https://example.com/sitemap.xml\n"));
        assert!(body.contains("Crawl-delay: 10\n"));
        assert!(body.contains("Disallow: /css/\n"));
        assert!(body.contains("Disallow: /js/\n"));
    }

    #[test]
    fn test_one_allow_per_language() {
        let body = RobotsGenerator::new(test_config()).generate();

        assert_eq!(body.matches("Allow: /en/").count(), 1);
        assert_eq!(body.matches("Allow: /de/").count(), 1);
    }

    #[test]
    fn test_disallow_lines_keep_configured_order() {
        let body = RobotsGenerator::new(test_config()).generate();

        let css = body.find("Disallow: /css/").unwrap();
        let js = body.find("Disallow: /js/").unwrap();
        assert!(css < js);
        assert_eq!(body.matches("Disallow: ").count(), 2);
    }

    #[test]
    fn test_rule_count() {
        let generator = RobotsGenerator::new(test_config());

        // wildcard allow + 2 language allows + 2 disallows
        assert_eq!(generator.rule_count(), 5);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let root = TempDir::new().unwrap();
        std::fs::write(root.path().join("robots.txt"), "stale").unwrap();

        let generator = RobotsGenerator::new(test_config());
        generator.write(root.path()).unwrap();

        let written = std::fs::read_to_string(root.path().join("robots.txt")).unwrap();
        assert!(!written.contains("stale"));
        assert!(written.contains("User-agent: *"));
    }
}
