//! SEO configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for Sitemark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Sitemap entry policies.
    pub sitemap: SitemapConfig,

    /// Robots exclusion settings.
    pub robots: RobotsConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL for the site (e.g., "https://example.com").
    pub base_url: String,

    /// Default language code. Pages for this language live at the site root.
    pub default_language: String,

    /// List of supported languages, in the order they appear in output.
    pub languages: Vec<String>,
}

/// Sitemap entry policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Priority for ordinary section pages.
    pub default_priority: f32,

    /// Change frequency for ordinary section pages.
    pub default_changefreq: ChangeFreq,

    /// Policy for the homepage entry.
    pub homepage: EntryPolicy,

    /// Policy for translated homepage entries.
    pub translations: EntryPolicy,
}

/// Priority and change frequency for one class of sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntryPolicy {
    /// Priority (0.0 to 1.0 per the sitemap protocol; not range-checked).
    pub priority: f32,

    /// Expected update frequency.
    pub changefreq: ChangeFreq,
}

/// Robots exclusion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    /// Requested minimum delay between crawler requests, in seconds.
    pub crawl_delay: u32,

    /// Path prefixes crawlers are asked to avoid, in output order.
    pub disallow: Vec<String>,
}

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// The lowercase protocol token for this frequency.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Partial configuration for explicit shallow overrides.
///
/// Each populated field replaces the corresponding section of the base
/// configuration wholesale. There is no recursive merge: overriding `robots`
/// with only a new `crawl_delay` also resets `disallow` to that override's
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub site: Option<SiteConfig>,
    pub sitemap: Option<SitemapConfig>,
    pub robots: Option<RobotsConfig>,
}

// Default value functions
fn default_base_url() -> String {
    "https://example.com".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

fn default_disallow() -> Vec<String> {
    ["/css/", "/js/", "/img/", "/node_modules/", "/.git/"]
        .map(String::from)
        .to_vec()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_language: default_language(),
            languages: default_languages(),
        }
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            default_priority: 0.8,
            default_changefreq: ChangeFreq::Weekly,
            homepage: EntryPolicy {
                priority: 1.0,
                changefreq: ChangeFreq::Daily,
            },
            translations: EntryPolicy {
                priority: 0.9,
                changefreq: ChangeFreq::Daily,
            },
        }
    }
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            crawl_delay: 10,
            disallow: default_disallow(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate for more flexibility.
    ///
    /// File values can be overridden from the environment, e.g.
    /// `SITEMARK__SITE__BASE_URL=https://staging.example.com`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("SITEMARK").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply shallow overrides: populated sections replace the base ones.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(site) = overrides.site {
            self.site = site;
        }
        if let Some(sitemap) = overrides.sitemap {
            self.sitemap = sitemap;
        }
        if let Some(robots) = overrides.robots {
            self.robots = robots;
        }
        self
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        Ok(())
    }

    /// The base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.site.base_url.trim_end_matches('/')
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url())
    }

    /// Configured languages other than the default, in configured order.
    pub fn translated_languages(&self) -> impl Iterator<Item = &str> {
        self.site
            .languages
            .iter()
            .map(String::as_str)
            .filter(|lang| *lang != self.site.default_language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
base_url = "https://example.com"
default_language = "en"
languages = ["en", "de", "fr"]

[sitemap]
default_priority = 0.7
default_changefreq = "monthly"
homepage = { priority = 1.0, changefreq = "daily" }
translations = { priority = 0.9, changefreq = "weekly" }

[robots]
crawl_delay = 5
disallow = ["/assets/", "/drafts/"]
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("seo.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.languages, vec!["en", "de", "fr"]);
        assert_eq!(config.sitemap.default_priority, 0.7);
        assert_eq!(config.sitemap.default_changefreq, ChangeFreq::Monthly);
        assert_eq!(config.sitemap.homepage.priority, 1.0);
        assert_eq!(config.sitemap.translations.changefreq, ChangeFreq::Weekly);
        assert_eq!(config.robots.crawl_delay, 5);
        assert_eq!(config.robots.disallow, vec!["/assets/", "/drafts/"]);
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("seo.toml");
        let minimal_config = r#"
[site]
base_url = "https://mysite.io"
"#;
        std::fs::write(&config_path, minimal_config).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.base_url, "https://mysite.io");
        assert_eq!(config.site.default_language, "en");
        assert_eq!(config.site.languages, vec!["en"]);
        assert_eq!(config.sitemap.default_priority, 0.8);
        assert_eq!(config.sitemap.default_changefreq, ChangeFreq::Weekly);
        assert_eq!(config.sitemap.homepage.changefreq, ChangeFreq::Daily);
        assert_eq!(config.robots.crawl_delay, 10);
        assert!(config.robots.disallow.contains(&"/css/".to_string()));
    }

    #[test]
    fn test_url_for() {
        let config = Config::default();

        assert_eq!(config.url_for("/blog/"), "https://example.com/blog/");
        assert_eq!(config.url_for("blog/"), "https://example.com/blog/");
        assert_eq!(config.url_for("sitemap.xml"), "https://example.com/sitemap.xml");
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let mut config = Config::default();
        config.site.base_url = "https://example.com/".to_string();

        assert_eq!(config.base_url(), "https://example.com");
        assert_eq!(config.url_for("/de/"), "https://example.com/de/");
    }

    #[test]
    fn test_translated_languages_skip_default() {
        let mut config = Config::default();
        config.site.languages = vec!["en".into(), "de".into(), "ja".into()];

        let translated: Vec<&str> = config.translated_languages().collect();
        assert_eq!(translated, vec!["de", "ja"]);
    }

    #[test]
    fn test_overrides_replace_sections_wholesale() {
        let overrides = ConfigOverrides {
            robots: Some(RobotsConfig {
                crawl_delay: 30,
                disallow: vec![],
            }),
            ..ConfigOverrides::default()
        };

        let config = Config::default().with_overrides(overrides);

        // The overridden section is taken as given, defaults do not bleed in.
        assert_eq!(config.robots.crawl_delay, 30);
        assert!(config.robots.disallow.is_empty());
        // Untouched sections keep their defaults.
        assert_eq!(config.site.default_language, "en");
        assert_eq!(config.sitemap.default_priority, 0.8);
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("seo.toml");
        let config_content = r#"
[site]
base_url = ""
"#;
        std::fs::write(&config_path, config_content).expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("base_url cannot be empty")
        );
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/seo.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_changefreq_rejects_unknown_token() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("seo.toml");
        let config_content = r#"
[site]
base_url = "https://example.com"

[sitemap]
default_changefreq = "fortnightly"
"#;
        std::fs::write(&config_path, config_content).expect("write");

        assert!(Config::load(&config_path).is_err());
    }
}
