//! Sitemap generation.
//!
//! Generates the XML sitemap for search engine crawlers.

use std::{fs, path::Path};

use chrono::Utc;
use sitemark_core::{ChangeFreq, Config, EntryPolicy};
use thiserror::Error;
use tracing::{debug, info};

use crate::scan::{language_variant_exists, scan_site_dirs, ScanError};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory scan error.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapUrl {
    /// Absolute URL location.
    pub loc: String,

    /// Last modification date, ISO `YYYY-MM-DD`.
    pub lastmod: String,

    /// Change frequency.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Collect the URL entries for one run over `root`.
    ///
    /// Every entry shares a single generation date. Translated homepages are
    /// listed for every non-default language without touching the disk;
    /// translated section pages only when the matching directory exists.
    pub fn collect(&self, root: &Path) -> Result<Vec<SitemapUrl>> {
        let date = Utc::now().format("%Y-%m-%d").to_string();
        let sitemap = &self.config.sitemap;
        let mut urls = Vec::new();

        urls.push(self.entry("/", &date, sitemap.homepage));

        for lang in self.config.translated_languages() {
            urls.push(self.entry(&format!("/{lang}/"), &date, sitemap.translations));
        }

        let default_policy = EntryPolicy {
            priority: sitemap.default_priority,
            changefreq: sitemap.default_changefreq,
        };

        for dir in scan_site_dirs(root, &self.config)? {
            urls.push(self.entry(&format!("/{dir}/"), &date, default_policy));

            for lang in self.config.translated_languages() {
                if language_variant_exists(root, lang, &dir) {
                    urls.push(self.entry(&format!("/{lang}/{dir}/"), &date, default_policy));
                }
            }
        }

        debug!(count = urls.len(), "collected sitemap entries");
        Ok(urls)
    }

    fn entry(&self, path: &str, date: &str, policy: EntryPolicy) -> SitemapUrl {
        SitemapUrl {
            loc: format!("{}{path}", self.config.base_url()),
            lastmod: date.to_string(),
            changefreq: policy.changefreq,
            priority: policy.priority,
        }
    }

    /// Render URL entries into the sitemap envelope.
    #[must_use]
    pub fn render(&self, urls: &[SitemapUrl]) -> String {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for url in urls {
            xml.push_str(&url_to_xml(url));
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Generate sitemap XML for `root`.
    pub fn generate(&self, root: &Path) -> Result<String> {
        let urls = self.collect(root)?;
        Ok(self.render(&urls))
    }

    /// Write `sitemap.xml` into `root`, replacing any existing file.
    ///
    /// Returns the number of URL entries written.
    pub fn write(&self, root: &Path) -> Result<usize> {
        let urls = self.collect(root)?;
        let path = root.join("sitemap.xml");
        fs::write(&path, self.render(&urls))?;
        info!(path = %path.display(), urls = urls.len(), "wrote sitemap");
        Ok(urls.len())
    }
}

/// Convert a URL entry to XML.
fn url_to_xml(url: &SitemapUrl) -> String {
    let mut xml = String::from("  <url>\n");
    xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
    xml.push_str(&format!("    <lastmod>{}</lastmod>\n", url.lastmod));
    xml.push_str(&format!(
        "    <changefreq>{}</changefreq>\n",
        url.changefreq.as_str()
    ));
    xml.push_str(&format!("    <priority>{:.1}</priority>\n", url.priority));
    xml.push_str("  </url>\n");
    xml
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
