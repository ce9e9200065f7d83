//! Sitemark Generator Library
//!
//! SEO artifact generation engine for Sitemark.
//!
//! # Modules
//!
//! - [`scan`] - Project root directory scanning
//! - [`sitemap`] - XML sitemap generation
//! - [`robots`] - Robots exclusion file generation
//! - [`build`] - Generation orchestration

pub mod build;
pub mod robots;
pub mod scan;
pub mod sitemap;

pub use build::{BuildError, Builder, GenerateStats};
pub use robots::RobotsGenerator;
pub use scan::scan_site_dirs;
pub use sitemap::{SitemapGenerator, SitemapUrl};
