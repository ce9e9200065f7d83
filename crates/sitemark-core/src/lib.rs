//! Sitemark Core Library
//!
//! Core types, configuration, and error handling for the Sitemark SEO
//! artifact generator.

pub mod config;
pub mod error;

pub use config::{
    ChangeFreq, Config, ConfigOverrides, EntryPolicy, RobotsConfig, SiteConfig, SitemapConfig,
};
pub use error::{CoreError, Result};
