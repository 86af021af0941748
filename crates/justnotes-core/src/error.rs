//! Error types for the catalog
//!
//! - [`ConfigError`]: reading or parsing configuration
//! - [`CatalogError`]: everything a catalog operation can fail with

use justnotes_index::{IndexError, RouteError};
use justnotes_resolve::NotFound;
use std::path::PathBuf;

/// Configuration loading failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config is not valid TOML for [`CatalogConfig`](crate::CatalogConfig)
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Main catalog error type
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Index could not be loaded
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Request path is malformed
    #[error("route error: {0}")]
    Route(#[from] RouteError),

    /// No page at the requested path
    #[error("not found")]
    NotFound(#[from] NotFound),
}

impl CatalogError {
    /// Check if this is a plain miss rather than a failure
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
