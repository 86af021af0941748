//! Catalog configuration
//!
//! Every field has a default, so a TOML file only names what it changes:
//!
//! ```toml
//! strict = true
//! enumeration = "defined-only"
//!
//! [site]
//! university = "VTU"
//! exam_session = "2026"
//! ```

use crate::error::ConfigError;
use justnotes_resolve::EnumerationPolicy;
use justnotes_view::SiteConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Catalog configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Reject indexes with validation issues instead of warning
    pub strict: bool,
    /// Semester policy for route enumeration
    pub enumeration: EnumerationPolicy,
    /// Site wording used in page metadata
    pub site: SiteConfig,
}

impl CatalogConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With strict loading
    #[inline]
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// With enumeration policy
    #[inline]
    #[must_use]
    pub fn with_enumeration(mut self, policy: EnumerationPolicy) -> Self {
        self.enumeration = policy;
        self
    }

    /// With site wording
    #[inline]
    #[must_use]
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML or has mistyped fields
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use justnotes_view::SchemeListing;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(CatalogConfig::from_toml_str("").unwrap(), CatalogConfig::default());
    }

    #[test]
    fn partial_toml_overrides() {
        let config = CatalogConfig::from_toml_str(
            r#"
strict = true
enumeration = "defined-only"

[site]
exam_session = "2027"

[[site.schemes]]
id = "2025"
status = "Active"
description = "New scheme."
"#,
        )
        .unwrap();

        assert!(config.strict);
        assert_eq!(config.enumeration, EnumerationPolicy::DefinedOnly);
        assert_eq!(config.site.exam_session, "2027");
        assert_eq!(config.site.university, "VTU");
        assert_eq!(
            config.site.schemes,
            vec![SchemeListing::new("2025", "Active", "New scheme.")]
        );
    }

    #[test]
    fn unknown_policy_is_error() {
        let result = CatalogConfig::from_toml_str("enumeration = \"sparse\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn builder() {
        let config = CatalogConfig::new()
            .with_strict(true)
            .with_enumeration(EnumerationPolicy::DefinedOnly);
        assert!(config.strict);
        assert_eq!(config.enumeration, EnumerationPolicy::DefinedOnly);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = CatalogConfig::load("/nonexistent/justnotes.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
