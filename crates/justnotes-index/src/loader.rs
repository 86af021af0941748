//! Index loading from JSON or YAML documents
//!
//! The format is picked from the file extension.

use crate::error::IndexError;
use crate::model::ContentIndex;
use std::io::Read;
use std::path::Path;

/// On-disk format of an index document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl IndexFormat {
    /// Supported file extensions (without dot)
    #[inline]
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Yaml => &["yaml", "yml"],
        }
    }

    /// Detect format from a path's extension
    ///
    /// # Errors
    /// Returns [`IndexError::UnsupportedFormat`] for any other extension
    pub fn from_path(path: &Path) -> Result<Self, IndexError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        [Self::Json, Self::Yaml]
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
            .ok_or_else(|| IndexError::UnsupportedFormat(path.to_path_buf()))
    }
}

/// Loads and checks content index documents
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexLoader {
    strict: bool,
}

impl IndexLoader {
    /// Create lenient loader: structural issues are logged, not fatal
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With strict mode: structural issues fail the load
    #[inline]
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Parse an index from a string
    ///
    /// # Errors
    /// Returns error on malformed input, or on structural issues in strict mode
    pub fn parse_str(&self, content: &str, format: IndexFormat) -> Result<ContentIndex, IndexError> {
        self.parse_with_origin(content, format, "<input>")
    }

    /// Parse an index from a reader
    ///
    /// # Errors
    /// Returns error if reading fails, on malformed input, or on structural
    /// issues in strict mode
    pub fn load_reader<R: Read>(&self, mut reader: R, format: IndexFormat) -> Result<ContentIndex, IndexError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| IndexError::Io {
                path: "<reader>".into(),
                source,
            })?;
        self.parse_with_origin(&content, format, "<reader>")
    }

    /// Load an index file, detecting the format from its extension
    ///
    /// # Errors
    /// Returns error if the extension is unsupported, the file cannot be read,
    /// the document is malformed, or on structural issues in strict mode
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<ContentIndex, IndexError> {
        let path = path.as_ref();
        let format = IndexFormat::from_path(path)?;
        tracing::debug!(path = %path.display(), ?format, "loading content index");

        let content = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_with_origin(&content, format, &path.display().to_string())
    }

    fn parse_with_origin(
        &self,
        content: &str,
        format: IndexFormat,
        origin: &str,
    ) -> Result<ContentIndex, IndexError> {
        let index: ContentIndex = match format {
            IndexFormat::Json => serde_json::from_str(content).map_err(|e| IndexError::Json {
                origin: origin.to_string(),
                message: e.to_string(),
            })?,
            IndexFormat::Yaml => serde_yaml::from_str(content).map_err(|e| IndexError::Yaml {
                origin: origin.to_string(),
                message: e.to_string(),
            })?,
        };

        let issues = index.validate();
        if !issues.is_empty() {
            if self.strict {
                return Err(IndexError::Invalid(issues));
            }
            for issue in &issues {
                tracing::warn!(origin, %issue, "content index issue");
            }
        }

        let stats = index.stats();
        tracing::info!(
            origin,
            flat_branches = stats.flat_branches,
            schemes = stats.schemes,
            subjects = stats.subjects,
            resources = stats.resources,
            "content index loaded"
        );

        Ok(index)
    }
}
