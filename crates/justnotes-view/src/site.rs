//! Site-wide strings used in page metadata

use serde::{Deserialize, Serialize};

/// Site identity and wording shared by every page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Brand name, e.g. `JustNotes`
    pub brand: String,
    /// University short name, e.g. `VTU`
    pub university: String,
    /// Exam session subject pages advertise, e.g. `2026`
    pub exam_session: String,
    /// Link offered on empty resource lists
    pub contribute_url: String,
    /// Schemes listed on the home page, in display order
    pub schemes: Vec<SchemeListing>,
}

impl SiteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With brand name
    #[inline]
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// With university short name
    #[inline]
    #[must_use]
    pub fn with_university(mut self, university: impl Into<String>) -> Self {
        self.university = university.into();
        self
    }

    /// With exam session
    #[inline]
    #[must_use]
    pub fn with_exam_session(mut self, session: impl Into<String>) -> Self {
        self.exam_session = session.into();
        self
    }

    /// With contribute link
    #[inline]
    #[must_use]
    pub fn with_contribute_url(mut self, url: impl Into<String>) -> Self {
        self.contribute_url = url.into();
        self
    }

    /// With home page scheme listings
    #[inline]
    #[must_use]
    pub fn with_schemes(mut self, schemes: Vec<SchemeListing>) -> Self {
        self.schemes = schemes;
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "JustNotes".to_string(),
            university: "VTU".to_string(),
            exam_session: "2026".to_string(),
            contribute_url: "https://github.com/yourusername/justnotes".to_string(),
            schemes: vec![
                SchemeListing::new(
                    "2022",
                    "Active",
                    "Current scheme for students admitted from 2022 onwards. Covers revised syllabus across all branches.",
                ),
                SchemeListing::new(
                    "2021",
                    "Legacy",
                    "Scheme for students admitted in 2021. Legacy syllabus — notes and PYQs available.",
                ),
            ],
        }
    }
}

/// One scheme entry on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeListing {
    /// Scheme id, also its route segment
    pub id: String,
    /// Status badge, e.g. `Active`
    pub status: String,
    /// One-paragraph description
    pub description: String,
}

impl SchemeListing {
    /// Create listing
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        status: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            description: description.into(),
        }
    }
}
