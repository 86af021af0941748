//! JustNotes Core - Catalog Facade
//!
//! Ties the content index, resolver, enumerator and view projector together
//! behind one [`Catalog`]:
//! - Loads an index under a [`CatalogConfig`]
//! - Routes request paths to the right family across both index shapes
//! - Resolves and projects single pages
//! - Generates every page of a static build in parallel
//!
//! # Example
//!
//! ```rust
//! use justnotes_core::{Catalog, CatalogConfig};
//! use justnotes_index::{ContentIndex, FlatBranch, ResourceTypeSemester};
//!
//! let index = ContentIndex::new().with_branch(
//!     "cse",
//!     FlatBranch::new("Computer Science", "CSE").with_semester(3, ResourceTypeSemester::default()),
//! );
//! let catalog = Catalog::new(index, CatalogConfig::new());
//!
//! let page = catalog.page("/cse/3").unwrap();
//! assert_eq!(page.meta().canonical, "/cse/3");
//! assert!(catalog.page("/cse/4").unwrap_err().is_not_found());
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;

// Re-exports for convenience
pub use catalog::{Catalog, GeneratedPage};
pub use config::CatalogConfig;
pub use error::{CatalogError, ConfigError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the catalog
    pub use crate::{Catalog, CatalogConfig, CatalogError, GeneratedPage};
    pub use justnotes_index::{ContentIndex, ParamSet, RouteFamily, RoutePath};
    pub use justnotes_resolve::{EnumerationPolicy, NotFound, ResolvedNode};
    pub use justnotes_view::{DisplayFacts, SiteConfig};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
