//! JustNotes Content Index
//!
//! Schema, route vocabulary and loading for the study-material catalog.
//!
//! # Overview
//!
//! - [`ContentIndex`]: the immutable hierarchical document (flat and scheme shapes)
//! - [`RouteFamily`], [`RoutePath`], [`ParamSet`]: how pages are addressed
//! - [`ResourceType`], [`SubjectSection`]: fixed category tables
//! - [`IndexLoader`]: JSON/YAML loading with structural validation
//! - [`init_global`] / [`global`]: process-wide read-only instance
//!
//! # Example
//!
//! ```rust
//! use justnotes_index::{ContentIndex, FlatBranch, ResourceTypeSemester};
//!
//! let index = ContentIndex::new().with_branch(
//!     "cse",
//!     FlatBranch::new("Computer Science", "CSE").with_semester(3, ResourceTypeSemester::default()),
//! );
//!
//! assert!(index.branch("cse").unwrap().semester("3").is_some());
//! assert!(index.validate().is_empty());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod global;
pub mod kinds;
pub mod loader;
pub mod model;
pub mod route;
pub mod validate;

// Re-exports
pub use error::IndexError;
pub use global::{global, init_global};
pub use kinds::{ResourceType, SubjectSection, UnknownKind};
pub use loader::{IndexFormat, IndexLoader};
pub use model::{
    Branch, ContentIndex, FlatBranch, IndexStats, Resource, ResourceTypeSemester, Scheme,
    SchemeBranch, Subject, SubjectSemester,
};
pub use route::{semester_number, ParamSet, RouteError, RouteFamily, RoutePath, SEMESTERS};
pub use validate::{is_routable_key, IndexIssue};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
