//! JustNotes View Projection
//!
//! Derives what a page shows from a resolved node: labels, counts, ordered
//! resource tags, breadcrumb chains and page metadata. Output is plain data
//! that serializes to JSON for an external renderer.
//!
//! # Example
//!
//! ```rust
//! use justnotes_index::{ContentIndex, FlatBranch, Resource, ResourceTypeSemester, RouteFamily};
//! use justnotes_resolve::resolve;
//! use justnotes_view::{project, DisplayFacts};
//!
//! let semester = ResourceTypeSemester {
//!     pyqs: vec![Resource::new("Jan 2023 Paper", "http://x/p.pdf").with_exam("Jan", 2023)],
//!     ..ResourceTypeSemester::default()
//! };
//! let index = ContentIndex::new()
//!     .with_branch("cse", FlatBranch::new("Computer Science", "CSE").with_semester(3, semester));
//!
//! let node = resolve(&index, RouteFamily::ResourceType, &["cse", "3", "pyqs"]).unwrap();
//! let DisplayFacts::ResourceType(facts) = project(&node) else { unreachable!() };
//! assert_eq!(facts.rows[0].tags, vec!["Jan 2023"]);
//! assert_eq!(facts.breadcrumbs.len(), 4);
//! ```

#![warn(missing_docs)]

pub mod facts;
pub mod projector;
pub mod site;
pub mod tags;

// Re-exports
pub use facts::{
    Breadcrumb, BranchEntry, BranchFacts, DisplayFacts, EmptyState, HomeFacts, PageMeta,
    ResourceCard, ResourceListFacts, ResourceRow, SchemeBranchFacts, SchemeEntry, SchemeFacts,
    SchemeSemesterFacts, SectionFacts, SectionLink, SemesterCell, SemesterFacts, SubjectEntry,
    SubjectFacts,
};
pub use projector::{project, Projector};
pub use site::{SchemeListing, SiteConfig};
pub use tags::{
    file_count_label, files_available_label, row_position, semesters_available_label, tags,
    OFFICIAL_TAG,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
