//! JustNotes Path Resolution
//!
//! Turns route segments into borrowed slices of the content index, and
//! enumerates every route a static build should render.
//!
//! - [`Resolver`] / [`resolve`]: segments → [`ResolvedNode`] or [`NotFound`]
//! - [`Enumerator`] / [`enumerate`]: index → [`ParamSet`](justnotes_index::ParamSet) lists
//!
//! # Example
//!
//! ```rust
//! use justnotes_index::{ContentIndex, FlatBranch, ResourceTypeSemester, RouteFamily};
//! use justnotes_resolve::{resolve, NotFound};
//!
//! let index = ContentIndex::new().with_branch(
//!     "cse",
//!     FlatBranch::new("Computer Science", "CSE").with_semester(3, ResourceTypeSemester::default()),
//! );
//!
//! let node = resolve(&index, RouteFamily::Semester, &["cse", "3"]).unwrap();
//! assert_eq!(node.path().to_string(), "/cse/3");
//!
//! let missing = resolve(&index, RouteFamily::Semester, &["cse", "5"]);
//! assert_eq!(missing.unwrap_err(), NotFound);
//! ```

#![warn(missing_docs)]

pub mod enumerator;
pub mod node;
pub mod resolver;

// Re-exports
pub use enumerator::{enumerate, EnumerationPolicy, Enumerator};
pub use node::{
    BranchNode, ResolvedNode, ResourceListNode, SchemeBranchNode, SchemeNode, SchemeSemesterNode,
    SemesterNode, SubjectNode,
};
pub use resolver::{resolve, NotFound, Resolver};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
