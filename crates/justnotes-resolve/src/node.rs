//! Resolved content nodes
//!
//! Every node borrows from the index it was resolved against. Segment values
//! are the index's own keys, so paths rebuilt from a node use the index's
//! exact casing (the subject key is the lowercase one).

use justnotes_index::{
    FlatBranch, Resource, ResourceType, ResourceTypeSemester, RouteFamily, RoutePath, Scheme,
    SchemeBranch, Subject, SubjectSemester,
};

/// Flat-shape branch
#[derive(Debug, Clone, Copy)]
pub struct BranchNode<'a> {
    /// Branch code as keyed in the index
    pub code: &'a str,
    /// Branch entry
    pub branch: &'a FlatBranch,
}

impl BranchNode<'_> {
    /// Canonical path, `/{branch}`
    #[must_use]
    pub fn path(&self) -> RoutePath {
        RoutePath::root().child(self.code)
    }
}

/// Flat-shape semester
#[derive(Debug, Clone, Copy)]
pub struct SemesterNode<'a> {
    /// Owning branch
    pub branch: BranchNode<'a>,
    /// Semester key as keyed in the index
    pub sem: &'a str,
    /// Semester entry
    pub semester: &'a ResourceTypeSemester,
}

impl SemesterNode<'_> {
    /// Canonical path, `/{branch}/{sem}`
    #[must_use]
    pub fn path(&self) -> RoutePath {
        self.branch.path().child(self.sem)
    }
}

/// Resource list of one type within a flat-shape semester
#[derive(Debug, Clone, Copy)]
pub struct ResourceListNode<'a> {
    /// Owning semester
    pub semester: SemesterNode<'a>,
    /// Selected type
    pub kind: ResourceType,
    /// Resources in index order
    pub items: &'a [Resource],
}

impl ResourceListNode<'_> {
    /// Canonical path, `/{branch}/{sem}/{type}`
    #[must_use]
    pub fn path(&self) -> RoutePath {
        self.semester.path().child(self.kind.token())
    }
}

/// Scheme with its branches
#[derive(Debug, Clone, Copy)]
pub struct SchemeNode<'a> {
    /// Scheme id as keyed in the index
    pub id: &'a str,
    /// Scheme entry
    pub scheme: &'a Scheme,
}

impl SchemeNode<'_> {
    /// Canonical path, `/{scheme}`
    #[must_use]
    pub fn path(&self) -> RoutePath {
        RoutePath::root().child(self.id)
    }
}

/// Branch within a scheme
#[derive(Debug, Clone, Copy)]
pub struct SchemeBranchNode<'a> {
    /// Owning scheme
    pub scheme: SchemeNode<'a>,
    /// Branch code as keyed in the index
    pub code: &'a str,
    /// Branch entry
    pub branch: &'a SchemeBranch,
}

impl SchemeBranchNode<'_> {
    /// Canonical path, `/{scheme}/{branch}`
    #[must_use]
    pub fn path(&self) -> RoutePath {
        self.scheme.path().child(self.code)
    }
}

/// Semester within a scheme branch
#[derive(Debug, Clone, Copy)]
pub struct SchemeSemesterNode<'a> {
    /// Owning branch
    pub branch: SchemeBranchNode<'a>,
    /// Semester key as keyed in the index
    pub sem: &'a str,
    /// Semester entry
    pub semester: &'a SubjectSemester,
}

impl SchemeSemesterNode<'_> {
    /// Canonical path, `/{scheme}/{branch}/{sem}`
    #[must_use]
    pub fn path(&self) -> RoutePath {
        self.branch.path().child(self.sem)
    }
}

/// Subject within a scheme semester
#[derive(Debug, Clone, Copy)]
pub struct SubjectNode<'a> {
    /// Owning semester
    pub semester: SchemeSemesterNode<'a>,
    /// Subject key (lowercase code) as keyed in the index
    pub key: &'a str,
    /// Subject entry
    pub subject: &'a Subject,
}

impl SubjectNode<'_> {
    /// Canonical path, `/{scheme}/{branch}/{sem}/{code}`
    #[must_use]
    pub fn path(&self) -> RoutePath {
        self.semester.path().child(self.key)
    }
}

/// Result of a successful resolution, one variant per route family
#[derive(Debug, Clone, Copy)]
pub enum ResolvedNode<'a> {
    /// `/{branch}`
    Branch(BranchNode<'a>),
    /// `/{branch}/{sem}`
    Semester(SemesterNode<'a>),
    /// `/{branch}/{sem}/{type}`
    ResourceList(ResourceListNode<'a>),
    /// `/{scheme}`
    Scheme(SchemeNode<'a>),
    /// `/{scheme}/{branch}`
    SchemeBranch(SchemeBranchNode<'a>),
    /// `/{scheme}/{branch}/{sem}`
    SchemeSemester(SchemeSemesterNode<'a>),
    /// `/{scheme}/{branch}/{sem}/{code}`
    Subject(SubjectNode<'a>),
}

impl ResolvedNode<'_> {
    /// Family this node was resolved through
    #[must_use]
    pub const fn family(&self) -> RouteFamily {
        match self {
            Self::Branch(_) => RouteFamily::Branch,
            Self::Semester(_) => RouteFamily::Semester,
            Self::ResourceList(_) => RouteFamily::ResourceType,
            Self::Scheme(_) => RouteFamily::Scheme,
            Self::SchemeBranch(_) => RouteFamily::SchemeBranch,
            Self::SchemeSemester(_) => RouteFamily::SchemeSemester,
            Self::Subject(_) => RouteFamily::Subject,
        }
    }

    /// Canonical path of the node
    #[must_use]
    pub fn path(&self) -> RoutePath {
        match self {
            Self::Branch(n) => n.path(),
            Self::Semester(n) => n.path(),
            Self::ResourceList(n) => n.path(),
            Self::Scheme(n) => n.path(),
            Self::SchemeBranch(n) => n.path(),
            Self::SchemeSemester(n) => n.path(),
            Self::Subject(n) => n.path(),
        }
    }
}
