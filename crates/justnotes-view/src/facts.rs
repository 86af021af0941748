//! Display facts
//!
//! Plain serializable data a renderer needs for one page. Nothing here
//! borrows from the index.

use justnotes_index::{ResourceType, RouteFamily};
use serde::Serialize;

/// Facts for one page, tagged by page kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum DisplayFacts {
    /// Site landing page
    Home(HomeFacts),
    /// `/{branch}`
    Branch(BranchFacts),
    /// `/{branch}/{sem}`
    Semester(SemesterFacts),
    /// `/{branch}/{sem}/{type}`
    ResourceType(ResourceListFacts),
    /// `/{scheme}`
    Scheme(SchemeFacts),
    /// `/{scheme}/{branch}`
    SchemeBranch(SchemeBranchFacts),
    /// `/{scheme}/{branch}/{sem}`
    SchemeSemester(SchemeSemesterFacts),
    /// `/{scheme}/{branch}/{sem}/{code}`
    Subject(SubjectFacts),
}

impl DisplayFacts {
    /// Route family of the page; `None` for the home page
    #[must_use]
    pub const fn family(&self) -> Option<RouteFamily> {
        match self {
            Self::Home(_) => None,
            Self::Branch(_) => Some(RouteFamily::Branch),
            Self::Semester(_) => Some(RouteFamily::Semester),
            Self::ResourceType(_) => Some(RouteFamily::ResourceType),
            Self::Scheme(_) => Some(RouteFamily::Scheme),
            Self::SchemeBranch(_) => Some(RouteFamily::SchemeBranch),
            Self::SchemeSemester(_) => Some(RouteFamily::SchemeSemester),
            Self::Subject(_) => Some(RouteFamily::Subject),
        }
    }

    /// Page metadata
    #[must_use]
    pub fn meta(&self) -> &PageMeta {
        match self {
            Self::Home(f) => &f.meta,
            Self::Branch(f) => &f.meta,
            Self::Semester(f) => &f.meta,
            Self::ResourceType(f) => &f.meta,
            Self::Scheme(f) => &f.meta,
            Self::SchemeBranch(f) => &f.meta,
            Self::SchemeSemester(f) => &f.meta,
            Self::Subject(f) => &f.meta,
        }
    }

    /// Breadcrumb chain, Home first
    #[must_use]
    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        match self {
            Self::Home(f) => &f.breadcrumbs,
            Self::Branch(f) => &f.breadcrumbs,
            Self::Semester(f) => &f.breadcrumbs,
            Self::ResourceType(f) => &f.breadcrumbs,
            Self::Scheme(f) => &f.breadcrumbs,
            Self::SchemeBranch(f) => &f.breadcrumbs,
            Self::SchemeSemester(f) => &f.breadcrumbs,
            Self::Subject(f) => &f.breadcrumbs,
        }
    }
}

/// Title, description, canonical path and keywords of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Page title, without the site suffix
    pub title: String,
    /// Meta description
    pub description: String,
    /// Canonical path, e.g. `/2022/cse/3/bcs301`
    pub canonical: String,
    /// Search keywords; empty for most pages
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// One breadcrumb link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Link text
    pub label: String,
    /// Link target
    pub href: String,
}

impl Breadcrumb {
    /// Create crumb
    #[inline]
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// The `Home` crumb every chain starts with
    #[inline]
    #[must_use]
    pub fn home() -> Self {
        Self::new("Home", "/")
    }
}

/// One resource row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRow {
    /// `"01"`, `"02"`, ...
    pub position: String,
    /// Resource title
    pub title: String,
    /// Opaque link
    pub url: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered display tags
    pub tags: Vec<String>,
}

/// Shown instead of rows when a list is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyState {
    /// Notice text
    pub message: String,
    /// Contribution link
    pub contribute_url: String,
}

/// Semester tile on a branch page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SemesterCell {
    /// Semester number
    pub number: u8,
    /// `Semester {n}`
    pub label: String,
    /// Link target
    pub href: String,
    /// Whether the branch defines this semester
    pub defined: bool,
}

/// Home page: scheme directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Just `Home`
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Configured scheme listings
    pub schemes: Vec<SchemeEntry>,
}

/// Scheme entry on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeEntry {
    /// Scheme id
    pub id: String,
    /// `{id} Scheme`
    pub label: String,
    /// Link target
    pub href: String,
    /// Status badge
    pub status: String,
    /// Description
    pub description: String,
    /// Whether the index holds this scheme
    pub available: bool,
}

/// Flat branch page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Home, branch
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Branch code
    pub code: String,
    /// Full label
    pub label: String,
    /// Short label
    pub short_label: String,
    /// Semesters `1..=8`
    pub semesters: Vec<SemesterCell>,
}

/// Resource type card on a semester page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCard {
    /// Type
    pub kind: ResourceType,
    /// Type label
    pub label: String,
    /// Card description
    pub description: String,
    /// Link to the type page
    pub href: String,
    /// Number of resources
    pub count: usize,
    /// `"3 files available"`; absent for zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_label: Option<String>,
}

/// Flat semester page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Home, branch, semester
    pub breadcrumbs: Vec<Breadcrumb>,
    /// `CSE Semester 3`
    pub heading: String,
    /// Semester key
    pub semester: String,
    /// One card per resource type
    pub cards: Vec<ResourceCard>,
}

/// Flat resource list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceListFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Home, branch, semester, type
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Type
    pub kind: ResourceType,
    /// Type label
    pub label: String,
    /// Type description
    pub description: String,
    /// `Computer Science — Semester 3`
    pub heading: String,
    /// Number of resources
    pub count: usize,
    /// `"3 files"`; absent for zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_label: Option<String>,
    /// Rows in index order
    pub rows: Vec<ResourceRow>,
    /// Present when there are no rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

/// Branch entry on a scheme page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchEntry {
    /// Branch code
    pub code: String,
    /// Full label
    pub label: String,
    /// Link target
    pub href: String,
    /// Number of defined semesters
    pub semester_count: usize,
    /// `CSE · 2 semesters available`
    pub caption: String,
}

/// Scheme page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemeFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Home, scheme
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Scheme id
    pub id: String,
    /// `{id} Scheme`
    pub label: String,
    /// Branches in index order
    pub branches: Vec<BranchEntry>,
}

/// Scheme branch page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeBranchFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Home, scheme, branch
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Scheme id
    pub scheme: String,
    /// Branch code
    pub code: String,
    /// Full label
    pub label: String,
    /// Short label, or the upper-cased code
    pub short_label: String,
    /// Semesters `1..=8`
    pub semesters: Vec<SemesterCell>,
}

/// Subject entry on a scheme semester page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectEntry {
    /// Subject code as stored
    pub code: String,
    /// Subject name
    pub name: String,
    /// Credits
    pub credits: f64,
    /// Link target
    pub href: String,
    /// Resources across all five sections
    pub resource_count: usize,
    /// `"3 files available"`; absent for zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_label: Option<String>,
}

/// Scheme semester page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeSemesterFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Home, scheme, branch, semester
    pub breadcrumbs: Vec<Breadcrumb>,
    /// `CSE Semester 3`
    pub heading: String,
    /// Semester key
    pub semester: String,
    /// Subjects in index order
    pub subjects: Vec<SubjectEntry>,
}

/// In-page jump link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionLink {
    /// Anchor id
    pub id: String,
    /// Link text
    pub label: String,
}

/// One of the five subject page sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionFacts {
    /// Anchor id
    pub id: String,
    /// Heading
    pub heading: String,
    /// Number of resources
    pub count: usize,
    /// `"3 files"`; absent for zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_label: Option<String>,
    /// Rows in index order
    pub rows: Vec<ResourceRow>,
    /// Present when there are no rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<EmptyState>,
}

/// Subject page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectFacts {
    /// Page metadata
    pub meta: PageMeta,
    /// Home, scheme, branch, semester, subject
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Subject code as stored
    pub code: String,
    /// Subject name
    pub name: String,
    /// Credits
    pub credits: f64,
    /// Header chips: scheme, semester, branch, credits
    pub chips: Vec<String>,
    /// Section jump list
    pub jump: Vec<SectionLink>,
    /// The five sections in page order
    pub sections: Vec<SectionFacts>,
}
