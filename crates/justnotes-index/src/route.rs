//! Route vocabulary
//!
//! - [`RouteFamily`]: one page kind with a fixed, ordered list of segment names
//! - [`RoutePath`]: URL path as segments (`/2022/cse/3/bcs301`)
//! - [`ParamSet`]: segment-name → value mapping for one concrete page

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Semester numbers assumed by convention
pub const SEMESTERS: RangeInclusive<u8> = 1..=8;

/// Parse a semester key, accepting only canonical "1".."8"
#[must_use]
pub fn semester_number(key: &str) -> Option<u8> {
    let number: u8 = key.parse().ok()?;
    (SEMESTERS.contains(&number) && number.to_string() == key).then_some(number)
}

/// Page kind, identified by the shape of its route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteFamily {
    /// `/{branch}` over the flat shape
    Branch,
    /// `/{branch}/{sem}` over the flat shape
    Semester,
    /// `/{branch}/{sem}/{type}` over the flat shape
    ResourceType,
    /// `/{scheme}`
    Scheme,
    /// `/{scheme}/{branch}`
    SchemeBranch,
    /// `/{scheme}/{branch}/{sem}`
    SchemeSemester,
    /// `/{scheme}/{branch}/{sem}/{code}`
    Subject,
}

impl RouteFamily {
    /// All families in enumeration order
    pub const ALL: [Self; 7] = [
        Self::Branch,
        Self::Semester,
        Self::ResourceType,
        Self::Scheme,
        Self::SchemeBranch,
        Self::SchemeSemester,
        Self::Subject,
    ];

    /// Segment names, outermost first
    #[must_use]
    pub const fn segment_names(self) -> &'static [&'static str] {
        match self {
            Self::Branch => &["branch"],
            Self::Semester => &["branch", "sem"],
            Self::ResourceType => &["branch", "sem", "type"],
            Self::Scheme => &["scheme"],
            Self::SchemeBranch => &["scheme", "branch"],
            Self::SchemeSemester => &["scheme", "branch", "sem"],
            Self::Subject => &["scheme", "branch", "sem", "code"],
        }
    }

    /// Number of route segments
    #[inline]
    #[must_use]
    pub const fn depth(self) -> usize {
        self.segment_names().len()
    }

    /// Whether the family reads the scheme-indexed shape
    #[inline]
    #[must_use]
    pub const fn is_scheme_shape(self) -> bool {
        matches!(
            self,
            Self::Scheme | Self::SchemeBranch | Self::SchemeSemester | Self::Subject
        )
    }

    /// Stable name, used on the command line
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::Semester => "semester",
            Self::ResourceType => "resource-type",
            Self::Scheme => "scheme",
            Self::SchemeBranch => "scheme-branch",
            Self::SchemeSemester => "scheme-semester",
            Self::Subject => "subject",
        }
    }
}

impl Display for RouteFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RouteFamily {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.name() == s)
            .ok_or_else(|| RouteError::UnknownFamily(s.to_string()))
    }
}

/// URL path as a list of segments
///
/// # Examples
/// - `[]` → `/`
/// - `["cse", "3", "notes"]` → `/cse/3/notes`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RoutePath(Vec<String>);

impl RoutePath {
    /// Create path from segments
    #[inline]
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Site root
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Get path segments
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Get number of segments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if path is the root
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a segment, returning new path
    #[inline]
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut new = self.clone();
        new.0.push(segment.into());
        new
    }

    /// Iterator over segments from root to leaf
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Display for RoutePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0.join("/"))
    }
}

impl FromStr for RoutePath {
    type Err = RouteError;

    /// Parse `/a/b/c`; one leading and one trailing slash are optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix('/').unwrap_or(s);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        let segments = trimmed
            .split('/')
            .map(|seg| {
                if seg.is_empty() {
                    Err(RouteError::EmptySegment)
                } else {
                    Ok(seg.to_string())
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self(segments))
    }
}

impl From<Vec<String>> for RoutePath {
    fn from(segments: Vec<String>) -> Self {
        Self(segments)
    }
}

impl Serialize for RoutePath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Route parameters for one page
///
/// Serializes as a plain object, e.g. `{"branch":"cse","sem":"3"}`, in
/// segment order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet(IndexMap<String, String>);

impl ParamSet {
    /// Build from a family and its segment values
    ///
    /// # Errors
    /// Returns error if the number of values does not match the family depth
    pub fn for_family<I, V>(family: RouteFamily, values: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != family.depth() {
            return Err(RouteError::SegmentCount {
                family,
                expected: family.depth(),
                actual: values.len(),
            });
        }

        Ok(Self(
            family
                .segment_names()
                .iter()
                .map(|name| (*name).to_string())
                .zip(values)
                .collect(),
        ))
    }

    /// Value of a named segment
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Segment values in route order
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.0.values().map(String::as_str).collect()
    }

    /// Number of parameters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concrete path of the page
    #[must_use]
    pub fn to_path(&self) -> RoutePath {
        RoutePath::new(self.0.values().cloned().collect())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Errors related to routes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Empty segment in path
    #[error("path contains empty segment")]
    EmptySegment,

    /// Unknown route family name
    #[error("unknown route family: {0}")]
    UnknownFamily(String),

    /// Wrong number of segment values for a family
    #[error("{family} routes take {expected} segments, got {actual}")]
    SegmentCount {
        /// Target family
        family: RouteFamily,
        /// Segments the family takes
        expected: usize,
        /// Segments supplied
        actual: usize,
    },
}
