//! Catalog facade
//!
//! Owns one index and its configuration; maps request paths to route
//! families, resolves and projects pages, and generates every page of a
//! static build.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use justnotes_index::{is_routable_key, ContentIndex, IndexLoader, ParamSet, RouteFamily, RoutePath};
use justnotes_resolve::{Enumerator, NotFound, ResolvedNode, Resolver};
use justnotes_view::{DisplayFacts, HomeFacts, Projector};
use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

/// One generated page of a static build
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPage {
    /// Route family
    pub family: RouteFamily,
    /// Enumerated parameters
    pub params: ParamSet,
    /// Concrete path
    pub path: String,
    /// Projected facts
    pub facts: DisplayFacts,
}

/// Read-only catalog over one content index
#[derive(Debug, Clone)]
pub struct Catalog {
    index: ContentIndex,
    config: CatalogConfig,
}

impl Catalog {
    /// Create catalog from an in-memory index
    #[must_use]
    pub fn new(index: ContentIndex, config: CatalogConfig) -> Self {
        Self { index, config }
    }

    /// Load the index at `path` and build a catalog
    ///
    /// # Errors
    /// Returns error if the index cannot be read or parsed, or fails
    /// validation with `config.strict` set
    pub fn load(path: impl AsRef<Path>, config: CatalogConfig) -> Result<Self, CatalogError> {
        let index = IndexLoader::new()
            .strict(config.strict)
            .load_path(path)?;
        Ok(Self::new(index, config))
    }

    /// Content index
    #[inline]
    #[must_use]
    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Resolver over this catalog's index
    #[inline]
    #[must_use]
    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.index)
    }

    /// Enumerator using the configured policy
    #[inline]
    #[must_use]
    pub fn enumerator(&self) -> Enumerator<'_> {
        Enumerator::new(&self.index).with_policy(self.config.enumeration)
    }

    /// Projector using the configured site wording
    #[inline]
    #[must_use]
    pub fn projector(&self) -> Projector<'_> {
        Projector::new(&self.config.site)
    }

    /// Route family that serves `path`
    ///
    /// Depth picks the candidates; a first segment naming a scheme selects
    /// the scheme shape, anything else the flat shape. Four segments are
    /// always a subject. Returns `None` for the root and for deeper paths.
    #[must_use]
    pub fn route(&self, path: &RoutePath) -> Option<RouteFamily> {
        let first = path.iter().next()?;
        let scheme = self.index.scheme(first).is_some();
        match (path.len(), scheme) {
            (1, true) => Some(RouteFamily::Scheme),
            (1, false) => Some(RouteFamily::Branch),
            (2, true) => Some(RouteFamily::SchemeBranch),
            (2, false) => Some(RouteFamily::Semester),
            (3, true) => Some(RouteFamily::SchemeSemester),
            (3, false) => Some(RouteFamily::ResourceType),
            (4, _) => Some(RouteFamily::Subject),
            _ => None,
        }
    }

    /// Route and resolve `path`
    ///
    /// # Errors
    /// Returns [`NotFound`] if no family serves the path or it does not resolve
    pub fn resolve(&self, path: &RoutePath) -> Result<ResolvedNode<'_>, NotFound> {
        let family = self.route(path).ok_or(NotFound)?;
        self.resolver().resolve(family, path.segments())
    }

    /// Display facts of the page at `path` (`/` is the home page)
    ///
    /// # Errors
    /// Returns error if the path is malformed or nothing lives there
    pub fn page(&self, path: &str) -> Result<DisplayFacts, CatalogError> {
        let path: RoutePath = path.parse()?;
        if path.is_empty() {
            return Ok(DisplayFacts::Home(self.home()));
        }

        match self.resolve(&path) {
            Ok(node) => Ok(self.projector().project(&node)),
            Err(not_found) => {
                tracing::debug!("No page at {}", path);
                Err(not_found.into())
            }
        }
    }

    /// Home page facts
    #[must_use]
    pub fn home(&self) -> HomeFacts {
        self.projector().home(&self.index)
    }

    /// Every enumerated route, families in order
    #[must_use]
    pub fn routes(&self) -> Vec<(RouteFamily, ParamSet)> {
        self.enumerator().enumerate_all()
    }

    /// Enumerated routes of one family
    #[must_use]
    pub fn routes_for(&self, family: RouteFamily) -> Vec<ParamSet> {
        self.enumerator().enumerate(family)
    }

    /// Whether a request for `path` reaches a page of `family`
    ///
    /// False for pages built from keys that are not single segments, and for
    /// flat pages under a branch code that a scheme id shadows.
    #[must_use]
    pub fn serves(&self, family: RouteFamily, path: &RoutePath) -> bool {
        path.iter().all(is_routable_key) && self.route(path) == Some(family)
    }

    /// Resolve and project every enumerated route in parallel
    ///
    /// Routes that do not resolve (overgenerated semesters) are skipped, as
    /// are resolved pages no request could reach. Output order equals
    /// enumeration order.
    #[must_use]
    pub fn generate_all(&self) -> Vec<GeneratedPage> {
        let routes = self.routes();
        let total = routes.len();
        let resolver = self.resolver();
        let projector = self.projector();

        let pages: Vec<GeneratedPage> = routes
            .into_par_iter()
            .filter_map(|(family, params)| {
                let node = resolver.resolve_params(family, &params).ok()?;
                let path = node.path();
                if !self.serves(family, &path) {
                    tracing::warn!("Skipping unreachable {} page {}", family, path);
                    return None;
                }
                Some(GeneratedPage {
                    family,
                    path: path.to_string(),
                    facts: projector.project(&node),
                    params,
                })
            })
            .collect();

        tracing::info!(
            "Generated {} pages from {} routes ({} skipped)",
            pages.len(),
            total,
            total - pages.len()
        );
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use justnotes_resolve::EnumerationPolicy;
    use justnotes_test_utils::{minimal_index, sample_index};
    use pretty_assertions::assert_eq;

    fn catalog() -> Catalog {
        Catalog::new(sample_index(), CatalogConfig::default())
    }

    fn route(catalog: &Catalog, path: &str) -> Option<RouteFamily> {
        catalog.route(&path.parse().unwrap())
    }

    #[test]
    fn routes_by_depth_and_scheme() {
        let catalog = catalog();
        assert_eq!(route(&catalog, "/"), None);
        assert_eq!(route(&catalog, "/cse"), Some(RouteFamily::Branch));
        assert_eq!(route(&catalog, "/2022"), Some(RouteFamily::Scheme));
        assert_eq!(route(&catalog, "/cse/3"), Some(RouteFamily::Semester));
        assert_eq!(route(&catalog, "/2022/cse"), Some(RouteFamily::SchemeBranch));
        assert_eq!(route(&catalog, "/cse/3/notes"), Some(RouteFamily::ResourceType));
        assert_eq!(route(&catalog, "/2022/cse/3"), Some(RouteFamily::SchemeSemester));
        assert_eq!(route(&catalog, "/2022/cse/3/bcs301"), Some(RouteFamily::Subject));
        assert_eq!(route(&catalog, "/2022/cse/3/bcs301/x"), None);
    }

    #[test]
    fn unknown_first_segment_routes_flat() {
        let catalog = catalog();
        assert_eq!(route(&catalog, "/2019"), Some(RouteFamily::Branch));
        assert!(catalog.page("/2019").unwrap_err().is_not_found());
    }

    #[test]
    fn page_resolves_and_projects() {
        let catalog = catalog();
        let facts = catalog.page("/cse/3/pyqs").unwrap();
        assert_eq!(facts.family(), Some(RouteFamily::ResourceType));
        assert_eq!(facts.meta().canonical, "/cse/3/pyqs");
    }

    #[test]
    fn root_is_home() {
        let facts = catalog().page("/").unwrap();
        assert_eq!(facts.family(), None);
        assert_eq!(facts.breadcrumbs().len(), 1);
    }

    #[test]
    fn malformed_path_is_route_error() {
        let err = catalog().page("/cse//3").unwrap_err();
        assert!(matches!(err, CatalogError::Route(_)));
    }

    #[test]
    fn missing_semester_is_not_found() {
        assert!(catalog().page("/cse/7").unwrap_err().is_not_found());
    }

    #[test]
    fn generate_all_skips_overgenerated_and_keeps_order() {
        let catalog = catalog();
        let pages = catalog.generate_all();

        let expected: Vec<String> = catalog
            .routes()
            .iter()
            .filter(|(family, params)| catalog.resolver().resolve_params(*family, params).is_ok())
            .map(|(_, params)| params.to_path().to_string())
            .collect();
        let actual: Vec<String> = pages.iter().map(|p| p.path.clone()).collect();
        assert_eq!(actual, expected);
        assert!(pages.iter().any(|p| p.path == "/2022/cse/3/bcs301"));
        assert!(!pages.iter().any(|p| p.path == "/cse/1"));
    }

    #[test]
    fn defined_only_generates_everything_enumerated() {
        let config = CatalogConfig::new().with_enumeration(EnumerationPolicy::DefinedOnly);
        let catalog = Catalog::new(sample_index(), config);
        assert_eq!(catalog.generate_all().len(), catalog.routes().len());
    }

    #[test]
    fn shadowed_branch_pages_are_not_generated() {
        let index = sample_index().with_branch(
            "2022",
            justnotes_index::FlatBranch::new("Twenty Twenty-Two", "2022")
                .with_semester(3, justnotes_index::ResourceTypeSemester::default()),
        );
        let catalog = Catalog::new(index, CatalogConfig::default());
        let pages = catalog.generate_all();

        let at_2022: Vec<RouteFamily> = pages
            .iter()
            .filter(|p| p.path == "/2022")
            .map(|p| p.family)
            .collect();
        assert_eq!(at_2022, vec![RouteFamily::Scheme]);
        assert!(!pages
            .iter()
            .any(|p| p.path.starts_with("/2022/") && p.family == RouteFamily::Semester));
        for page in &pages {
            assert_eq!(catalog.page(&page.path).unwrap(), page.facts);
        }
    }

    #[test]
    fn unroutable_keys_are_not_generated() {
        let index = sample_index().with_branch(
            "../escaped",
            justnotes_index::FlatBranch::new("Escaped", "ESC"),
        );
        let catalog = Catalog::new(index, CatalogConfig::default());
        assert!(catalog.generate_all().iter().all(|p| !p.path.contains("..")));
        assert!(!catalog.serves(RouteFamily::Branch, &RoutePath::root().child("../escaped")));
        assert!(catalog.serves(RouteFamily::Branch, &RoutePath::root().child("cse")));
    }

    #[test]
    fn flat_only_catalog() {
        let catalog = Catalog::new(minimal_index(), CatalogConfig::default());
        assert!(catalog.routes_for(RouteFamily::Subject).is_empty());
        assert_eq!(route(&catalog, "/2022"), Some(RouteFamily::Branch));
        assert!(catalog.page("/2022/cse/3/bcs301").unwrap_err().is_not_found());
    }
}
