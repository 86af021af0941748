//! Path resolver
//!
//! Walks the index one level per segment. Any missing level, unknown token
//! or wrong segment count is [`NotFound`]; nothing partial is returned and
//! nothing panics, however the index is shaped.

use crate::node::{
    BranchNode, ResolvedNode, ResourceListNode, SchemeBranchNode, SchemeNode, SchemeSemesterNode,
    SemesterNode, SubjectNode,
};
use justnotes_index::{ContentIndex, ParamSet, ResourceType, RouteFamily};

/// The only resolution failure; deliberately carries no detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("content not found")]
pub struct NotFound;

/// Resolve `segments` through `family`
///
/// # Errors
/// Returns [`NotFound`] if any segment fails to resolve
pub fn resolve<'a, S: AsRef<str>>(
    index: &'a ContentIndex,
    family: RouteFamily,
    segments: &[S],
) -> Result<ResolvedNode<'a>, NotFound> {
    Resolver::new(index).resolve(family, segments)
}

/// Read-only resolver bound to one index
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a ContentIndex,
}

impl<'a> Resolver<'a> {
    /// Create resolver over an index
    #[inline]
    #[must_use]
    pub fn new(index: &'a ContentIndex) -> Self {
        Self { index }
    }

    /// Index this resolver reads
    #[inline]
    #[must_use]
    pub fn index(&self) -> &'a ContentIndex {
        self.index
    }

    /// Resolve by family and ordered segment values
    ///
    /// # Errors
    /// Returns [`NotFound`] on a wrong segment count or any unresolved segment
    pub fn resolve<S: AsRef<str>>(
        &self,
        family: RouteFamily,
        segments: &[S],
    ) -> Result<ResolvedNode<'a>, NotFound> {
        let segs: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();

        match (family, segs.as_slice()) {
            (RouteFamily::Branch, [branch]) => self.branch(branch).map(ResolvedNode::Branch),
            (RouteFamily::Semester, [branch, sem]) => {
                self.semester(branch, sem).map(ResolvedNode::Semester)
            }
            (RouteFamily::ResourceType, [branch, sem, kind]) => self
                .resource_list(branch, sem, kind)
                .map(ResolvedNode::ResourceList),
            (RouteFamily::Scheme, [scheme]) => self.scheme(scheme).map(ResolvedNode::Scheme),
            (RouteFamily::SchemeBranch, [scheme, branch]) => self
                .scheme_branch(scheme, branch)
                .map(ResolvedNode::SchemeBranch),
            (RouteFamily::SchemeSemester, [scheme, branch, sem]) => self
                .scheme_semester(scheme, branch, sem)
                .map(ResolvedNode::SchemeSemester),
            (RouteFamily::Subject, [scheme, branch, sem, code]) => self
                .subject(scheme, branch, sem, code)
                .map(ResolvedNode::Subject),
            _ => Err(NotFound),
        }
    }

    /// Resolve an enumerated parameter set
    ///
    /// # Errors
    /// Returns [`NotFound`] if the set does not resolve through `family`
    pub fn resolve_params(
        &self,
        family: RouteFamily,
        params: &ParamSet,
    ) -> Result<ResolvedNode<'a>, NotFound> {
        self.resolve(family, &params.values())
    }

    /// `(branch)` over the flat shape
    ///
    /// # Errors
    /// Returns [`NotFound`] if the index has no flat shape or no such branch
    pub fn branch(&self, branch: &str) -> Result<BranchNode<'a>, NotFound> {
        let (code, entry) = self
            .index
            .branches()
            .and_then(|branches| branches.get_key_value(branch))
            .ok_or(NotFound)?;
        Ok(BranchNode {
            code,
            branch: entry,
        })
    }

    /// `(branch, sem)` over the flat shape
    ///
    /// # Errors
    /// Returns [`NotFound`] if the branch or semester is absent
    pub fn semester(&self, branch: &str, sem: &str) -> Result<SemesterNode<'a>, NotFound> {
        let branch = self.branch(branch)?;
        let (sem, semester) = branch.branch.semesters.get_key_value(sem).ok_or(NotFound)?;
        Ok(SemesterNode {
            branch,
            sem,
            semester,
        })
    }

    /// `(branch, sem, type)` over the flat shape
    ///
    /// # Errors
    /// Returns [`NotFound`] if `kind` is not `notes`, `pyqs` or
    /// `question-banks`, or the semester does not resolve
    pub fn resource_list(
        &self,
        branch: &str,
        sem: &str,
        kind: &str,
    ) -> Result<ResourceListNode<'a>, NotFound> {
        let kind: ResourceType = kind.parse().map_err(|_| NotFound)?;
        let semester = self.semester(branch, sem)?;
        Ok(ResourceListNode {
            semester,
            kind,
            items: kind.select(semester.semester),
        })
    }

    /// `(scheme)` over the scheme shape
    ///
    /// # Errors
    /// Returns [`NotFound`] if the index has no scheme shape or no such scheme
    pub fn scheme(&self, scheme: &str) -> Result<SchemeNode<'a>, NotFound> {
        let (id, entry) = self
            .index
            .schemes()
            .and_then(|schemes| schemes.get_key_value(scheme))
            .ok_or(NotFound)?;
        Ok(SchemeNode { id, scheme: entry })
    }

    /// `(scheme, branch)` over the scheme shape
    ///
    /// # Errors
    /// Returns [`NotFound`] if the scheme or branch is absent
    pub fn scheme_branch(&self, scheme: &str, branch: &str) -> Result<SchemeBranchNode<'a>, NotFound> {
        let scheme = self.scheme(scheme)?;
        let (code, entry) = scheme.scheme.branches.get_key_value(branch).ok_or(NotFound)?;
        Ok(SchemeBranchNode {
            scheme,
            code,
            branch: entry,
        })
    }

    /// `(scheme, branch, sem)` over the scheme shape
    ///
    /// # Errors
    /// Returns [`NotFound`] if any level is absent
    pub fn scheme_semester(
        &self,
        scheme: &str,
        branch: &str,
        sem: &str,
    ) -> Result<SchemeSemesterNode<'a>, NotFound> {
        let branch = self.scheme_branch(scheme, branch)?;
        let (sem, semester) = branch.branch.semesters.get_key_value(sem).ok_or(NotFound)?;
        Ok(SchemeSemesterNode {
            branch,
            sem,
            semester,
        })
    }

    /// `(scheme, branch, sem, code)` over the scheme shape
    ///
    /// Only `code` is case-insensitive; it is lowercased before lookup.
    ///
    /// # Errors
    /// Returns [`NotFound`] if any of the four levels is absent
    pub fn subject(
        &self,
        scheme: &str,
        branch: &str,
        sem: &str,
        code: &str,
    ) -> Result<SubjectNode<'a>, NotFound> {
        let semester = self.scheme_semester(scheme, branch, sem)?;
        let (key, subject) = semester
            .semester
            .subjects
            .get_key_value(code.to_lowercase().as_str())
            .ok_or(NotFound)?;
        Ok(SubjectNode {
            semester,
            key,
            subject,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use justnotes_index::{
        FlatBranch, Resource, ResourceTypeSemester, Scheme, SchemeBranch, Subject, SubjectSemester,
    };

    fn flat_index() -> ContentIndex {
        ContentIndex::new().with_branch(
            "cse",
            FlatBranch::new("Computer Science", "CSE").with_semester(
                3,
                ResourceTypeSemester {
                    notes: Vec::new(),
                    pyqs: vec![Resource::new("Jan 2023 Paper", "http://x/p.pdf").with_exam("Jan", 2023)],
                    question_banks: Vec::new(),
                },
            ),
        )
    }

    fn scheme_index() -> ContentIndex {
        let semester = SubjectSemester::default().with_subject(Subject::new("CS301", "Data Structures", 4.0));
        ContentIndex::new().with_scheme(
            "2022",
            Scheme::new().with_branch(
                "cse",
                SchemeBranch::new("Computer Science", "CSE").with_semester(3, semester),
            ),
        )
    }

    #[test]
    fn resolves_branch() {
        let index = flat_index();
        let node = Resolver::new(&index).branch("cse").unwrap();
        assert_eq!(node.code, "cse");
        assert_eq!(node.branch.label, "Computer Science");
    }

    #[test]
    fn branch_lookup_is_case_sensitive() {
        let index = flat_index();
        assert_eq!(Resolver::new(&index).branch("CSE").unwrap_err(), NotFound);
    }

    #[test]
    fn missing_semester_is_not_found() {
        let index = flat_index();
        let resolver = Resolver::new(&index);
        assert!(resolver.semester("cse", "3").is_ok());
        assert!(resolver.semester("cse", "4").is_err());
        assert!(resolver.semester("ece", "3").is_err());
    }

    #[test]
    fn resource_list_maps_type_token() {
        let index = flat_index();
        let resolver = Resolver::new(&index);

        let pyqs = resolver.resource_list("cse", "3", "pyqs").unwrap();
        assert_eq!(pyqs.kind, ResourceType::Pyqs);
        assert_eq!(pyqs.items.len(), 1);

        let banks = resolver.resource_list("cse", "3", "question-banks").unwrap();
        assert!(banks.items.is_empty());

        assert!(resolver.resource_list("cse", "3", "questionBanks").is_err());
        assert!(resolver.resource_list("cse", "3", "model-papers").is_err());
    }

    #[test]
    fn subject_code_is_case_insensitive() {
        let index = scheme_index();
        let resolver = Resolver::new(&index);
        let upper = resolver.subject("2022", "cse", "3", "CS301").unwrap();
        let lower = resolver.subject("2022", "cse", "3", "cs301").unwrap();
        assert!(std::ptr::eq(upper.subject, lower.subject));
        assert_eq!(upper.key, "cs301");
    }

    #[test]
    fn scheme_segments_stay_case_sensitive() {
        let index = scheme_index();
        let resolver = Resolver::new(&index);
        assert!(resolver.subject("2022", "CSE", "3", "cs301").is_err());
    }

    #[test]
    fn flat_index_through_scheme_family_is_not_found() {
        let index = flat_index();
        let resolver = Resolver::new(&index);
        assert!(resolver.scheme("2022").is_err());
        assert!(resolver.subject("2022", "cse", "3", "cs301").is_err());
    }

    #[test]
    fn scheme_index_through_flat_family_is_not_found() {
        let index = scheme_index();
        assert!(Resolver::new(&index).branch("cse").is_err());
    }

    #[test]
    fn wrong_segment_count_is_not_found() {
        let index = flat_index();
        let resolver = Resolver::new(&index);
        assert!(resolver.resolve(RouteFamily::Branch, &["cse", "3"]).is_err());
        assert!(resolver.resolve::<&str>(RouteFamily::Semester, &[]).is_err());
    }

    #[test]
    fn resolve_dispatches_by_family() {
        let index = flat_index();
        let node = resolve(&index, RouteFamily::ResourceType, &["cse", "3", "pyqs"]).unwrap();
        assert_eq!(node.family(), RouteFamily::ResourceType);
        assert_eq!(node.path().to_string(), "/cse/3/pyqs");
    }

    #[test]
    fn resolved_path_uses_index_key_for_subject() {
        let index = scheme_index();
        let node = resolve(&index, RouteFamily::Subject, &["2022", "cse", "3", "CS301"]).unwrap();
        assert_eq!(node.path().to_string(), "/2022/cse/3/cs301");
    }
}
