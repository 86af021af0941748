//! Content index schema
//!
//! The index carries two historical shapes side by side:
//! - **flat**: `branches` keyed by branch code, semesters grouped by resource type
//! - **scheme**: `schemes` keyed by scheme id, then branches, semesters grouped by subject
//!
//! Mappings are [`IndexMap`]s so that index order is display order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Branch of the flat (current scheme) shape
pub type FlatBranch = Branch<ResourceTypeSemester>;

/// Branch of the scheme-indexed shape
pub type SchemeBranch = Branch<SubjectSemester>;

/// Root of the content index
///
/// Immutable once loaded: the only way to change an index is to build a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentIndex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    branches: Option<IndexMap<String, FlatBranch>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    schemes: Option<IndexMap<String, Scheme>>,
}

impl ContentIndex {
    /// Create empty index (neither shape present)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flat-shape branch, returning the extended index
    #[must_use]
    pub fn with_branch(mut self, code: impl Into<String>, branch: FlatBranch) -> Self {
        self.branches
            .get_or_insert_with(IndexMap::new)
            .insert(code.into(), branch);
        self
    }

    /// Add a scheme, returning the extended index
    #[must_use]
    pub fn with_scheme(mut self, id: impl Into<String>, scheme: Scheme) -> Self {
        self.schemes
            .get_or_insert_with(IndexMap::new)
            .insert(id.into(), scheme);
        self
    }

    /// Flat-shape branches, if the index has that shape
    #[inline]
    #[must_use]
    pub fn branches(&self) -> Option<&IndexMap<String, FlatBranch>> {
        self.branches.as_ref()
    }

    /// Schemes, if the index has the scheme shape
    #[inline]
    #[must_use]
    pub fn schemes(&self) -> Option<&IndexMap<String, Scheme>> {
        self.schemes.as_ref()
    }

    /// Flat-shape branch by exact code
    #[inline]
    #[must_use]
    pub fn branch(&self, code: &str) -> Option<&FlatBranch> {
        self.branches.as_ref()?.get(code)
    }

    /// Scheme by exact id
    #[inline]
    #[must_use]
    pub fn scheme(&self, id: &str) -> Option<&Scheme> {
        self.schemes.as_ref()?.get(id)
    }

    /// Summary counts, used for load diagnostics
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats::default();

        for branch in self.branches.iter().flat_map(|branches| branches.values()) {
            stats.flat_branches += 1;
            for semester in branch.semesters.values() {
                stats.resources += semester.resource_count();
            }
        }

        for scheme in self.schemes.iter().flat_map(|schemes| schemes.values()) {
            stats.schemes += 1;
            for branch in scheme.branches.values() {
                stats.scheme_branches += 1;
                for semester in branch.semesters.values() {
                    stats.subjects += semester.subjects.len();
                    stats.resources += semester
                        .subjects
                        .values()
                        .map(Subject::resource_count)
                        .sum::<usize>();
                }
            }
        }

        stats
    }
}

/// Summary counts over a [`ContentIndex`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    /// Number of flat-shape branches
    pub flat_branches: usize,
    /// Number of schemes
    pub schemes: usize,
    /// Number of branches across all schemes
    pub scheme_branches: usize,
    /// Number of subjects across all schemes
    pub subjects: usize,
    /// Number of resources in both shapes
    pub resources: usize,
}

/// Curriculum scheme (e.g. "2022")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    /// Branches under this scheme, in display order
    #[serde(default)]
    pub branches: IndexMap<String, SchemeBranch>,
}

impl Scheme {
    /// Create scheme without branches
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a branch, returning the extended scheme
    #[must_use]
    pub fn with_branch(mut self, code: impl Into<String>, branch: SchemeBranch) -> Self {
        self.branches.insert(code.into(), branch);
        self
    }
}

/// Engineering branch
///
/// Generic over the semester shape so that each index shape keeps its own
/// semester type instead of one optional-everything struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch<S> {
    /// Full label, e.g. "Computer Science"
    pub label: String,

    /// Short label, e.g. "CSE"; may be empty in the scheme shape
    #[serde(default)]
    pub short_label: String,

    /// Semesters keyed by "1".."8"; undefined semesters have no content
    #[serde(default = "IndexMap::new")]
    pub semesters: IndexMap<String, S>,
}

impl<S> Branch<S> {
    /// Create branch without semesters
    #[must_use]
    pub fn new(label: impl Into<String>, short_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            short_label: short_label.into(),
            semesters: IndexMap::new(),
        }
    }

    /// Add a semester, returning the extended branch
    #[must_use]
    pub fn with_semester(mut self, number: impl ToString, semester: S) -> Self {
        self.semesters.insert(number.to_string(), semester);
        self
    }

    /// Semester by its key ("1".."8")
    #[inline]
    #[must_use]
    pub fn semester(&self, key: &str) -> Option<&S> {
        self.semesters.get(key)
    }
}

/// Semester of the flat shape, grouped by resource type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTypeSemester {
    /// Notes
    #[serde(default)]
    pub notes: Vec<Resource>,
    /// Previous year question papers
    #[serde(default)]
    pub pyqs: Vec<Resource>,
    /// Question banks
    #[serde(default)]
    pub question_banks: Vec<Resource>,
}

impl ResourceTypeSemester {
    /// Total number of resources across all types
    #[inline]
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.notes.len() + self.pyqs.len() + self.question_banks.len()
    }
}

/// Semester of the scheme shape, grouped by subject
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSemester {
    /// Subjects keyed by lowercase subject code
    #[serde(default)]
    pub subjects: IndexMap<String, Subject>,
}

impl SubjectSemester {
    /// Add a subject keyed by its lowercased code
    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.insert(subject.code.to_lowercase(), subject);
        self
    }
}

/// Single course within a semester
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Course code as printed, e.g. "BCS301"
    pub code: String,
    /// Course name
    pub name: String,
    /// Credit value; zero when unknown
    #[serde(default)]
    pub credits: f64,
    /// Module-wise notes
    #[serde(default)]
    pub notes: Vec<Resource>,
    /// Previous year question papers
    #[serde(default)]
    pub pyqs: Vec<Resource>,
    /// Model question papers
    #[serde(default)]
    pub model_papers: Vec<Resource>,
    /// Question banks
    #[serde(default)]
    pub question_banks: Vec<Resource>,
    /// Important questions lists
    #[serde(default)]
    pub important_questions: Vec<Resource>,
}

impl Subject {
    /// Create subject without resources
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, credits: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            ..Self::default()
        }
    }

    /// Total number of resources across all sections
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.notes.len()
            + self.pyqs.len()
            + self.model_papers.len()
            + self.question_banks.len()
            + self.important_questions.len()
    }
}

/// One downloadable item
///
/// Only `title` and `url` are required; everything else is decorative.
/// `url` is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Display title
    pub title: String,
    /// Opaque link to the file
    pub url: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// File type, e.g. "pdf"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// Syllabus module number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<u32>,
    /// Exam month, e.g. "Jan"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_month: Option<String>,
    /// Exam year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exam_year: Option<u32>,
    /// Question paper set number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<u32>,
    /// Whether the file is an official university release
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_official: Option<bool>,
    /// Exam the material targets, e.g. "SEE"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_exam: Option<String>,
}

impl Resource {
    /// Create resource with the two mandatory fields
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// With file type
    #[inline]
    #[must_use]
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }

    /// With module number
    #[inline]
    #[must_use]
    pub fn with_module(mut self, module: u32) -> Self {
        self.module = Some(module);
        self
    }

    /// With exam month and year
    #[inline]
    #[must_use]
    pub fn with_exam(mut self, month: impl Into<String>, year: u32) -> Self {
        self.exam_month = Some(month.into());
        self.exam_year = Some(year);
        self
    }

    /// With set number
    #[inline]
    #[must_use]
    pub fn with_set(mut self, set: u32) -> Self {
        self.set = Some(set);
        self
    }

    /// Mark as official
    #[inline]
    #[must_use]
    pub fn official(mut self) -> Self {
        self.is_official = Some(true);
        self
    }

    /// With target exam
    #[inline]
    #[must_use]
    pub fn with_target_exam(mut self, exam: impl Into<String>) -> Self {
        self.target_exam = Some(exam.into());
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_lists_deserialize_as_empty() {
        let semester: ResourceTypeSemester = serde_json::from_str(r#"{"notes": []}"#).unwrap();
        assert!(semester.pyqs.is_empty());
        assert!(semester.question_banks.is_empty());
    }

    #[test]
    fn index_preserves_branch_order() {
        let json = r#"{"branches": {
            "me": {"label": "Mechanical", "shortLabel": "ME", "semesters": {}},
            "cse": {"label": "Computer Science", "shortLabel": "CSE", "semesters": {}},
            "ece": {"label": "Electronics", "shortLabel": "ECE", "semesters": {}}
        }}"#;
        let index: ContentIndex = serde_json::from_str(json).unwrap();
        let codes: Vec<_> = index.branches().unwrap().keys().cloned().collect();
        assert_eq!(codes, vec!["me", "cse", "ece"]);
    }

    #[test]
    fn flat_only_index_has_no_schemes() {
        let index: ContentIndex = serde_json::from_str(r#"{"branches": {}}"#).unwrap();
        assert!(index.branches().is_some());
        assert!(index.schemes().is_none());
        assert!(index.scheme("2022").is_none());
    }

    #[test]
    fn scheme_branch_short_label_is_optional() {
        let json = r#"{"label": "Computer Science", "semesters": {"3": {"subjects": {}}}}"#;
        let branch: SchemeBranch = serde_json::from_str(json).unwrap();
        assert_eq!(branch.short_label, "");
        assert!(branch.semester("3").is_some());
    }

    #[test]
    fn resource_optional_fields_roundtrip_camel_case() {
        let json = r#"{"title": "P", "url": "u", "examMonth": "Jan", "examYear": 2023, "isOfficial": true}"#;
        let resource: Resource = serde_json::from_str(json).unwrap();
        assert_eq!(resource.exam_month.as_deref(), Some("Jan"));
        assert_eq!(resource.exam_year, Some(2023));
        assert_eq!(resource.is_official, Some(true));

        let out = serde_json::to_value(&resource).unwrap();
        assert!(out.get("fileType").is_none());
        assert_eq!(out["examYear"], 2023);
    }

    #[test]
    fn subject_semester_keys_by_lowercase_code() {
        let semester = SubjectSemester::default().with_subject(Subject::new("BCS301", "Maths", 4.0));
        assert!(semester.subjects.contains_key("bcs301"));
    }

    #[test]
    fn stats_count_both_shapes() {
        let flat = FlatBranch::new("Computer Science", "CSE").with_semester(
            3,
            ResourceTypeSemester {
                notes: vec![Resource::new("n", "u")],
                pyqs: vec![Resource::new("p", "u")],
                question_banks: Vec::new(),
            },
        );
        let mut subject = Subject::new("BCS301", "Maths", 4.0);
        subject.model_papers.push(Resource::new("m", "u"));
        let scheme = Scheme::new().with_branch(
            "cse",
            SchemeBranch::new("Computer Science", "CSE")
                .with_semester(3, SubjectSemester::default().with_subject(subject)),
        );

        let stats = ContentIndex::new()
            .with_branch("cse", flat)
            .with_scheme("2022", scheme)
            .stats();

        assert_eq!(stats.flat_branches, 1);
        assert_eq!(stats.schemes, 1);
        assert_eq!(stats.scheme_branches, 1);
        assert_eq!(stats.subjects, 1);
        assert_eq!(stats.resources, 3);
    }
}
