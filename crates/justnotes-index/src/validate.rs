//! Structural validation of a loaded index
//!
//! Validation only reports; it never repairs or mutates. Issues describe
//! content that would load fine but could never be reached or shown
//! correctly through the routes.

use crate::model::{ContentIndex, Resource, Subject};
use crate::route::semester_number;

/// One structural problem found in an index
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexIssue {
    /// Semester key outside "1".."8"
    #[error("{scope}: semester key '{key}' is not one of 1..8")]
    SemesterOutOfRange {
        /// Location, e.g. `schemes.2022.branches.cse`
        scope: String,
        /// Offending key
        key: String,
    },

    /// Subject key with uppercase characters, unreachable by the lowercasing lookup
    #[error("{scope}: subject key '{key}' is not lowercase")]
    SubjectKeyNotLowercase {
        /// Location of the semester
        scope: String,
        /// Offending key
        key: String,
    },

    /// Subject stored under a key that is not its own code
    #[error("{scope}: subject key '{key}' does not match code '{code}'")]
    SubjectCodeMismatch {
        /// Location of the semester
        scope: String,
        /// Mapping key
        key: String,
        /// Subject's own code
        code: String,
    },

    /// Key that cannot be one path segment: empty, `.`, `..` or containing `/`
    #[error("{scope}: key '{key}' cannot be used as a path segment")]
    UnroutableKey {
        /// Location of the mapping
        scope: String,
        /// Offending key
        key: String,
    },

    /// Flat branch code equal to a scheme id; `/{code}` always serves the scheme
    #[error("branches.{code}: branch is shadowed by scheme '{code}'")]
    BranchShadowedByScheme {
        /// Shared branch code and scheme id
        code: String,
    },

    /// Resource with an empty mandatory field
    #[error("{scope}[{position}]: resource has empty {field}")]
    EmptyResourceField {
        /// Location of the resource list
        scope: String,
        /// Zero-based position in the list
        position: usize,
        /// `title` or `url`
        field: &'static str,
    },
}

impl ContentIndex {
    /// Collect every structural issue, in index order
    #[must_use]
    pub fn validate(&self) -> Vec<IndexIssue> {
        let mut issues = Vec::new();

        for (code, branch) in self.branches().into_iter().flatten() {
            check_segment_key("branches", code, &mut issues);
            if self.scheme(code).is_some() {
                issues.push(IndexIssue::BranchShadowedByScheme { code: code.clone() });
            }
            let scope = format!("branches.{code}");
            for (key, semester) in &branch.semesters {
                check_semester_key(&scope, key, &mut issues);
                let sem_scope = format!("{scope}.semesters.{key}");
                check_resources(&format!("{sem_scope}.notes"), &semester.notes, &mut issues);
                check_resources(&format!("{sem_scope}.pyqs"), &semester.pyqs, &mut issues);
                check_resources(
                    &format!("{sem_scope}.questionBanks"),
                    &semester.question_banks,
                    &mut issues,
                );
            }
        }

        for (id, scheme) in self.schemes().into_iter().flatten() {
            check_segment_key("schemes", id, &mut issues);
            for (code, branch) in &scheme.branches {
                check_segment_key(&format!("schemes.{id}.branches"), code, &mut issues);
                let scope = format!("schemes.{id}.branches.{code}");
                for (key, semester) in &branch.semesters {
                    check_semester_key(&scope, key, &mut issues);
                    let sem_scope = format!("{scope}.semesters.{key}");
                    for (subject_key, subject) in &semester.subjects {
                        check_subject(&sem_scope, subject_key, subject, &mut issues);
                    }
                }
            }
        }

        issues
    }
}

/// Whether `key` maps to exactly one route segment and one output file name
#[must_use]
pub fn is_routable_key(key: &str) -> bool {
    !key.is_empty() && key != "." && key != ".." && !key.contains(['/', '\\'])
}

fn check_segment_key(scope: &str, key: &str, issues: &mut Vec<IndexIssue>) {
    if !is_routable_key(key) {
        issues.push(IndexIssue::UnroutableKey {
            scope: scope.to_string(),
            key: key.to_string(),
        });
    }
}

fn check_semester_key(scope: &str, key: &str, issues: &mut Vec<IndexIssue>) {
    if semester_number(key).is_none() {
        issues.push(IndexIssue::SemesterOutOfRange {
            scope: scope.to_string(),
            key: key.to_string(),
        });
    }
}

fn check_subject(scope: &str, key: &str, subject: &Subject, issues: &mut Vec<IndexIssue>) {
    check_segment_key(&format!("{scope}.subjects"), key, issues);
    if key != key.to_lowercase() {
        issues.push(IndexIssue::SubjectKeyNotLowercase {
            scope: scope.to_string(),
            key: key.to_string(),
        });
    } else if key != subject.code.to_lowercase() {
        issues.push(IndexIssue::SubjectCodeMismatch {
            scope: scope.to_string(),
            key: key.to_string(),
            code: subject.code.clone(),
        });
    }

    let subject_scope = format!("{scope}.subjects.{key}");
    let sections = [
        ("notes", &subject.notes),
        ("pyqs", &subject.pyqs),
        ("modelPapers", &subject.model_papers),
        ("questionBanks", &subject.question_banks),
        ("importantQuestions", &subject.important_questions),
    ];
    for (field, resources) in sections {
        check_resources(&format!("{subject_scope}.{field}"), resources, issues);
    }
}

fn check_resources(scope: &str, resources: &[Resource], issues: &mut Vec<IndexIssue>) {
    for (position, resource) in resources.iter().enumerate() {
        for (field, value) in [("title", &resource.title), ("url", &resource.url)] {
            if value.trim().is_empty() {
                issues.push(IndexIssue::EmptyResourceField {
                    scope: scope.to_string(),
                    position,
                    field,
                });
            }
        }
    }
}
