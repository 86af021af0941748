//! Testing utilities for the JustNotes workspace
//!
//! Shared fixture indexes covering both index shapes.

#![allow(missing_docs)]

use justnotes_index::{
    ContentIndex, FlatBranch, IndexFormat, IndexLoader, Resource, ResourceTypeSemester, Scheme,
    SchemeBranch, Subject, SubjectSemester,
};

/// Smallest flat-shape index: one CSE semester with a single paper
pub const MINIMAL_INDEX_JSON: &str = r#"{
  "branches": {
    "cse": {
      "label": "Computer Science",
      "shortLabel": "CSE",
      "semesters": {
        "3": {
          "notes": [],
          "pyqs": [
            {"title": "Jan 2023 Paper", "url": "http://x/p.pdf", "examMonth": "Jan", "examYear": 2023}
          ],
          "questionBanks": []
        }
      }
    }
  }
}"#;

pub fn minimal_index() -> ContentIndex {
    IndexLoader::new()
        .parse_str(MINIMAL_INDEX_JSON, IndexFormat::Json)
        .unwrap()
}

pub fn subject_bcs301() -> Subject {
    let mut subject = Subject::new("BCS301", "Mathematics for Computer Science", 4.0);
    subject.notes = vec![
        Resource::new("Module 1 – Probability", "https://files.example/bcs301/m1.pdf")
            .with_module(1)
            .with_file_type("pdf"),
        Resource::new("Module 2 – Distributions", "https://files.example/bcs301/m2.pdf")
            .with_module(2)
            .with_file_type("pdf"),
    ];
    subject.pyqs = vec![Resource::new("Jan 2024 Paper", "https://files.example/bcs301/jan24.pdf")
        .with_exam("Jan", 2024)
        .with_file_type("pdf")];
    subject.model_papers = vec![Resource::new("Model Paper Set 1", "https://files.example/bcs301/mqp1.pdf")
        .with_set(1)
        .official()
        .with_file_type("pdf")];
    subject.important_questions = vec![Resource::new("SEE Important Questions", "https://files.example/bcs301/iq.pdf")
        .with_target_exam("SEE")];
    subject
}

pub fn subject_bcs302() -> Subject {
    Subject::new("BCS302", "Digital Design and Computer Organization", 4.0)
}

/// Index with both shapes: flat `cse`/`ece`, scheme `2022` (cse, ece) and an empty `2021`
pub fn sample_index() -> ContentIndex {
    let cse_sem3 = ResourceTypeSemester {
        notes: vec![
            Resource::new("Data Structures Notes", "https://files.example/cse/3/ds.pdf").with_file_type("pdf"),
            Resource::new("OOP with Java Notes", "https://files.example/cse/3/java.pdf"),
        ],
        pyqs: vec![Resource::new("Jan 2023 Paper", "https://files.example/cse/3/jan23.pdf").with_exam("Jan", 2023)],
        question_banks: Vec::new(),
    };
    let cse_sem4 = ResourceTypeSemester::default();

    let flat_cse = FlatBranch::new("Computer Science", "CSE")
        .with_semester(3, cse_sem3)
        .with_semester(4, cse_sem4);
    let flat_ece = FlatBranch::new("Electronics & Communication", "ECE");

    let scheme_cse = SchemeBranch::new("Computer Science & Engineering", "CSE")
        .with_semester(
            3,
            SubjectSemester::default()
                .with_subject(subject_bcs301())
                .with_subject(subject_bcs302()),
        )
        .with_semester(4, SubjectSemester::default());
    let scheme_ece = SchemeBranch::new("Electronics & Communication Engineering", "");

    ContentIndex::new()
        .with_branch("cse", flat_cse)
        .with_branch("ece", flat_ece)
        .with_scheme(
            "2022",
            Scheme::new()
                .with_branch("cse", scheme_cse)
                .with_branch("ece", scheme_ece),
        )
        .with_scheme("2021", Scheme::new())
}

/// Same content as [`sample_index`], as a JSON document
pub fn sample_index_json() -> String {
    serde_json::to_string_pretty(&sample_index()).unwrap()
}
