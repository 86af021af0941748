//! Resource categories
//!
//! Two fixed tables map route tokens and section ids onto index fields:
//! - [`ResourceType`] for the flat shape (`/{branch}/{sem}/{type}`)
//! - [`SubjectSection`] for the five sections of a subject page

use crate::model::{Resource, ResourceTypeSemester, Subject};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Resource type addressable in the flat shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    /// `notes` → `notes`
    Notes,
    /// `pyqs` → `pyqs`
    Pyqs,
    /// `question-banks` → `questionBanks`
    QuestionBanks,
}

impl ResourceType {
    /// All types in display order
    pub const ALL: [Self; 3] = [Self::Notes, Self::Pyqs, Self::QuestionBanks];

    /// Route token
    #[inline]
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Pyqs => "pyqs",
            Self::QuestionBanks => "question-banks",
        }
    }

    /// Human label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Pyqs => "Question Papers",
            Self::QuestionBanks => "Question Bank",
        }
    }

    /// Description shown on resource-type pages
    #[inline]
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Notes => "Module-wise PDF notes for all subjects.",
            Self::Pyqs => "Previous year exam papers from all recent VTU examinations.",
            Self::QuestionBanks => "Compiled 2-mark and 10-mark questions across all subjects.",
        }
    }

    /// Description shown on the semester overview card
    #[inline]
    #[must_use]
    pub const fn card_description(self) -> &'static str {
        match self {
            Self::Notes => "Module-wise PDF notes for all subjects this semester.",
            Self::Pyqs => "Previous year exam papers (PYQs) from all recent examinations.",
            Self::QuestionBanks => "Compiled 2-mark and 10-mark questions across all subjects.",
        }
    }

    /// Select the matching list of a semester
    #[inline]
    #[must_use]
    pub fn select(self, semester: &ResourceTypeSemester) -> &[Resource] {
        match self {
            Self::Notes => &semester.notes,
            Self::Pyqs => &semester.pyqs,
            Self::QuestionBanks => &semester.question_banks,
        }
    }
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ResourceType {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

/// Section of a subject page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubjectSection {
    /// Module-wise notes
    Notes,
    /// Previous year question papers
    Pyqs,
    /// Official model papers
    ModelPapers,
    /// Question banks
    QuestionBanks,
    /// Important questions
    ImportantQuestions,
}

impl SubjectSection {
    /// All sections in page order
    pub const ALL: [Self; 5] = [
        Self::Notes,
        Self::Pyqs,
        Self::ModelPapers,
        Self::QuestionBanks,
        Self::ImportantQuestions,
    ];

    /// Anchor id
    #[inline]
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Pyqs => "pyqs",
            Self::ModelPapers => "model-papers",
            Self::QuestionBanks => "question-banks",
            Self::ImportantQuestions => "important-questions",
        }
    }

    /// Section heading
    #[inline]
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Notes => "Module-wise Notes",
            Self::Pyqs => "Previous Year Question Papers (PYQs)",
            Self::ModelPapers => "Official Model Question Papers",
            Self::QuestionBanks => "Question Banks",
            Self::ImportantQuestions => "Important Questions — Exam Prep",
        }
    }

    /// Short label for the in-page jump list
    #[inline]
    #[must_use]
    pub const fn jump_label(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Pyqs => "PYQs",
            Self::ModelPapers => "Model Papers",
            Self::QuestionBanks => "Question Banks",
            Self::ImportantQuestions => "Important Qs",
        }
    }

    /// Select the matching list of a subject
    #[inline]
    #[must_use]
    pub fn select(self, subject: &Subject) -> &[Resource] {
        match self {
            Self::Notes => &subject.notes,
            Self::Pyqs => &subject.pyqs,
            Self::ModelPapers => &subject.model_papers,
            Self::QuestionBanks => &subject.question_banks,
            Self::ImportantQuestions => &subject.important_questions,
        }
    }
}

/// Token that names no known category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource kind: {0}")]
pub struct UnknownKind(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_tokens_parse() {
        assert_eq!("notes".parse::<ResourceType>().unwrap(), ResourceType::Notes);
        assert_eq!("pyqs".parse::<ResourceType>().unwrap(), ResourceType::Pyqs);
        assert_eq!(
            "question-banks".parse::<ResourceType>().unwrap(),
            ResourceType::QuestionBanks
        );
    }

    #[test]
    fn resource_type_rejects_field_names() {
        // the route token differs from the index field name
        assert!("questionBanks".parse::<ResourceType>().is_err());
        assert!("Notes".parse::<ResourceType>().is_err());
        assert!("model-papers".parse::<ResourceType>().is_err());
    }

    #[test]
    fn resource_type_selects_field() {
        let semester = ResourceTypeSemester {
            notes: Vec::new(),
            pyqs: Vec::new(),
            question_banks: vec![Resource::new("qb", "u")],
        };
        assert_eq!(ResourceType::QuestionBanks.select(&semester).len(), 1);
        assert!(ResourceType::Notes.select(&semester).is_empty());
    }

    #[test]
    fn resource_type_labels() {
        let labels: Vec<_> = ResourceType::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Notes", "Question Papers", "Question Bank"]);
    }

    #[test]
    fn subject_sections_in_page_order() {
        let ids: Vec<_> = SubjectSection::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec!["notes", "pyqs", "model-papers", "question-banks", "important-questions"]
        );
    }

    #[test]
    fn subject_section_selects_field() {
        let mut subject = Subject::new("BCS301", "Maths", 4.0);
        subject.important_questions.push(Resource::new("iq", "u"));
        assert_eq!(SubjectSection::ImportantQuestions.select(&subject).len(), 1);
        assert!(SubjectSection::ModelPapers.select(&subject).is_empty());
    }
}
