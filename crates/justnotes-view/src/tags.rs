//! Per-resource tag composition and count labels

use justnotes_index::Resource;

/// Marker emitted for official resources
pub const OFFICIAL_TAG: &str = "Official VTU";

/// Display tags of a resource, in fixed order
///
/// `Module {n}`, `{month} {year}` (only when both are present), `Set {n}`,
/// the target exam verbatim, [`OFFICIAL_TAG`], then the file type
/// uppercased. Absent fields are skipped; zero numbers and empty strings
/// count as absent.
#[must_use]
pub fn tags(resource: &Resource) -> Vec<String> {
    let mut tags = Vec::new();

    if let Some(module) = resource.module.filter(|&n| n > 0) {
        tags.push(format!("Module {module}"));
    }
    if let (Some(month), Some(year)) = (
        present(resource.exam_month.as_deref()),
        resource.exam_year.filter(|&y| y > 0),
    ) {
        tags.push(format!("{month} {year}"));
    }
    if let Some(set) = resource.set.filter(|&n| n > 0) {
        tags.push(format!("Set {set}"));
    }
    if let Some(exam) = present(resource.target_exam.as_deref()) {
        tags.push(exam.to_string());
    }
    if resource.is_official == Some(true) {
        tags.push(OFFICIAL_TAG.to_string());
    }
    if let Some(file_type) = present(resource.file_type.as_deref()) {
        tags.push(file_type.to_uppercase());
    }

    tags
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// `"1 file"`, `"3 files"`; nothing for zero
#[must_use]
pub fn file_count_label(count: usize) -> Option<String> {
    counted(count, "file")
}

/// `"3 files available"`; nothing for zero
#[must_use]
pub fn files_available_label(count: usize) -> Option<String> {
    counted(count, "file").map(|label| format!("{label} available"))
}

/// `"2 semesters available"`; nothing for zero
#[must_use]
pub fn semesters_available_label(count: usize) -> Option<String> {
    counted(count, "semester").map(|label| format!("{label} available"))
}

fn counted(count: usize, noun: &str) -> Option<String> {
    match count {
        0 => None,
        1 => Some(format!("1 {noun}")),
        n => Some(format!("{n} {noun}s")),
    }
}

/// 1-based row position, zero-padded to two digits
#[must_use]
pub fn row_position(index: usize) -> String {
    format!("{:02}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn module_official_file_type() {
        let resource = Resource::new("M2", "http://x/m2.pdf")
            .with_module(2)
            .official()
            .with_file_type("pdf");
        assert_eq!(tags(&resource), vec!["Module 2", "Official VTU", "PDF"]);
    }

    #[test]
    fn exam_needs_month_and_year() {
        let both = Resource::new("P", "u").with_exam("Jan", 2023);
        assert_eq!(tags(&both), vec!["Jan 2023"]);

        let mut month_only = Resource::new("P", "u");
        month_only.exam_month = Some("Jan".to_string());
        assert!(tags(&month_only).is_empty());

        let mut year_only = Resource::new("P", "u");
        year_only.exam_year = Some(2023);
        assert!(tags(&year_only).is_empty());
    }

    #[test]
    fn full_order() {
        let resource = Resource::new("All", "u")
            .with_file_type("docx")
            .official()
            .with_target_exam("SEE")
            .with_set(1)
            .with_exam("Jul", 2024)
            .with_module(5);
        assert_eq!(
            tags(&resource),
            vec!["Module 5", "Jul 2024", "Set 1", "SEE", "Official VTU", "DOCX"]
        );
    }

    #[test]
    fn zero_and_empty_are_absent() {
        let mut resource = Resource::new("Z", "u").with_module(0).with_set(0);
        resource.file_type = Some(String::new());
        resource.target_exam = Some(String::new());
        resource.is_official = Some(false);
        assert!(tags(&resource).is_empty());
    }

    #[test]
    fn count_labels() {
        assert_eq!(file_count_label(0), None);
        assert_eq!(file_count_label(1).as_deref(), Some("1 file"));
        assert_eq!(file_count_label(3).as_deref(), Some("3 files"));
        assert_eq!(files_available_label(3).as_deref(), Some("3 files available"));
        assert_eq!(semesters_available_label(1).as_deref(), Some("1 semester available"));
    }

    #[test]
    fn row_positions() {
        assert_eq!(row_position(0), "01");
        assert_eq!(row_position(9), "10");
        assert_eq!(row_position(120), "121");
    }
}
