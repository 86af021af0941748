//! View projector
//!
//! Pure functions from a resolved node to [`DisplayFacts`]. The index is
//! only read; the same node always projects to the same facts.

use crate::facts::{
    Breadcrumb, BranchEntry, BranchFacts, DisplayFacts, EmptyState, HomeFacts, PageMeta,
    ResourceCard, ResourceListFacts, ResourceRow, SchemeBranchFacts, SchemeEntry, SchemeFacts,
    SchemeSemesterFacts, SectionFacts, SectionLink, SemesterCell, SemesterFacts, SubjectEntry,
    SubjectFacts,
};
use crate::site::SiteConfig;
use crate::tags::{
    file_count_label, files_available_label, row_position, semesters_available_label, tags,
};
use justnotes_index::{Branch, ContentIndex, Resource, ResourceType, SubjectSection, SEMESTERS};
use justnotes_resolve::{
    BranchNode, ResolvedNode, ResourceListNode, SchemeBranchNode, SchemeNode, SchemeSemesterNode,
    SemesterNode, SubjectNode,
};

/// Project `node` with the default site wording
#[must_use]
pub fn project(node: &ResolvedNode<'_>) -> DisplayFacts {
    Projector::new(&SiteConfig::default()).project(node)
}

/// Projector bound to one site configuration
#[derive(Debug, Clone, Copy)]
pub struct Projector<'s> {
    site: &'s SiteConfig,
}

impl<'s> Projector<'s> {
    /// Create projector
    #[inline]
    #[must_use]
    pub fn new(site: &'s SiteConfig) -> Self {
        Self { site }
    }

    /// Site configuration in use
    #[inline]
    #[must_use]
    pub fn site(&self) -> &'s SiteConfig {
        self.site
    }

    /// Display facts of a resolved node
    #[must_use]
    pub fn project(&self, node: &ResolvedNode<'_>) -> DisplayFacts {
        match node {
            ResolvedNode::Branch(n) => DisplayFacts::Branch(self.branch(n)),
            ResolvedNode::Semester(n) => DisplayFacts::Semester(self.semester(n)),
            ResolvedNode::ResourceList(n) => DisplayFacts::ResourceType(self.resource_list(n)),
            ResolvedNode::Scheme(n) => DisplayFacts::Scheme(self.scheme(n)),
            ResolvedNode::SchemeBranch(n) => DisplayFacts::SchemeBranch(self.scheme_branch(n)),
            ResolvedNode::SchemeSemester(n) => {
                DisplayFacts::SchemeSemester(self.scheme_semester(n))
            }
            ResolvedNode::Subject(n) => DisplayFacts::Subject(self.subject(n)),
        }
    }

    /// Home page facts; a listing is `available` when `index` holds the scheme
    #[must_use]
    pub fn home(&self, index: &ContentIndex) -> HomeFacts {
        let site = self.site;
        let schemes = site
            .schemes
            .iter()
            .map(|listing| SchemeEntry {
                id: listing.id.clone(),
                label: scheme_label(&listing.id),
                href: format!("/{}", listing.id),
                status: listing.status.clone(),
                description: listing.description.clone(),
                available: index.scheme(&listing.id).is_some(),
            })
            .collect();

        HomeFacts {
            meta: PageMeta {
                title: format!(
                    "{} – Free {} Notes, PYQs & Study Materials",
                    site.brand, site.university
                ),
                description: format!(
                    "{} is a free, open-source repository of {} study materials. Access module-wise notes, previous year question papers, model papers, and important questions.",
                    site.brand, site.university
                ),
                canonical: "/".to_string(),
                keywords: Vec::new(),
            },
            breadcrumbs: vec![Breadcrumb::home()],
            schemes,
        }
    }

    fn branch(&self, node: &BranchNode<'_>) -> BranchFacts {
        let branch = node.branch;
        let uni = &self.site.university;
        BranchFacts {
            meta: PageMeta {
                title: format!(
                    "{} {uni} Notes, PYQs & Question Banks — All Semesters",
                    branch.short_label
                ),
                description: format!(
                    "Download free {uni} {} notes, previous year question papers (PYQs), and question banks for all 8 semesters.",
                    branch.label
                ),
                canonical: node.path().to_string(),
                keywords: Vec::new(),
            },
            breadcrumbs: branch_crumbs(node),
            code: node.code.to_string(),
            label: branch.label.clone(),
            short_label: branch.short_label.clone(),
            semesters: semester_grid(&node.path().to_string(), branch),
        }
    }

    fn semester(&self, node: &SemesterNode<'_>) -> SemesterFacts {
        let branch = node.branch.branch;
        let sem = node.sem;
        let uni = &self.site.university;
        let href = node.path().to_string();

        let cards = ResourceType::ALL
            .into_iter()
            .map(|kind| {
                let count = kind.select(node.semester).len();
                ResourceCard {
                    kind,
                    label: kind.label().to_string(),
                    description: kind.card_description().to_string(),
                    href: format!("{href}/{}", kind.token()),
                    count,
                    count_label: files_available_label(count),
                }
            })
            .collect();

        SemesterFacts {
            meta: PageMeta {
                title: format!(
                    "{} Semester {sem} {uni} Notes, PYQs & Question Banks",
                    branch.short_label
                ),
                description: format!(
                    "Download free {uni} {} Semester {sem} notes, previous year question papers (PYQs), and question banks.",
                    branch.label
                ),
                canonical: href,
                keywords: Vec::new(),
            },
            breadcrumbs: semester_crumbs(node),
            heading: format!("{} Semester {sem}", branch.short_label),
            semester: sem.to_string(),
            cards,
        }
    }

    fn resource_list(&self, node: &ResourceListNode<'_>) -> ResourceListFacts {
        let branch = node.semester.branch.branch;
        let sem = node.semester.sem;
        let kind = node.kind;
        let uni = &self.site.university;
        let count = node.items.len();

        let mut breadcrumbs = semester_crumbs(&node.semester);
        breadcrumbs.push(Breadcrumb::new(kind.label(), node.path().to_string()));

        ResourceListFacts {
            meta: PageMeta {
                title: format!(
                    "{uni} {} Sem {sem} {} — Free PDF Download",
                    branch.short_label,
                    kind.label()
                ),
                description: format!(
                    "{} {uni} {}, Semester {sem}.",
                    kind.description(),
                    branch.label
                ),
                canonical: node.path().to_string(),
                keywords: Vec::new(),
            },
            breadcrumbs,
            kind,
            label: kind.label().to_string(),
            description: kind.description().to_string(),
            heading: format!("{} — Semester {sem}", branch.label),
            count,
            count_label: file_count_label(count),
            rows: rows(node.items),
            empty: (count == 0).then(|| self.empty_state("No files uploaded yet.")),
        }
    }

    fn scheme(&self, node: &SchemeNode<'_>) -> SchemeFacts {
        let id = node.id;
        let uni = &self.site.university;
        let base = node.path().to_string();

        let branches = node
            .scheme
            .branches
            .iter()
            .map(|(code, branch)| {
                let semester_count = branch.semesters.len();
                let caption = match semesters_available_label(semester_count) {
                    Some(available) => format!("{} · {available}", code.to_uppercase()),
                    None => code.to_uppercase(),
                };
                BranchEntry {
                    code: code.clone(),
                    label: branch.label.clone(),
                    href: format!("{base}/{code}"),
                    semester_count,
                    caption,
                }
            })
            .collect();

        SchemeFacts {
            meta: PageMeta {
                title: format!("{uni} {id} Scheme Notes, PYQs & Study Materials – All Branches"),
                description: format!(
                    "Browse {uni} {id} scheme study materials by branch. Access free notes, PYQs, model papers and important questions."
                ),
                canonical: base,
                keywords: Vec::new(),
            },
            breadcrumbs: scheme_crumbs(node),
            id: id.to_string(),
            label: scheme_label(id),
            branches,
        }
    }

    fn scheme_branch(&self, node: &SchemeBranchNode<'_>) -> SchemeBranchFacts {
        let branch = node.branch;
        let short = display_short_label(node.code, branch);
        let id = node.scheme.id;
        let uni = &self.site.university;

        SchemeBranchFacts {
            meta: PageMeta {
                title: format!("{short} {uni} {id} Scheme Notes, PYQs & Model Papers — All Semesters"),
                description: format!(
                    "Download free {uni} {} notes, previous year question papers (PYQs), model papers and important questions for the {id} scheme.",
                    branch.label
                ),
                canonical: node.path().to_string(),
                keywords: Vec::new(),
            },
            breadcrumbs: scheme_branch_crumbs(node),
            scheme: id.to_string(),
            code: node.code.to_string(),
            label: branch.label.clone(),
            semesters: semester_grid(&node.path().to_string(), branch),
            short_label: short,
        }
    }

    fn scheme_semester(&self, node: &SchemeSemesterNode<'_>) -> SchemeSemesterFacts {
        let branch = node.branch.branch;
        let short = display_short_label(node.branch.code, branch);
        let id = node.branch.scheme.id;
        let sem = node.sem;
        let uni = &self.site.university;
        let base = node.path().to_string();

        let subjects = node
            .semester
            .subjects
            .iter()
            .map(|(key, subject)| {
                let resource_count = subject.resource_count();
                SubjectEntry {
                    code: subject.code.clone(),
                    name: subject.name.clone(),
                    credits: subject.credits,
                    href: format!("{base}/{key}"),
                    resource_count,
                    count_label: files_available_label(resource_count),
                }
            })
            .collect();

        SchemeSemesterFacts {
            meta: PageMeta {
                title: format!("{short} Semester {sem} {uni} Subjects | {}", scheme_label(id)),
                description: format!(
                    "{uni} {} Semester {sem} subjects under the {id} scheme, with notes, PYQs, model papers and important questions.",
                    branch.label
                ),
                canonical: base,
                keywords: Vec::new(),
            },
            breadcrumbs: scheme_semester_crumbs(node),
            heading: format!("{short} Semester {sem}"),
            semester: sem.to_string(),
            subjects,
        }
    }

    fn subject(&self, node: &SubjectNode<'_>) -> SubjectFacts {
        let subject = node.subject;
        let code = &subject.code;
        let name = &subject.name;
        let scheme = node.semester.branch.scheme.id;
        let branch_code = node.semester.branch.code;
        let sem = node.semester.sem;
        let uni = &self.site.university;

        let mut chips = vec![
            scheme_label(scheme),
            format!("Sem {sem}"),
            branch_code.to_uppercase(),
        ];
        if subject.credits > 0.0 {
            chips.push(format!("{} Credits", subject.credits));
        }

        let sections = SubjectSection::ALL
            .into_iter()
            .map(|section| {
                let items = section.select(subject);
                SectionFacts {
                    id: section.id().to_string(),
                    heading: section.heading().to_string(),
                    count: items.len(),
                    count_label: file_count_label(items.len()),
                    rows: rows(items),
                    empty: items
                        .is_empty()
                        .then(|| self.empty_state("No resources uploaded yet.")),
                }
            })
            .collect();

        let jump = SubjectSection::ALL
            .into_iter()
            .map(|section| SectionLink {
                id: section.id().to_string(),
                label: section.jump_label().to_string(),
            })
            .collect();

        SubjectFacts {
            meta: PageMeta {
                title: format!(
                    "{code} {name} {uni} Notes, PYQs & Model Papers | {}",
                    scheme_label(scheme)
                ),
                description: format!(
                    "Download comprehensive {uni} study materials for {name} ({code}). Access free PDF notes, previous year question papers (PYQs), official model papers, and important questions. Fully updated for the {uni} {scheme} scheme and {} semester exams.",
                    self.site.exam_session
                ),
                canonical: node.path().to_string(),
                keywords: vec![
                    format!("{code} notes"),
                    format!("{code} {uni} notes"),
                    format!("{name} {uni}"),
                    format!("{code} previous year question papers"),
                    format!("{code} PYQ"),
                    format!("{code} model question paper"),
                    format!("{uni} {scheme} scheme {sem}sem notes"),
                    format!("{name} notes PDF"),
                    format!("{uni} {code} important questions"),
                ],
            },
            breadcrumbs: subject_crumbs(node),
            code: code.clone(),
            name: name.clone(),
            credits: subject.credits,
            chips,
            jump,
            sections,
        }
    }

    fn empty_state(&self, message: &str) -> EmptyState {
        EmptyState {
            message: message.to_string(),
            contribute_url: self.site.contribute_url.clone(),
        }
    }
}

fn rows(items: &[Resource]) -> Vec<ResourceRow> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| ResourceRow {
            position: row_position(i),
            title: item.title.clone(),
            url: item.url.clone(),
            description: item.description.clone().filter(|d| !d.is_empty()),
            tags: tags(item),
        })
        .collect()
}

fn semester_grid<S>(base: &str, branch: &Branch<S>) -> Vec<SemesterCell> {
    SEMESTERS
        .map(|n| SemesterCell {
            number: n,
            label: format!("Semester {n}"),
            href: format!("{base}/{n}"),
            defined: branch.semester(&n.to_string()).is_some(),
        })
        .collect()
}

fn scheme_label(id: &str) -> String {
    format!("{id} Scheme")
}

fn display_short_label<S>(code: &str, branch: &Branch<S>) -> String {
    if branch.short_label.is_empty() {
        code.to_uppercase()
    } else {
        branch.short_label.clone()
    }
}

fn branch_crumbs(node: &BranchNode<'_>) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::home(),
        Breadcrumb::new(node.branch.short_label.clone(), node.path().to_string()),
    ]
}

fn semester_crumbs(node: &SemesterNode<'_>) -> Vec<Breadcrumb> {
    let mut crumbs = branch_crumbs(&node.branch);
    crumbs.push(Breadcrumb::new(
        format!("Semester {}", node.sem),
        node.path().to_string(),
    ));
    crumbs
}

fn scheme_crumbs(node: &SchemeNode<'_>) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::home(),
        Breadcrumb::new(scheme_label(node.id), node.path().to_string()),
    ]
}

fn scheme_branch_crumbs(node: &SchemeBranchNode<'_>) -> Vec<Breadcrumb> {
    let mut crumbs = scheme_crumbs(&node.scheme);
    crumbs.push(Breadcrumb::new(
        display_short_label(node.code, node.branch),
        node.path().to_string(),
    ));
    crumbs
}

fn scheme_semester_crumbs(node: &SchemeSemesterNode<'_>) -> Vec<Breadcrumb> {
    let mut crumbs = scheme_branch_crumbs(&node.branch);
    crumbs.push(Breadcrumb::new(
        format!("Sem {}", node.sem),
        node.path().to_string(),
    ));
    crumbs
}

fn subject_crumbs(node: &SubjectNode<'_>) -> Vec<Breadcrumb> {
    let mut crumbs = scheme_semester_crumbs(&node.semester);
    crumbs.push(Breadcrumb::new(
        node.subject.code.clone(),
        node.path().to_string(),
    ));
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use justnotes_index::RouteFamily;
    use justnotes_resolve::Resolver;
    use justnotes_test_utils::sample_index;
    use pretty_assertions::assert_eq;

    fn labels(crumbs: &[Breadcrumb]) -> Vec<&str> {
        crumbs.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn branch_grid_marks_defined_semesters() {
        let index = sample_index();
        let node = Resolver::new(&index).branch("cse").unwrap();
        let facts = Projector::new(&SiteConfig::default()).branch(&node);

        assert_eq!(facts.semesters.len(), 8);
        let defined: Vec<u8> = facts
            .semesters
            .iter()
            .filter(|cell| cell.defined)
            .map(|cell| cell.number)
            .collect();
        assert_eq!(defined, vec![3, 4]);
        assert_eq!(facts.semesters[0].href, "/cse/1");
        assert_eq!(labels(&facts.breadcrumbs), vec!["Home", "CSE"]);
        assert_eq!(
            facts.meta.title,
            "CSE VTU Notes, PYQs & Question Banks — All Semesters"
        );
    }

    #[test]
    fn semester_cards_count_each_type() {
        let index = sample_index();
        let node = Resolver::new(&index).semester("cse", "3").unwrap();
        let facts = Projector::new(&SiteConfig::default()).semester(&node);

        let counts: Vec<_> = facts.cards.iter().map(|c| c.count).collect();
        assert_eq!(counts, vec![2, 1, 0]);
        assert_eq!(facts.cards[0].count_label.as_deref(), Some("2 files available"));
        assert_eq!(facts.cards[1].count_label.as_deref(), Some("1 file available"));
        assert_eq!(facts.cards[2].count_label, None);
        assert_eq!(facts.cards[2].href, "/cse/3/question-banks");
        assert_eq!(labels(&facts.breadcrumbs), vec!["Home", "CSE", "Semester 3"]);
    }

    #[test]
    fn empty_resource_list_offers_contribution() {
        let index = sample_index();
        let node = Resolver::new(&index)
            .resource_list("cse", "4", "question-banks")
            .unwrap();
        let facts = Projector::new(&SiteConfig::default()).resource_list(&node);

        assert_eq!(facts.count, 0);
        assert!(facts.rows.is_empty());
        assert_eq!(facts.count_label, None);
        let empty = facts.empty.unwrap();
        assert_eq!(empty.message, "No files uploaded yet.");
        assert_eq!(empty.contribute_url, "https://github.com/yourusername/justnotes");
    }

    #[test]
    fn scheme_lists_branches_with_captions() {
        let index = sample_index();
        let node = Resolver::new(&index).scheme("2022").unwrap();
        let facts = Projector::new(&SiteConfig::default()).scheme(&node);

        assert_eq!(facts.label, "2022 Scheme");
        assert_eq!(facts.branches.len(), 2);
        assert_eq!(facts.branches[0].caption, "CSE · 2 semesters available");
        assert_eq!(facts.branches[0].href, "/2022/cse");
        assert_eq!(facts.branches[1].caption, "ECE");
        assert_eq!(facts.branches[1].semester_count, 0);
    }

    #[test]
    fn scheme_branch_falls_back_to_code() {
        let index = sample_index();
        let node = Resolver::new(&index).scheme_branch("2022", "ece").unwrap();
        let facts = Projector::new(&SiteConfig::default()).scheme_branch(&node);

        assert_eq!(facts.short_label, "ECE");
        assert_eq!(labels(&facts.breadcrumbs), vec!["Home", "2022 Scheme", "ECE"]);
        assert!(facts.semesters.iter().all(|cell| !cell.defined));
    }

    #[test]
    fn scheme_semester_lists_subjects() {
        let index = sample_index();
        let node = Resolver::new(&index)
            .scheme_semester("2022", "cse", "3")
            .unwrap();
        let facts = Projector::new(&SiteConfig::default()).scheme_semester(&node);

        let hrefs: Vec<_> = facts.subjects.iter().map(|s| s.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/2022/cse/3/bcs301", "/2022/cse/3/bcs302"]);
        assert_eq!(facts.subjects[0].resource_count, 5);
        assert_eq!(facts.subjects[1].count_label, None);
        assert_eq!(facts.heading, "CSE Semester 3");
    }

    #[test]
    fn subject_page_sections_and_chips() {
        let index = sample_index();
        let node = Resolver::new(&index)
            .subject("2022", "cse", "3", "BCS301")
            .unwrap();
        let facts = Projector::new(&SiteConfig::default()).subject(&node);

        let ids: Vec<_> = facts.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["notes", "pyqs", "model-papers", "question-banks", "important-questions"]
        );
        assert_eq!(facts.chips, vec!["2022 Scheme", "Sem 3", "CSE", "4 Credits"]);
        assert_eq!(facts.sections[0].rows[1].position, "02");
        assert_eq!(facts.sections[0].rows[1].tags, vec!["Module 2", "PDF"]);
        assert_eq!(facts.sections[2].rows[0].tags, vec!["Set 1", "Official VTU", "PDF"]);
        assert!(facts.sections[3].empty.is_some());
        assert_eq!(facts.jump[4].label, "Important Qs");
        assert_eq!(facts.meta.keywords.len(), 9);
        assert_eq!(facts.meta.keywords[6], "VTU 2022 scheme 3sem notes");
        assert!(facts.meta.description.ends_with("2022 scheme and 2026 semester exams."));
    }

    #[test]
    fn home_marks_available_schemes() {
        let index = sample_index();
        let facts = Projector::new(&SiteConfig::default()).home(&index);
        assert_eq!(facts.schemes.len(), 2);
        assert!(facts.schemes.iter().all(|s| s.available));

        let flat_only = justnotes_test_utils::minimal_index();
        let facts = Projector::new(&SiteConfig::default()).home(&flat_only);
        assert!(facts.schemes.iter().all(|s| !s.available));
        assert_eq!(facts.breadcrumbs.len(), 1);
    }

    #[test]
    fn project_dispatches_by_family() {
        let index = sample_index();
        let resolver = Resolver::new(&index);
        for (family, segments) in [
            (RouteFamily::Branch, vec!["cse"]),
            (RouteFamily::Scheme, vec!["2021"]),
            (RouteFamily::Subject, vec!["2022", "cse", "3", "bcs302"]),
        ] {
            let node = resolver.resolve(family, &segments).unwrap();
            assert_eq!(project(&node).family(), Some(family));
        }
    }
}
