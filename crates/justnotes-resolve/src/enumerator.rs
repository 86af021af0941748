//! Path enumerator
//!
//! Cross-product walk of the index producing every parameter set a static
//! build should pre-render. Semesters are enumerated over the fixed `1..=8`
//! range by default, so some emitted sets resolve to [`NotFound`](crate::NotFound).

use justnotes_index::{Branch, ContentIndex, ParamSet, ResourceType, RouteFamily, SEMESTERS};
use serde::{Deserialize, Serialize};

/// Which semesters the enumerator emits per branch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnumerationPolicy {
    /// Every semester in `1..=8`, defined or not
    #[default]
    Dense,
    /// Only semesters the branch defines, in index order
    DefinedOnly,
}

/// Enumerate `family` over `index` with the default policy
#[must_use]
pub fn enumerate(index: &ContentIndex, family: RouteFamily) -> Vec<ParamSet> {
    Enumerator::new(index).enumerate(family)
}

/// Route enumerator bound to one index
#[derive(Debug, Clone, Copy)]
pub struct Enumerator<'a> {
    index: &'a ContentIndex,
    policy: EnumerationPolicy,
}

impl<'a> Enumerator<'a> {
    /// Create enumerator with the dense policy
    #[inline]
    #[must_use]
    pub fn new(index: &'a ContentIndex) -> Self {
        Self {
            index,
            policy: EnumerationPolicy::default(),
        }
    }

    /// With semester policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: EnumerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Every parameter set of one family, in index order
    #[must_use]
    pub fn enumerate(&self, family: RouteFamily) -> Vec<ParamSet> {
        let mut out = Vec::new();
        match family {
            RouteFamily::Branch => {
                for code in self.flat_branch_codes() {
                    out.push(params(family, [code]));
                }
            }
            RouteFamily::Semester => {
                for (code, branch) in self.index.branches().into_iter().flatten() {
                    for sem in self.semester_keys(branch) {
                        out.push(params(family, [code.as_str(), sem.as_str()]));
                    }
                }
            }
            RouteFamily::ResourceType => {
                for (code, branch) in self.index.branches().into_iter().flatten() {
                    for sem in self.semester_keys(branch) {
                        for kind in ResourceType::ALL {
                            out.push(params(family, [code.as_str(), sem.as_str(), kind.token()]));
                        }
                    }
                }
            }
            RouteFamily::Scheme => {
                for id in self.index.schemes().into_iter().flatten().map(|(id, _)| id) {
                    out.push(params(family, [id.as_str()]));
                }
            }
            RouteFamily::SchemeBranch => {
                for (id, scheme) in self.index.schemes().into_iter().flatten() {
                    for code in scheme.branches.keys() {
                        out.push(params(family, [id.as_str(), code.as_str()]));
                    }
                }
            }
            RouteFamily::SchemeSemester => {
                for (id, scheme) in self.index.schemes().into_iter().flatten() {
                    for (code, branch) in &scheme.branches {
                        for sem in self.semester_keys(branch) {
                            out.push(params(family, [id.as_str(), code.as_str(), sem.as_str()]));
                        }
                    }
                }
            }
            RouteFamily::Subject => {
                for (id, scheme) in self.index.schemes().into_iter().flatten() {
                    for (code, branch) in &scheme.branches {
                        for sem in self.semester_keys(branch) {
                            // subject codes come from the index; only defined semesters have any
                            let Some(semester) = branch.semester(&sem) else {
                                continue;
                            };
                            for subject in semester.subjects.keys() {
                                out.push(params(
                                    family,
                                    [id.as_str(), code.as_str(), sem.as_str(), subject.as_str()],
                                ));
                            }
                        }
                    }
                }
            }
        }
        out
    }

    /// Every parameter set of every family, families in [`RouteFamily::ALL`] order
    #[must_use]
    pub fn enumerate_all(&self) -> Vec<(RouteFamily, ParamSet)> {
        RouteFamily::ALL
            .into_iter()
            .flat_map(|family| {
                self.enumerate(family)
                    .into_iter()
                    .map(move |params| (family, params))
            })
            .collect()
    }

    fn flat_branch_codes(&self) -> impl Iterator<Item = &'a str> {
        self.index
            .branches()
            .into_iter()
            .flat_map(|branches| branches.keys().map(String::as_str))
    }

    fn semester_keys<S>(&self, branch: &Branch<S>) -> Vec<String> {
        match self.policy {
            EnumerationPolicy::Dense => SEMESTERS.map(|n| n.to_string()).collect(),
            EnumerationPolicy::DefinedOnly => branch.semesters.keys().cloned().collect(),
        }
    }
}

fn params<const N: usize>(family: RouteFamily, values: [&str; N]) -> ParamSet {
    family.segment_names().iter().copied().zip(values).collect()
}
