// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Title-to-project matching with Unique / Ambiguous / NoMatch outcomes.

use tracing::debug;

use voxlog_core::Project;

/// Outcome of reconciling a draft title against the project directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation {
    /// Exactly one candidate: auto-select it, no interaction needed.
    Unique(Project),
    /// Several candidates: the user picks one of them.
    Ambiguous(Vec<Project>),
    /// No candidate at all: the user picks from the entire directory, so
    /// an imprecise extraction never blocks registration.
    NoMatch(Vec<Project>),
}

impl Reconciliation {
    /// The projects the user would choose from in the deferred outcomes.
    pub fn choices(&self) -> &[Project] {
        match self {
            Reconciliation::Unique(project) => std::slice::from_ref(project),
            Reconciliation::Ambiguous(candidates) => candidates,
            Reconciliation::NoMatch(all) => all,
        }
    }
}

/// Resolves a draft title against the directory snapshot.
///
/// A project is a candidate when its name contains the title, both
/// lowercased. The comparison is deliberately one-directional: a title
/// longer than the true project name never matches and falls through to
/// [`Reconciliation::NoMatch`].
///
/// An empty or whitespace-only title would match every project under the
/// substring rule; it is treated explicitly as the full-directory outcome
/// instead of relying on that accident.
pub fn reconcile(title: &str, projects: &[Project]) -> Reconciliation {
    let needle = title.trim().to_lowercase();
    if needle.is_empty() {
        debug!("empty draft title, offering the full directory");
        return Reconciliation::NoMatch(projects.to_vec());
    }

    let mut candidates: Vec<Project> = projects
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    debug!(title, candidates = candidates.len(), "reconciled draft title");

    match candidates.len() {
        0 => Reconciliation::NoMatch(projects.to_vec()),
        1 => Reconciliation::Unique(candidates.remove(0)),
        _ => Reconciliation::Ambiguous(candidates),
    }
}

/// Picks the provisional selection within a candidate set: an exact
/// case-insensitive name match when present, otherwise the first
/// candidate.
pub fn preferred_candidate<'a>(title: &str, candidates: &'a [Project]) -> Option<&'a Project> {
    let needle = title.trim().to_lowercase();
    candidates
        .iter()
        .find(|p| p.name.to_lowercase() == needle)
        .or_else(|| candidates.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(guid: &str, name: &str) -> Project {
        Project {
            guid: guid.into(),
            name: name.into(),
        }
    }

    #[test]
    fn single_substring_candidate_is_unique() {
        let directory = vec![project("1", "Acme Corp"), project("2", "Other")];
        match reconcile("Acme", &directory) {
            Reconciliation::Unique(p) => assert_eq!(p.guid, "1"),
            other => panic!("expected Unique, got {other:?}"),
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let directory = vec![project("1", "Acme Corp")];
        match reconcile("acme corp", &directory) {
            Reconciliation::Unique(p) => assert_eq!(p.name, "Acme Corp"),
            other => panic!("expected Unique, got {other:?}"),
        }
    }

    #[test]
    fn several_candidates_are_ambiguous() {
        let directory = vec![project("1", "Acme Corp"), project("2", "Globex Corp")];
        match reconcile("Corp", &directory) {
            Reconciliation::Ambiguous(candidates) => {
                assert_eq!(candidates.len(), 2);
                assert_eq!(candidates[0].guid, "1");
                assert_eq!(candidates[1].guid, "2");
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn no_candidate_offers_the_full_directory() {
        let directory = vec![project("1", "Acme Corp"), project("2", "Globex Corp")];
        match reconcile("zzz", &directory) {
            Reconciliation::NoMatch(all) => assert_eq!(all.len(), 2),
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_title_is_the_full_directory_outcome() {
        let directory = vec![project("1", "Acme Corp"), project("2", "Globex Corp")];
        for title in ["", "   ", "\t"] {
            match reconcile(title, &directory) {
                Reconciliation::NoMatch(all) => assert_eq!(all.len(), 2),
                other => panic!("expected NoMatch for {title:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn title_longer_than_project_name_never_matches() {
        // The substring rule is one-directional: name-contains-title.
        // "Acme Corp Madrid" contains "Acme Corp", not the other way
        // around, so this is NoMatch by design.
        let directory = vec![project("1", "Acme Corp")];
        match reconcile("Acme Corp Madrid", &directory) {
            Reconciliation::NoMatch(_) => {}
            other => panic!("expected NoMatch, got {other:?}"),
        }
    }

    #[test]
    fn preferred_candidate_prefers_exact_name() {
        let candidates = vec![project("1", "Acme Corp"), project("2", "Acme")];
        let preferred = preferred_candidate("acme", &candidates).unwrap();
        assert_eq!(preferred.guid, "2");
    }

    #[test]
    fn preferred_candidate_falls_back_to_first() {
        let candidates = vec![project("1", "Acme Corp"), project("2", "Acme Madrid")];
        let preferred = preferred_candidate("acme", &candidates).unwrap();
        assert_eq!(preferred.guid, "1");
    }

    #[test]
    fn preferred_candidate_of_empty_set_is_none() {
        assert!(preferred_candidate("acme", &[]).is_none());
    }
}
