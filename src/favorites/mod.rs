//! Favorites and the match workflow
//!
//! Favorites are a local set of dog identifiers. Asking for a match sends
//! that set to the service, which picks one; the chosen record is then
//! fetched and revealed in a modal.

mod matching;

pub use matching::{
    MatchOutcome, MatchWorkflow, compute_match, fetch_match_details, find_match, find_match_with,
};

use std::collections::BTreeSet;

/// Identifiers the user marked as favorites
///
/// Iteration is in sorted order so requests built from the set are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: BTreeSet<String>,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present
    ///
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Identifiers in sorted order
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
