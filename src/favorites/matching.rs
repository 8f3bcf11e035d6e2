//! Match workflow
//!
//! A match is two remote steps in sequence: the service picks one of the
//! favorited ids, then the record for that id is fetched and revealed.
//! [`MatchWorkflow`] tracks which step is in flight.

use super::Favorites;
use crate::api::{ApiError, DogApi};
use crate::models::Dog;
use crate::ui::output::{Notifier, Severity};
use tracing::{debug, info, warn};

/// How a match request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A dog was matched and its record fetched
    Revealed(Dog),
    /// The favorites set was empty; nothing was sent
    NoFavorites,
    /// The service picked no dog
    NoMatch,
    /// The match call failed
    MatchFailed,
    /// The dog was matched but its record could not be fetched
    DetailsFailed,
    /// The dog was matched but no record came back for it
    DetailsMissing,
}

impl MatchOutcome {
    /// User-facing message for every outcome except a reveal
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Revealed(_) => None,
            Self::NoFavorites => Some("Please add dogs to favorites first!"),
            Self::NoMatch => Some("Sorry, couldn't find a match based on your favorites."),
            Self::MatchFailed => Some("An error occurred during the matching process."),
            Self::DetailsFailed => Some("An error occurred while fetching match details."),
            Self::DetailsMissing => Some("Could not fetch details for your matched dog."),
        }
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Revealed(_) => Severity::Success,
            Self::NoFavorites | Self::NoMatch => Severity::Warning,
            Self::MatchFailed | Self::DetailsFailed | Self::DetailsMissing => Severity::Error,
        }
    }

    /// The revealed dog, if any
    #[must_use]
    pub const fn dog(&self) -> Option<&Dog> {
        match self {
            Self::Revealed(dog) => Some(dog),
            _ => None,
        }
    }
}

/// Ask the service to pick one of `ids`
///
/// An empty identifier in the response means no match.
///
/// # Errors
///
/// Returns the [`ApiError`] from the match call.
pub async fn compute_match<A: DogApi + ?Sized>(
    api: &A,
    ids: &[String],
) -> Result<Option<String>, ApiError> {
    let response = api.match_dogs(ids).await?;
    Ok(Some(response.matched).filter(|id| !id.is_empty()))
}

/// Fetch the record for a matched identifier
pub async fn fetch_match_details<A: DogApi + ?Sized>(api: &A, id: &str) -> MatchOutcome {
    match api.dogs_by_ids(&[id.to_string()]).await {
        Ok(dogs) => dogs
            .into_iter()
            .next()
            .map_or(MatchOutcome::DetailsMissing, MatchOutcome::Revealed),
        Err(e) => {
            warn!(error = %e, id, "failed to fetch matched dog");
            MatchOutcome::DetailsFailed
        }
    }
}

/// Match then fetch, strictly in sequence
pub async fn find_match<A: DogApi + ?Sized>(api: &A, ids: &[String]) -> MatchOutcome {
    find_match_with(api, ids, |_| {}).await
}

/// [`find_match`], calling `on_found` with the matched id before its record
/// is fetched
pub async fn find_match_with<A, F>(api: &A, ids: &[String], on_found: F) -> MatchOutcome
where
    A: DogApi + ?Sized,
    F: FnOnce(&str),
{
    match compute_match(api, ids).await {
        Ok(Some(id)) => {
            on_found(&id);
            fetch_match_details(api, &id).await
        }
        Ok(None) => MatchOutcome::NoMatch,
        Err(e) => {
            warn!(error = %e, "match request failed");
            MatchOutcome::MatchFailed
        }
    }
}

/// Loading and result state of the match flow
#[derive(Debug, Clone, Default)]
pub struct MatchWorkflow {
    matching: bool,
    loading_details: bool,
    matched: Option<Dog>,
    modal_open: bool,
}

impl MatchWorkflow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The match call is in flight
    #[must_use]
    pub const fn is_matching(&self) -> bool {
        self.matching
    }

    /// The matched record is being fetched
    #[must_use]
    pub const fn is_loading_details(&self) -> bool {
        self.loading_details
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.matching || self.loading_details
    }

    #[must_use]
    pub const fn matched(&self) -> Option<&Dog> {
        self.matched.as_ref()
    }

    #[must_use]
    pub const fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// Close the reveal and forget the match
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.matched = None;
    }

    /// Start a match for `favorites`
    ///
    /// Returns the identifiers to send, or `None` (after telling the user)
    /// when there is nothing to match.
    pub fn begin(&mut self, favorites: &Favorites, notifier: &dyn Notifier) -> Option<Vec<String>> {
        if favorites.is_empty() {
            report(&MatchOutcome::NoFavorites, notifier);
            return None;
        }
        self.close_modal();
        self.matching = true;
        debug!(count = favorites.len(), "match started");
        Some(favorites.ids())
    }

    /// The service picked a dog; its record is being fetched next
    pub fn begin_details(&mut self) {
        self.matching = false;
        self.loading_details = true;
        debug!("fetching match details");
    }

    /// Finish a match: reveal the dog or report why not
    ///
    /// Both loading flags are cleared whatever the outcome.
    pub fn complete(&mut self, outcome: &MatchOutcome, notifier: &dyn Notifier) {
        self.matching = false;
        self.loading_details = false;
        if let MatchOutcome::Revealed(dog) = outcome {
            info!(id = %dog.id, name = %dog.name, "match revealed");
            self.matched = Some(dog.clone());
            self.modal_open = true;
        } else {
            report(outcome, notifier);
        }
    }

    /// Run the whole match flow against `api`
    pub async fn run<A: DogApi + ?Sized>(
        &mut self,
        api: &A,
        favorites: &Favorites,
        notifier: &dyn Notifier,
    ) -> MatchOutcome {
        let Some(ids) = self.begin(favorites, notifier) else {
            return MatchOutcome::NoFavorites;
        };

        let outcome = match compute_match(api, &ids).await {
            Ok(Some(id)) => {
                self.begin_details();
                fetch_match_details(api, &id).await
            }
            Ok(None) => MatchOutcome::NoMatch,
            Err(e) => {
                warn!(error = %e, "match request failed");
                MatchOutcome::MatchFailed
            }
        };

        self.complete(&outcome, notifier);
        outcome
    }
}

fn report(outcome: &MatchOutcome, notifier: &dyn Notifier) {
    if let Some(message) = outcome.message() {
        notifier.notify(outcome.severity(), message);
    }
}
