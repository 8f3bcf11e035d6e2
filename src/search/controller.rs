//! Search state machine and breed list loading

use super::pagination::{PAGE_SIZES, Pager};
use crate::api::{ApiError, DogApi};
use crate::models::{Dog, DogSearchQuery};
use tracing::{debug, info, warn};

/// Sort directive used when none is configured
pub const DEFAULT_SORT: &str = "breed:asc";

/// Where the current search stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    /// No search issued yet
    #[default]
    Idle,
    /// A search is in flight
    Searching,
    /// The last search returned records
    Ready,
    /// The last search returned nothing, or failed
    Empty,
}

/// Holds the full result set for the current filter and the page over it
#[derive(Debug, Clone)]
pub struct SearchController {
    results: Vec<Dog>,
    pager: Pager,
    phase: SearchPhase,
    selected_breed: Option<String>,
    sort: Option<String>,
    server_size: Option<u32>,
    breeds: Vec<String>,
    breeds_loading: bool,
    breeds_loaded: bool,
}

impl SearchController {
    /// A controller showing `page_size` records per page, sorted by `sort`
    #[must_use]
    pub fn new(page_size: usize, sort: Option<String>) -> Self {
        Self {
            results: Vec::new(),
            pager: Pager::new(page_size),
            phase: SearchPhase::Idle,
            selected_breed: None,
            sort,
            server_size: None,
            breeds: Vec::new(),
            breeds_loading: false,
            breeds_loaded: false,
        }
    }

    /// Ask the service for up to `size` identifiers per search
    #[must_use]
    pub const fn with_server_size(mut self, size: Option<u32>) -> Self {
        self.server_size = size;
        self
    }

    #[must_use]
    pub const fn phase(&self) -> SearchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    /// Every record of the last search
    #[must_use]
    pub fn results(&self) -> &[Dog] {
        &self.results
    }

    #[must_use]
    pub fn total_results(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.pager.page()
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.pager.size()
    }

    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.results.len())
    }

    /// Records on the current page
    #[must_use]
    pub fn visible_page(&self) -> &[Dog] {
        self.pager.slice(&self.results)
    }

    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pager.has_next(self.results.len())
    }

    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pager.has_prev()
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.results.len());
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    /// Change the page size and go back to page 1
    pub fn set_page_size(&mut self, size: usize) {
        self.pager.set_size(size);
        debug!(size, "page size changed");
    }

    /// Step through the offered page sizes
    pub fn cycle_page_size(&mut self, forward: bool) {
        let next = super::pagination::cycle_page_size(self.pager.size(), forward);
        self.set_page_size(next);
    }

    #[must_use]
    pub fn selected_breed(&self) -> Option<&str> {
        self.selected_breed.as_deref()
    }

    /// Change the breed filter and go back to page 1
    ///
    /// The new filter only takes effect on the next search.
    pub fn select_breed(&mut self, breed: Option<String>) {
        self.selected_breed = breed.filter(|b| !b.is_empty());
        self.pager.reset();
    }

    /// The query the next search will send
    #[must_use]
    pub fn query(&self) -> DogSearchQuery {
        DogSearchQuery::for_breed(self.selected_breed.as_deref(), self.sort.as_deref())
            .with_size(self.server_size)
    }

    /// Reset the state for a new search and return its query
    ///
    /// Clears the held results and returns to page 1.
    pub fn begin_search(&mut self) -> DogSearchQuery {
        self.results.clear();
        self.pager.reset();
        self.phase = SearchPhase::Searching;
        let query = self.query();
        debug!(?query, "search started");
        query
    }

    /// Store the outcome of a search
    ///
    /// A failure clears the results; it has already been reported by the
    /// client.
    pub fn complete_search(&mut self, outcome: Result<Vec<Dog>, ApiError>) {
        match outcome {
            Ok(dogs) => {
                info!(count = dogs.len(), "search finished");
                self.results = dogs;
            }
            Err(e) => {
                warn!(error = %e, "search failed");
                self.results.clear();
            }
        }
        self.pager.reset();
        self.phase = if self.results.is_empty() {
            SearchPhase::Empty
        } else {
            SearchPhase::Ready
        };
    }

    /// Run a full search with the current filter
    pub async fn run_search<A: DogApi + ?Sized>(&mut self, api: &A) {
        let query = self.begin_search();
        let outcome = fetch_filtered_dogs(api, &query).await;
        self.complete_search(outcome);
    }

    #[must_use]
    pub fn breeds(&self) -> &[String] {
        &self.breeds
    }

    #[must_use]
    pub const fn breeds_loading(&self) -> bool {
        self.breeds_loading
    }

    /// Whether a breed load has finished, successfully or not
    #[must_use]
    pub const fn breeds_loaded(&self) -> bool {
        self.breeds_loaded
    }

    /// Mark the breed list as loading
    pub fn begin_breeds_load(&mut self) {
        self.breeds_loading = true;
    }

    /// Store a loaded breed list; a failure leaves an empty list
    pub fn complete_breeds_load(&mut self, outcome: Result<Vec<String>, ApiError>) {
        match outcome {
            Ok(breeds) => {
                debug!(count = breeds.len(), "breeds loaded");
                self.breeds = breeds;
            }
            Err(e) => {
                warn!(error = %e, "failed to load breeds");
                self.breeds.clear();
            }
        }
        self.breeds_loading = false;
        self.breeds_loaded = true;
    }

    /// Fetch the breed list
    pub async fn load_breeds<A: DogApi + ?Sized>(&mut self, api: &A) {
        self.begin_breeds_load();
        let outcome = api.breeds().await;
        self.complete_breeds_load(outcome);
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(PAGE_SIZES[0], Some(DEFAULT_SORT.to_string()))
    }
}

/// One page of search results with its records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Records in the order the service returned their ids
    pub dogs: Vec<Dog>,
    pub total: u64,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Search for identifiers, then fetch the records for exactly those ids
///
/// No record fetch happens when the search returns no identifiers.
///
/// # Errors
///
/// Returns the first [`ApiError`] from either call.
pub async fn fetch_search_page<A: DogApi + ?Sized>(
    api: &A,
    query: &DogSearchQuery,
) -> Result<SearchPage, ApiError> {
    let response = api.search_dogs(query).await?;
    let dogs = if response.result_ids.is_empty() {
        Vec::new()
    } else {
        api.dogs_by_ids(&response.result_ids).await?
    };
    Ok(SearchPage {
        dogs,
        total: response.total,
        next: response.next,
        prev: response.prev,
    })
}

/// Records only, see [`fetch_search_page`]
///
/// # Errors
///
/// Returns the first [`ApiError`] from either call.
pub async fn fetch_filtered_dogs<A: DogApi + ?Sized>(
    api: &A,
    query: &DogSearchQuery,
) -> Result<Vec<Dog>, ApiError> {
    fetch_search_page(api, query).await.map(|page| page.dogs)
}
