//! Testing utilities for dogfinder
//!
//! [`FakeApi`] is a scripted, in-memory [`DogApi`] that records which
//! operations were called, so workflow tests can assert on remote traffic
//! without a server.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, DogApi};
use crate::models::{
    Dog, DogSearchQuery, DogSearchResponse, Location, LocationSearchRequest,
    LocationSearchResponse, LoginRequest, MatchResponse,
};
use crate::ui::{Severity, StatusBarWriter};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Build a dog record with predictable fields
#[must_use]
pub fn dog(id: &str, breed: &str) -> Dog {
    Dog {
        id: id.to_string(),
        img: format!("https://img.test/{id}.jpg"),
        name: format!("Dog {id}"),
        age: 3,
        zip_code: "10001".to_string(),
        breed: breed.to_string(),
    }
}

/// Build `count` dogs with ids `d0`, `d1`, ...
#[must_use]
pub fn dogs(count: usize) -> Vec<Dog> {
    (0..count).map(|i| dog(&format!("d{i}"), "Mutt")).collect()
}

/// Build a location record for `zip_code`
#[must_use]
pub fn location(zip_code: &str, city: &str, state: &str) -> Location {
    Location {
        zip_code: zip_code.to_string(),
        latitude: 40.0,
        longitude: -73.0,
        city: city.to_string(),
        state: state.to_string(),
        county: "Test".to_string(),
    }
}

/// Result lines a command wrote, in order
#[must_use]
pub fn result_lines(out: &StatusBarWriter) -> Vec<String> {
    out.recent_messages()
        .into_iter()
        .filter(|(severity, _)| *severity == Severity::Normal)
        .map(|(_, line)| line)
        .collect()
}

/// Scripted API double
#[derive(Default)]
pub struct FakeApi {
    breeds: Vec<String>,
    search_ids: Vec<String>,
    catalogue: Vec<Dog>,
    match_id: String,
    next: Option<String>,
    prev: Option<String>,
    locations: Vec<Location>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<&'static str>>,
    searches: Mutex<Vec<DogSearchQuery>>,
    id_requests: Mutex<Vec<Vec<String>>>,
}

impl FakeApi {
    /// An API that answers every call with empty results
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Breed list returned by `breeds`
    #[must_use]
    pub fn with_breeds(mut self, breeds: &[&str]) -> Self {
        self.breeds = breeds.iter().map(ToString::to_string).collect();
        self
    }

    /// Identifiers returned by `search_dogs`
    #[must_use]
    pub fn with_search_ids(mut self, ids: &[&str]) -> Self {
        self.search_ids = ids.iter().map(ToString::to_string).collect();
        self
    }

    /// Cursors returned by `search_dogs`
    #[must_use]
    pub fn with_cursors(mut self, next: Option<&str>, prev: Option<&str>) -> Self {
        self.next = next.map(ToString::to_string);
        self.prev = prev.map(ToString::to_string);
        self
    }

    /// Records known to `dogs_by_ids`
    #[must_use]
    pub fn with_catalogue(mut self, dogs: Vec<Dog>) -> Self {
        self.catalogue = dogs;
        self
    }

    /// Search returns every catalogue id, and fetch-by-ids knows them all
    #[must_use]
    pub fn with_results(mut self, dogs: Vec<Dog>) -> Self {
        self.search_ids = dogs.iter().map(|d| d.id.clone()).collect();
        self.catalogue = dogs;
        self
    }

    /// Identifier returned by `match_dogs`
    #[must_use]
    pub fn with_match(mut self, id: &str) -> Self {
        self.match_id = id.to_string();
        self
    }

    /// Records returned by the location calls
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    /// Make `operation` fail with a transport error
    #[must_use]
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Number of calls made to `operation`
    #[must_use]
    pub fn calls(&self, operation: &str) -> usize {
        self.lock_calls().iter().filter(|c| **c == operation).count()
    }

    /// Number of calls made to any operation
    #[must_use]
    pub fn total_calls(&self) -> usize {
        self.lock_calls().len()
    }

    /// Operations in call order
    #[must_use]
    pub fn call_log(&self) -> Vec<&'static str> {
        self.lock_calls().clone()
    }

    /// Queries passed to `search_dogs`
    #[must_use]
    pub fn searches(&self) -> Vec<DogSearchQuery> {
        self.searches.lock().unwrap().clone()
    }

    /// Identifier lists passed to `dogs_by_ids` and `match_dogs`
    #[must_use]
    pub fn id_requests(&self) -> Vec<Vec<String>> {
        self.id_requests.lock().unwrap().clone()
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<&'static str>> {
        self.calls.lock().unwrap()
    }

    fn record(&self, operation: &'static str) -> Result<(), ApiError> {
        self.lock_calls().push(operation);
        if self.failing.contains(operation) {
            Err(ApiError::transport("TEST", operation, "scripted failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl DogApi for FakeApi {
    async fn login(&self, _request: &LoginRequest) -> Result<(), ApiError> {
        self.record("login")
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout")
    }

    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        self.record("breeds")?;
        Ok(self.breeds.clone())
    }

    async fn search_dogs(&self, query: &DogSearchQuery) -> Result<DogSearchResponse, ApiError> {
        self.searches.lock().unwrap().push(query.clone());
        self.record("search_dogs")?;
        Ok(DogSearchResponse {
            result_ids: self.search_ids.clone(),
            total: self.search_ids.len() as u64,
            next: self.next.clone(),
            prev: self.prev.clone(),
        })
    }

    async fn dogs_by_ids(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        self.id_requests.lock().unwrap().push(ids.to_vec());
        self.record("dogs_by_ids")?;
        Ok(ids
            .iter()
            .filter_map(|id| self.catalogue.iter().find(|d| d.id == *id).cloned())
            .collect())
    }

    async fn match_dogs(&self, ids: &[String]) -> Result<MatchResponse, ApiError> {
        self.id_requests.lock().unwrap().push(ids.to_vec());
        self.record("match_dogs")?;
        Ok(MatchResponse {
            matched: self.match_id.clone(),
        })
    }

    async fn locations_by_zip(&self, zip_codes: &[String]) -> Result<Vec<Location>, ApiError> {
        self.record("locations_by_zip")?;
        Ok(self
            .locations
            .iter()
            .filter(|l| zip_codes.contains(&l.zip_code))
            .cloned()
            .collect())
    }

    async fn search_locations(
        &self,
        request: &LocationSearchRequest,
    ) -> Result<LocationSearchResponse, ApiError> {
        self.record("search_locations")?;
        let results: Vec<Location> = self
            .locations
            .iter()
            .filter(|l| request.city.as_ref().is_none_or(|city| l.city == *city))
            .cloned()
            .collect();
        Ok(LocationSearchResponse {
            total: results.len() as u64,
            results,
        })
    }
}
