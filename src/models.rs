//! Wire types for the dog adoption API
//!
//! Field names follow the JSON the service sends and expects. Records are
//! treated as immutable snapshots: a new fetch replaces them wholesale.

use serde::{Deserialize, Serialize};

/// One adoptable dog as returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Opaque identifier
    pub id: String,
    /// Image URL
    pub img: String,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Postal code of the shelter
    pub zip_code: String,
    /// Breed label
    pub breed: String,
}

/// A postal code with its geographic data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub state: String,
    pub county: String,
}

/// Latitude/longitude pair used by bounding-box searches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Response of the dog search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DogSearchResponse {
    /// Identifiers on this result page
    pub result_ids: Vec<String>,
    /// Total number of matches across all pages
    pub total: u64,
    /// Query string for the next page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Query string for the previous page, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Body of the login call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
}

/// Filter for the dog search endpoint
///
/// Every field is optional; unset or empty fields are left out of the
/// query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogSearchQuery {
    pub breeds: Option<Vec<String>>,
    pub zip_codes: Option<Vec<String>>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    /// Server-side page size
    pub size: Option<u32>,
    /// Server-side cursor
    pub from: Option<String>,
    /// Sort directive, e.g. `breed:asc`
    pub sort: Option<String>,
}

impl DogSearchQuery {
    /// Query for a single optional breed with the given sort
    #[must_use]
    pub fn for_breed(breed: Option<&str>, sort: Option<&str>) -> Self {
        Self {
            breeds: breed.map(|b| vec![b.to_string()]),
            sort: sort.map(ToString::to_string),
            ..Self::default()
        }
    }

    /// Set the server-side page size
    #[must_use]
    pub const fn with_size(mut self, size: Option<u32>) -> Self {
        self.size = size;
        self
    }
}

/// Result of the match endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Identifier picked by the service; empty when nothing matched
    #[serde(rename = "match")]
    pub matched: String,
}

/// Corners and edges of a geographic search box
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoBoundingBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<Coordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left: Option<Coordinates>,
}

/// Body of the location search call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_bounding_box: Option<GeoBoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
}

/// Response of the location search call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationSearchResponse {
    pub results: Vec<Location>,
    pub total: u64,
}
