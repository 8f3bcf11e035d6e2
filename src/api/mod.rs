//! Client for the dog adoption REST API
//!
//! [`DogApi`] is the seam the workflows talk to; [`HttpClient`] implements it
//! over reqwest. Every call returns a typed value: when the service answers
//! with no body the operation falls back to an empty default, so callers
//! never deal with a missing payload.
//!
//! # Failures
//!
//! - **Transport** (no response): reported through the session notification
//!   channel and returned as [`ApiError::Transport`].
//! - **Status** (non-2xx): reported through the same channel. Under
//!   [`StatusPolicy::Lenient`] the caller then receives the default value;
//!   under [`StatusPolicy::Strict`] it receives [`ApiError::Status`].

mod client;
pub mod diagnostics;
pub mod query;

pub use client::{ClientOptions, HttpClient};

use crate::models::{
    Dog, DogSearchQuery, DogSearchResponse, Location, LocationSearchRequest,
    LocationSearchResponse, LoginRequest, MatchResponse,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Production endpoint of the service
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Errors returned by API calls
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got a response
    #[error("Network error on {method} {path}: {message}")]
    Transport {
        method: String,
        path: String,
        message: String,
    },

    /// The service answered with a non-success status
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The service answered with a body that did not decode
    #[error("Invalid response from {path}: {message}")]
    Decode { path: String, message: String },

    /// A request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The configured base URL cannot be joined with an endpoint path
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl ApiError {
    /// Shorthand for a transport failure
    #[must_use]
    pub fn transport(method: &str, path: &str, message: impl Into<String>) -> Self {
        Self::Transport {
            method: method.to_string(),
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// How non-success statuses reach the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Notify, then hand the caller the operation's default value
    #[default]
    Lenient,
    /// Notify, then return [`ApiError::Status`]
    Strict,
}

/// A non-success response, already reported to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFailure {
    pub status: u16,
    pub message: String,
}

/// Outcome of a call that reached the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    /// Success with a decoded JSON body
    Body(T),
    /// Success with no body, status 204 or a non-JSON body
    Empty,
    /// Non-success status
    Failed(StatusFailure),
}

impl<T> Fetched<T> {
    /// Collapse the outcome under `policy`
    ///
    /// `Ok(None)` means "use the default value".
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for a failed call under the strict policy.
    pub fn settle(self, policy: StatusPolicy) -> Result<Option<T>, ApiError> {
        match (self, policy) {
            (Self::Body(body), _) => Ok(Some(body)),
            (Self::Empty, _) | (Self::Failed(_), StatusPolicy::Lenient) => Ok(None),
            (Self::Failed(failure), StatusPolicy::Strict) => Err(ApiError::Status {
                status: failure.status,
                message: failure.message,
            }),
        }
    }
}

/// Operations offered by the adoption service
#[async_trait]
pub trait DogApi: Send + Sync {
    /// Start a session (`POST /auth/login`)
    ///
    /// Always fails on a non-success status, whatever the policy: a login
    /// must never look successful when it was rejected.
    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError>;

    /// End the session (`POST /auth/logout`)
    async fn logout(&self) -> Result<(), ApiError>;

    /// All breed names (`GET /dogs/breeds`)
    async fn breeds(&self) -> Result<Vec<String>, ApiError>;

    /// One page of matching identifiers (`GET /dogs/search`)
    async fn search_dogs(&self, query: &DogSearchQuery) -> Result<DogSearchResponse, ApiError>;

    /// Full records for the given identifiers (`POST /dogs`)
    async fn dogs_by_ids(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError>;

    /// Pick one identifier out of `ids` (`POST /dogs/match`)
    async fn match_dogs(&self, ids: &[String]) -> Result<MatchResponse, ApiError>;

    /// Location data for postal codes (`POST /locations`)
    async fn locations_by_zip(&self, zip_codes: &[String]) -> Result<Vec<Location>, ApiError>;

    /// Search locations by city, state or bounding box (`POST /locations/search`)
    async fn search_locations(
        &self,
        request: &LocationSearchRequest,
    ) -> Result<LocationSearchResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> Fetched<u32> {
        Fetched::Failed(StatusFailure {
            status: 400,
            message: "API Error: 400".into(),
        })
    }

    #[test]
    fn test_settle_body() {
        assert_eq!(Fetched::Body(7).settle(StatusPolicy::Strict).unwrap(), Some(7));
    }

    #[test]
    fn test_settle_empty() {
        let empty: Fetched<u32> = Fetched::Empty;
        assert_eq!(empty.settle(StatusPolicy::Strict).unwrap(), None);
    }

    #[test]
    fn test_settle_failed_lenient() {
        assert_eq!(failure().settle(StatusPolicy::Lenient).unwrap(), None);
    }

    #[test]
    fn test_settle_failed_strict() {
        let error = failure().settle(StatusPolicy::Strict).unwrap_err();
        assert_eq!(error.status(), Some(400));
        assert_eq!(error.to_string(), "API Error: 400");
    }

    #[test]
    fn test_status_policy_serde() {
        let policy: StatusPolicy = serde_json::from_str("\"strict\"").unwrap();
        assert_eq!(policy, StatusPolicy::Strict);
        assert_eq!(StatusPolicy::default(), StatusPolicy::Lenient);
    }

    #[test]
    fn test_transport_display() {
        let error = ApiError::transport("GET", "/dogs/breeds", "refused");
        assert_eq!(error.to_string(), "Network error on GET /dogs/breeds: refused");
        assert!(error.status().is_none());
    }
}
