//! Session gate: login validation, login, logout and the route guard

use crate::api::{ApiError, DogApi};
use crate::models::LoginRequest;
use crate::session::SessionStore;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{info, warn};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validation problems with the login form, one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_messages(.name, .email))]
pub struct ValidationError {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ValidationError {
    /// All field messages in form order
    #[must_use]
    pub fn messages(&self) -> Vec<&'static str> {
        self.name.into_iter().chain(self.email).collect()
    }

    const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

fn join_messages(name: &Option<&str>, email: &Option<&str>) -> String {
    name.iter().chain(email).copied().collect::<Vec<_>>().join(" ")
}

/// Login errors
#[derive(Debug, Error)]
pub enum LoginError {
    /// The form did not validate; no call was made
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// The service rejected the login or could not be reached
    #[error("Login failed: {0}")]
    Api(#[from] ApiError),
}

/// Name and email that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    name: String,
    email: String,
}

impl Credentials {
    /// Validate raw form input
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming every field that is missing or
    /// malformed.
    pub fn validate(name: &str, email: &str) -> Result<Self, ValidationError> {
        let mut errors = ValidationError::default();
        if name.trim().is_empty() {
            errors.name = Some("Name is required.");
        }
        if email.trim().is_empty() {
            errors.email = Some("Email is required.");
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.email = Some("Please enter a valid email address.");
        }

        if errors.is_empty() {
            Ok(Self {
                name: name.to_string(),
                email: email.to_string(),
            })
        } else {
            Err(errors)
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl From<&Credentials> for LoginRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            name: credentials.name.clone(),
            email: credentials.email.clone(),
        }
    }
}

/// Validate the form and start a session
///
/// On success the session flag is set. On any failure the flag is left as
/// it was and nothing is retried.
///
/// # Errors
///
/// Returns [`LoginError::Invalid`] before any remote call when the form is
/// invalid, or [`LoginError::Api`] when the service refuses.
pub async fn login<A: DogApi + ?Sized>(
    api: &A,
    session: &SessionStore,
    name: &str,
    email: &str,
) -> Result<Credentials, LoginError> {
    let credentials = Credentials::validate(name, email)?;
    api.login(&LoginRequest::from(&credentials)).await?;
    session.login(credentials.name());
    info!(user = credentials.name(), "logged in");
    Ok(credentials)
}

/// End the session
///
/// The remote call is attempted, but its outcome never blocks the logout:
/// the flag is cleared either way.
pub async fn logout<A: DogApi + ?Sized>(api: &A, session: &SessionStore) {
    if let Err(e) = api.logout().await {
        warn!(error = %e, "logout call failed; clearing session anyway");
    }
    session.logout();
    info!("logged out");
}

/// Where a protected view should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Supporting data is still loading; decide later
    Pending,
    /// Session is valid; stay on the view
    Stay,
    /// No session; go back to the entry view
    RedirectToEntry,
}

/// Decide whether a protected view may stay open
///
/// The check only runs once the view's supporting data has loaded.
#[must_use]
pub fn guard(session: &SessionStore, supporting_data_loaded: bool) -> RouteDecision {
    if !supporting_data_loaded {
        RouteDecision::Pending
    } else if session.is_logged_in() {
        RouteDecision::Stay
    } else {
        RouteDecision::RedirectToEntry
    }
}
