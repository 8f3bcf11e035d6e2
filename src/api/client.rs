//! Reqwest-backed implementation of [`DogApi`]
//!
//! The client owns transport details only: cookie-carrying requests, header
//! merging, status interpretation and JSON decoding. Failures are reported to
//! the [`SessionStore`] notification channel before they are returned.

use super::diagnostics::{display_path, network_message, status_message};
use super::query::apply_search_query;
use super::{ApiError, DEFAULT_BASE_URL, DogApi, Fetched, StatusFailure, StatusPolicy};
use crate::models::{
    Dog, DogSearchQuery, DogSearchResponse, Location, LocationSearchRequest,
    LocationSearchResponse, LoginRequest, MatchResponse,
};
use crate::session::SessionStore;
use crate::ui::output::Notifier;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Connection settings for [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Root of the service; endpoint paths are joined onto it
    pub base_url: Url,
    /// Overall request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// How non-success statuses reach callers
    pub policy: StatusPolicy,
    /// Extra headers sent with every request, overriding the defaults
    pub headers: HeaderMap,
}

impl ClientOptions {
    /// Options for `base_url` with default policy and no timeout
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if `base_url` does not parse.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            timeout: None,
            policy: StatusPolicy::default(),
            headers: HeaderMap::new(),
        })
    }

    /// Options for the production service
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature mirrors [`ClientOptions::new`].
    pub fn production() -> Result<Self, ApiError> {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Set the request timeout
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the status policy
    #[must_use]
    pub const fn with_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add a header sent with every request
    #[must_use]
    pub fn with_header(mut self, name: reqwest::header::HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// HTTP implementation of the adoption API
pub struct HttpClient {
    client: Client,
    base_url: Url,
    policy: StatusPolicy,
    headers: HeaderMap,
    session: Arc<SessionStore>,
}

impl HttpClient {
    /// Build a client that keeps session cookies between calls
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Client`] when the reqwest client cannot be built.
    pub fn new(options: ClientOptions, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: options.base_url,
            policy: options.policy,
            headers: options.headers,
            session,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    fn merged_headers(&self, extra: &HeaderMap) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        for (name, value) in self.headers.iter().chain(extra.iter()) {
            headers.insert(name.clone(), value.clone());
        }
        headers
    }

    /// Perform one call and classify its outcome
    ///
    /// `extra_headers` are merged over the JSON content type and the
    /// client-wide headers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives and
    /// [`ApiError::Decode`] when a JSON body does not match `T`. Non-success
    /// statuses are not errors here; they come back as [`Fetched::Failed`].
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
        extra_headers: &HeaderMap,
    ) -> Result<Fetched<T>, ApiError> {
        let path = display_path(url.as_str()).to_string();
        debug!(%method, %path, "sending request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .headers(self.merged_headers(extra_headers));
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.transport_failure(&method, &url, &e)),
        };

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);

        if !status.is_success() {
            let body = response.text().await.ok();
            let message = status_message(
                status,
                &method,
                url.as_str(),
                content_type.as_deref(),
                body.as_deref(),
            );
            warn!(%method, %path, status = status.as_u16(), "request failed");
            if status == StatusCode::UNAUTHORIZED {
                self.session.set_logged_in(false);
            }
            self.session.error(&message);
            return Ok(Fetched::Failed(StatusFailure {
                status: status.as_u16(),
                message,
            }));
        }

        debug!(%method, %path, status = status.as_u16(), "request succeeded");
        if status == StatusCode::NO_CONTENT {
            return Ok(Fetched::Empty);
        }
        let Some(content_type) = content_type else {
            return Ok(Fetched::Empty);
        };
        if !content_type.contains(JSON_CONTENT_TYPE) {
            warn!(%path, %content_type, "ignoring non-JSON success response");
            return Ok(Fetched::Empty);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_failure(&method, &url, &e))?;
        if bytes.is_empty() {
            return Ok(Fetched::Empty);
        }

        serde_json::from_slice(&bytes).map(Fetched::Body).map_err(|e| {
            error!(%method, %path, error = %e, "response body did not decode");
            self.session
                .error(&format!("Invalid response: {e} on {method} {path}"));
            ApiError::Decode {
                path,
                message: e.to_string(),
            }
        })
    }

    fn transport_failure(&self, method: &Method, url: &Url, error: &reqwest::Error) -> ApiError {
        let path = display_path(url.as_str());
        error!(%method, %path, error = %error, "request did not complete");
        self.session
            .error(&network_message(&error.to_string(), method, url.as_str()));
        ApiError::transport(method.as_str(), path, error.to_string())
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Fetched<T>, ApiError> {
        self.fetch(Method::GET, url, None, &HeaderMap::new()).await
    }

    async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<Fetched<T>, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = body.map(serde_json::to_vec).transpose()?;
        self.fetch(Method::POST, self.endpoint(path)?, body, &HeaderMap::new())
            .await
    }
}

#[async_trait]
impl DogApi for HttpClient {
    async fn login(&self, request: &LoginRequest) -> Result<(), ApiError> {
        let fetched: Fetched<IgnoredAny> = self.post("auth/login", Some(request)).await?;
        fetched.settle(StatusPolicy::Strict)?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let fetched: Fetched<IgnoredAny> = self.post::<(), _>("auth/logout", None).await?;
        fetched.settle(self.policy)?;
        Ok(())
    }

    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        let fetched = self.get(self.endpoint("dogs/breeds")?).await?;
        Ok(fetched.settle(self.policy)?.unwrap_or_default())
    }

    async fn search_dogs(&self, query: &DogSearchQuery) -> Result<DogSearchResponse, ApiError> {
        let mut url = self.endpoint("dogs/search")?;
        apply_search_query(&mut url, query);
        let fetched = self.get(url).await?;
        Ok(fetched.settle(self.policy)?.unwrap_or_default())
    }

    async fn dogs_by_ids(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        let fetched = self.post("dogs", Some(ids)).await?;
        Ok(fetched.settle(self.policy)?.unwrap_or_default())
    }

    async fn match_dogs(&self, ids: &[String]) -> Result<MatchResponse, ApiError> {
        let fetched = self.post("dogs/match", Some(ids)).await?;
        Ok(fetched.settle(self.policy)?.unwrap_or_default())
    }

    async fn locations_by_zip(&self, zip_codes: &[String]) -> Result<Vec<Location>, ApiError> {
        let fetched = self.post("locations", Some(zip_codes)).await?;
        Ok(fetched.settle(self.policy)?.unwrap_or_default())
    }

    async fn search_locations(
        &self,
        request: &LocationSearchRequest,
    ) -> Result<LocationSearchResponse, ApiError> {
        let fetched = self.post("locations/search", Some(request)).await?;
        Ok(fetched.settle(self.policy)?.unwrap_or_default())
    }
}
