//! Client for the four compliance endpoints.
//!
//! Every call issues exactly one request through a [`Transport`] and decodes
//! the body into a typed value. Nothing is retried.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::models::{AnalyticsData, CheckRequest, CheckResult, CountryDetail, UpdateRecord, UpdatesEnvelope};

// Characters that may not appear raw inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The body could not be read as the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The backend answered with an explicit error.
    #[error("{0}")]
    Server(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// HTTP seam: browser `fetch`, `reqwest`, or a test stub.
///
/// Implementations return [`ApiError::Network`] when no response arrives;
/// any response, whatever its status, is handed back for decoding.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
    base: String,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { transport, base }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn submit_check(&self, request: &CheckRequest) -> Result<CheckResult, ApiError> {
        let body = serde_json::to_string(request)?;
        let response = self.transport.post_json(&self.url("/check"), body).await?;
        decode(&response)
    }

    pub async fn fetch_analytics(&self) -> Result<AnalyticsData, ApiError> {
        let response = self.transport.get(&self.url("/analytics")).await?;
        decode(&response)
    }

    pub async fn fetch_country_detail(&self, id: &str) -> Result<CountryDetail, ApiError> {
        let segment = utf8_percent_encode(id, SEGMENT).to_string();
        let response = self
            .transport
            .get(&self.url(&format!("/country/{segment}")))
            .await?;
        decode(&response)
    }

    pub async fn fetch_updates(&self) -> Result<Vec<UpdateRecord>, ApiError> {
        let response = self.transport.get(&self.url("/updates")).await?;
        let envelope: UpdatesEnvelope = decode(&response)?;
        if !envelope.success {
            return Err(ApiError::Server("Failed to load updates".to_string()));
        }
        Ok(envelope.updates)
    }
}

/// Decode a response body, surfacing a declared `error` field first.
pub fn decode<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, ApiError> {
    let value: Value = serde_json::from_str(&response.body)?;

    if let Some(error) = value.get("error").filter(|error| !error.is_null()) {
        let message = error
            .as_str()
            .map_or_else(|| error.to_string(), ToString::to_string);
        return Err(ApiError::Server(message));
    }

    if !response.is_success() {
        return Err(ApiError::Server(format!("HTTP {}", response.status)));
    }

    Ok(serde_json::from_value(value)?)
}
