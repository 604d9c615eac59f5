//! Async REST client for a remote invoice record store.
//!
//! Talks to the `/api/invoices` endpoints with plain request/response
//! semantics: no retry, no ordering guarantee between concurrent editors
//! (last write wins at the store). Errors are classified so a caller can
//! tell a rejected payload from a missing record from a transport failure.

use serde::Deserialize;
use std::fmt;

use super::record::{InvoiceRecord, RecordDraft, RecordId};

/// Error from the remote store.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum StoreClientError {
    /// Network or HTTP transport error.
    Network(String),
    /// No record with the requested id (HTTP 404).
    NotFound,
    /// The store rejected the payload (HTTP 400); one entry per violated rule.
    Rejected(Vec<String>),
    /// The store failed internally or answered with an unexpected status.
    Api(String),
    /// Failed to parse the response body.
    Parse(String),
}

impl fmt::Display for StoreClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "store network error: {e}"),
            Self::NotFound => write!(f, "record not found"),
            Self::Rejected(rules) => write!(f, "store rejected input: {}", rules.join("; ")),
            Self::Api(e) => write!(f, "store API error: {e}"),
            Self::Parse(e) => write!(f, "store parse error: {e}"),
        }
    }
}

impl std::error::Error for StoreClientError {}

/// Error body shape used by the store API.
#[derive(Debug, Deserialize)]
struct ApiError {
    error: Option<String>,
    details: Option<Vec<String>>,
}

/// Client for the record store REST API.
pub struct StoreClient {
    base_url: String,
    client: reqwest::Client,
}

impl StoreClient {
    /// Create a client for `base_url` (e.g. "http://localhost:3000").
    pub fn new(base_url: impl Into<String>) -> Result<Self, StoreClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| StoreClientError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/api/invoices", self.base_url)
    }

    fn record_url(&self, id: RecordId) -> String {
        format!("{}/api/invoices/{}", self.base_url, id)
    }

    /// Create a record from a draft.
    pub async fn create(&self, draft: &RecordDraft) -> Result<(), StoreClientError> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| StoreClientError::Network(e.to_string()))?;
        expect_success(resp).await.map(|_| ())
    }

    /// Fetch all records, newest first.
    pub async fn list(&self) -> Result<Vec<InvoiceRecord>, StoreClientError> {
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| StoreClientError::Network(e.to_string()))?;
        let body = expect_success(resp).await?;
        serde_json::from_str(&body).map_err(|e| StoreClientError::Parse(e.to_string()))
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: RecordId) -> Result<InvoiceRecord, StoreClientError> {
        let resp = self
            .client
            .get(self.record_url(id))
            .send()
            .await
            .map_err(|e| StoreClientError::Network(e.to_string()))?;
        let body = expect_success(resp).await?;
        serde_json::from_str(&body).map_err(|e| StoreClientError::Parse(e.to_string()))
    }

    /// Replace a record's mutable fields.
    pub async fn update(&self, id: RecordId, draft: &RecordDraft) -> Result<(), StoreClientError> {
        let resp = self
            .client
            .put(self.record_url(id))
            .json(draft)
            .send()
            .await
            .map_err(|e| StoreClientError::Network(e.to_string()))?;
        expect_success(resp).await.map(|_| ())
    }

    /// Delete a record.
    pub async fn delete(&self, id: RecordId) -> Result<(), StoreClientError> {
        let resp = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| StoreClientError::Network(e.to_string()))?;
        expect_success(resp).await.map(|_| ())
    }
}

/// Map an HTTP response onto the error classification, returning the body
/// text on success.
async fn expect_success(resp: reqwest::Response) -> Result<String, StoreClientError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| StoreClientError::Network(e.to_string()))?;

    if status.is_success() {
        return Ok(body);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(StoreClientError::NotFound);
    }

    if status == reqwest::StatusCode::BAD_REQUEST {
        if let Ok(api_err) = serde_json::from_str::<ApiError>(&body) {
            if let Some(details) = api_err.details {
                return Err(StoreClientError::Rejected(details));
            }
            if let Some(error) = api_err.error {
                return Err(StoreClientError::Rejected(vec![error]));
            }
        }
        return Err(StoreClientError::Rejected(vec![body]));
    }

    Err(StoreClientError::Api(format!("HTTP {status}: {body}")))
}
