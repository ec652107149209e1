use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;

use crate::client::normalize::normalize_collection;
use crate::error::{OctofitError, OctofitResult};
use crate::logging::{log_debug, log_error};

/// Plain HTTP client for the OctoFit REST backend. Requests are
/// unauthenticated GETs with no timeout and no retry.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> OctofitResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and decode the body as JSON. Non-2xx statuses fail with
    /// the status code; the body of a failed response is not read.
    pub async fn get_json(&self, path: &str) -> OctofitResult<Value> {
        let url = self.endpoint_url(path);
        log_debug(&format!("Fetching {}", url));

        let response = self.client.get(&url).send().await.map_err(|e| {
            log_error(&format!("Request to {} failed: {}", url, e));
            OctofitError::RequestError(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            log_error(&format!("{} answered with status {}", url, status));
            return Err(OctofitError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        log_debug(&format!("Raw response from {}: {}", url, body));

        serde_json::from_str(&body).map_err(|e| {
            log_error(&format!("Malformed JSON from {}: {}", url, e));
            OctofitError::JsonError(e)
        })
    }

    /// Fetch one collection endpoint and normalize it to a sequence.
    pub async fn fetch_collection(&self, path: &str) -> OctofitResult<Vec<Value>> {
        let body = self.get_json(path).await?;
        let items = normalize_collection(body);
        log_debug(&format!("Normalized {} into {} records", path, items.len()));
        Ok(items)
    }
}
