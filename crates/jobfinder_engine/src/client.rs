use std::time::Duration;

use finder_logging::{finder_debug, finder_info};
use futures_util::StreamExt;
use jobfinder_core::{JobRecord, JobSearchResponse, SearchCriteria};
use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::{search_endpoint, SearchError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Longest slice of an error body kept for diagnostics, in characters.
const DETAIL_LIMIT: usize = 512;
/// Bytes read from an error body; enough for `DETAIL_LIMIT` characters.
const DETAIL_BYTES: u64 = 4 * DETAIL_LIMIT as u64;

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub base_url: String,
    /// `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
    /// `None` keeps the transport default (no overall deadline).
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    /// Performs exactly one search request. No retries.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<JobRecord>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    settings: SearchSettings,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<JobRecord>, SearchError> {
        let endpoint = search_endpoint(&self.settings.base_url)?;
        let body =
            serde_json::to_vec(criteria).map_err(|err| SearchError::Encode(err.to_string()))?;
        let client = self.build_client()?;

        finder_debug!("POST {} ({} bytes)", endpoint, body.len());
        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let limit = self.settings.max_bytes.min(DETAIL_BYTES);
            let detail = match read_capped(response, limit).await {
                Ok((bytes, _)) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(err) => {
                    finder_debug!("Could not read error body: {}", err);
                    String::new()
                }
            };
            return Err(SearchError::HttpStatus {
                status: status.as_u16(),
                detail: truncate(detail.trim(), DETAIL_LIMIT),
            });
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(SearchError::TooLarge {
                    max_bytes: self.settings.max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let (bytes, overflow) = read_capped(response, self.settings.max_bytes)
            .await
            .map_err(map_reqwest_error)?;
        if let Some(actual) = overflow {
            return Err(SearchError::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            });
        }

        let decoded: JobSearchResponse = serde_json::from_slice(&bytes)
            .map_err(|err| SearchError::MalformedResponse(err.to_string()))?;
        finder_info!(
            "Search returned {} jobs ({} bytes)",
            decoded.relevant_jobs.len(),
            bytes.len()
        );
        Ok(decoded.relevant_jobs)
    }
}

/// Streams at most `limit` bytes of the body and stops there.
///
/// The second value is the length seen when the body ran past `limit`.
async fn read_capped(
    response: reqwest::Response,
    limit: u64,
) -> Result<(Vec<u8>, Option<u64>), reqwest::Error> {
    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        let next_len = bytes.len() as u64 + chunk.len() as u64;
        if next_len > limit {
            let room = (limit - bytes.len() as u64) as usize;
            bytes.extend_from_slice(&chunk[..room]);
            return Ok((bytes, Some(next_len)));
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok((bytes, None))
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::Timeout(err.to_string());
    }
    SearchError::Network(err.to_string())
}

fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
