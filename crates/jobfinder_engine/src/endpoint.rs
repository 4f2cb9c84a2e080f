use url::Url;

use crate::SearchError;

/// Path of the search operation on the backend.
pub const SEARCH_PATH: &str = "/api/jobs/search";

/// Builds the search URL from the backend base URL.
pub fn search_endpoint(base_url: &str) -> Result<Url, SearchError> {
    let base = base_url.trim().trim_end_matches('/');
    let invalid = |message: String| SearchError::InvalidEndpoint {
        url: base_url.to_string(),
        message,
    };

    let url = Url::parse(&format!("{base}{SEARCH_PATH}")).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(invalid("expected an http(s) URL with a host".to_string()));
    }
    Ok(url)
}
