use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::info;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    /// Network unreachable, DNS failure, or the timeout elapsed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Shape check run before any network activity: non-empty, has a scheme
/// separator, and mentions http somewhere. `fetch` assumes its caller
/// already did this.
pub fn validate_url(url: &str) -> bool {
    !url.is_empty() && url.contains("http") && url.contains("://")
}

/// Blocking GET with a fixed timeout, returning the response body. One
/// attempt only; a failed fetch ends the whole invocation.
pub fn fetch(url: &str) -> Result<String, FetchError> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

    info!("GET {}", url);
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.text()?)
}

// ── Tests ──
