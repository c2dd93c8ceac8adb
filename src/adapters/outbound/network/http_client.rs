use super::json_decoder;
use crate::shared::error::ResolutionError;
use crate::shared::{ResolutionResult, Result};
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default timeout applied to every request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// JsonHttpClient performs GET requests and decodes JSON responses
///
/// Wraps a single `reqwest::Client`; clones share its connection pool, so
/// the registry and advisory adapters can be built from one instance.
#[derive(Clone)]
pub struct JsonHttpClient {
    client: reqwest::Client,
}

impl JsonHttpClient {
    /// Creates a client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("package-finder/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` and decodes the body into `T`.
    ///
    /// # Errors
    /// - `Transport` if the request cannot be sent or the body cannot be read
    /// - `HttpStatus` for any non-success status (the body is not decoded)
    /// - `Decode` if the body is not JSON of the expected shape
    pub async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> ResolutionResult<T> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| ResolutionError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolutionError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ResolutionError::Transport {
                url: url.to_string(),
                source,
            })?;

        json_decoder::decode(&body).map_err(|source| ResolutionError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

/// Parses a configured base URL, accepting only absolute http(s) URLs
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|e| anyhow::anyhow!("Invalid base URL '{}': {}", base, e))?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!(
            "Invalid base URL '{}': only http and https are supported",
            base
        );
    }
    if url.cannot_be_a_base() {
        anyhow::bail!("Invalid base URL '{}': cannot be used as a base", base);
    }

    Ok(url)
}

/// Appends percent-encoded path segments to `base`
///
/// Each segment is encoded as a single path segment, so `/`, `?`, `#` or
/// spaces inside a segment never change the structure of the URL.
///
/// `.` and `..` are rejected with `InvalidUrl`: URL normalization resolves
/// them (even in their `%2E` form) instead of sending them as segments.
pub fn append_segments(base: &Url, segments: &[&str]) -> ResolutionResult<Url> {
    if let Some(dot) = segments.iter().find(|s| matches!(**s, "." | "..")) {
        return Err(ResolutionError::InvalidUrl {
            url: base.to_string(),
            details: format!("path segment '{}' is a dot segment", dot),
        });
    }

    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| ResolutionError::InvalidUrl {
                url: base.to_string(),
                details: "cannot be used as a base".to_string(),
            })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}
