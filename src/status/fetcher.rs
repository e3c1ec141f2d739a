//! HTTP retrieval of the status document.
//!
//! # Responsibilities
//! - One GET per check run, no retries
//! - Map transport, status and parse failures to FetchError

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use url::Url;

use crate::status::document::StatusDocument;
use crate::status::error::{FetchError, FetchResult};

const USER_AGENT: &str = concat!("check_nginx_upstreams/", env!("CARGO_PKG_VERSION"));

/// Fetches and parses the upstream status endpoint.
#[derive(Debug, Clone)]
pub struct StatusFetcher {
    client: Client,
}

impl StatusFetcher {
    /// Build a fetcher. `no_proxy` bypasses proxies from the environment.
    pub fn new(no_proxy: bool) -> FetchResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if no_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(FetchError::Client)?;

        Ok(Self { client })
    }

    /// GET `url` and parse the body as a status document.
    pub async fn fetch(&self, url: &Url) -> FetchResult<StatusDocument> {
        tracing::debug!(url = %url, "Fetching upstream status");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = %status, "Status endpoint returned error");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        let document = StatusDocument::from_slice(&body)?;
        tracing::debug!(
            servers = document.records().len(),
            generation = ?document.servers.generation,
            "Status document parsed"
        );

        Ok(document)
    }
}
