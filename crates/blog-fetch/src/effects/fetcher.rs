use tracing::{debug, info, warn};

use crate::core::{index_url, is_redirect, parse_url, post_url, resolve_location};
use crate::data::{FetchResult, FetcherConfig};
use crate::effects::http::HttpClient;
use crate::error::{FetchError, Result};

/// Fetches posts from the origin it was built with.
///
/// Holds no mutable state after construction, so a single instance can be
/// shared across tasks and called concurrently.
#[derive(Debug)]
pub struct BlogPostFetcher<C: HttpClient> {
    client: C,
    config: FetcherConfig,
}

#[cfg(feature = "reqwest")]
impl BlogPostFetcher<crate::effects::http::ReqwestClient> {
    /// Create a fetcher backed by its own reqwest client.
    ///
    /// The origin is not validated until the first fetch.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = crate::effects::http::ReqwestClient::new(&config)?;
        Ok(Self::with_client(client, config))
    }
}

impl<C: HttpClient> BlogPostFetcher<C> {
    /// Create a fetcher over any [`HttpClient`].
    pub fn with_client(client: C, config: FetcherConfig) -> Self {
        debug!(
            origin = %config.base_origin,
            follow_redirects = config.follow_redirects,
            max_redirects = config.max_redirects,
            form_encode_requests = config.form_encode_requests,
            "fetcher configured"
        );
        Self { client, config }
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// Fetch a single post: `GET {origin}/{identifier}/?json=1`.
    pub async fn fetch_post(&self, identifier: &str) -> Result<FetchResult> {
        self.get(&post_url(&self.config.base_origin, identifier)).await
    }

    /// Fetch the site index: `GET {origin}/?json=1`.
    pub async fn fetch_index(&self) -> Result<FetchResult> {
        self.get(&index_url(&self.config.base_origin)).await
    }

    async fn get(&self, target: &str) -> Result<FetchResult> {
        let mut url = parse_url(target)?;
        let mut redirects = 0u32;

        loop {
            let response = self.client.get(&url).await.map_err(Into::<FetchError>::into)?;
            info!(method = "GET", %url, status = response.status, hop = redirects, "response");

            let follow = self.config.follow_redirects && is_redirect(response.status);
            let location = match response.location {
                Some(ref location) if follow => location,
                _ => {
                    return Ok(FetchResult {
                        body_text: response.body,
                        status: response.status,
                        url: url.into(),
                        redirects,
                    });
                }
            };

            if redirects >= self.config.max_redirects {
                warn!(%url, limit = self.config.max_redirects, "too many redirects");
                return Err(FetchError::TooManyRedirects {
                    limit: self.config.max_redirects,
                });
            }

            url = resolve_location(&url, location)?;
            redirects += 1;
        }
    }
}
