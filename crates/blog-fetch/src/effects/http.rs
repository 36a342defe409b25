use std::future::Future;

use url::Url;

use crate::error::FetchError;

/// A fully buffered response to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Numeric HTTP status code.
    pub status: u16,

    /// `Location` header, if present.
    pub location: Option<String>,

    /// Body decoded as text.
    pub body: String,
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations issue exactly one GET per call and must NOT follow
/// redirects: the fetcher counts hops itself.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Into<FetchError> + Send + 'static;

    /// Issue a GET request and buffer the whole response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure (DNS, refused connection,
    /// timeout, body read). Non-2xx statuses are NOT errors.
    fn get(&self, url: &Url) -> impl Future<Output = Result<RawResponse, Self::Error>> + Send;
}

/// Decode a raw `Location` header value.
///
/// Servers send UTF-8 permalinks unescaped; those are kept as text and
/// percent-encoded later by URL resolution. Bytes that are not UTF-8 are an
/// error rather than a missing header.
#[cfg_attr(not(feature = "reqwest"), allow(dead_code))]
pub(crate) fn decode_location(raw: &[u8]) -> Result<String, FetchError> {
    std::str::from_utf8(raw)
        .map(str::to_owned)
        .map_err(|e| FetchError::InvalidUrl(format!("location header is not UTF-8: {e}")))
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::FetcherConfig;
    use reqwest::redirect::Policy;

    /// Production HTTP client implementation using reqwest.
    ///
    /// Each instance owns its own connection pool.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Build a client honouring the timeout and user agent of `config`.
        pub fn new(config: &FetcherConfig) -> crate::error::Result<Self> {
            let mut builder = reqwest::Client::builder().redirect(Policy::none());

            if let Some(timeout) = config.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(ref user_agent) = config.user_agent {
                builder = builder.user_agent(user_agent.as_str());
            }

            let client = builder
                .build()
                .map_err(|e| FetchError::Client(e.to_string()))?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = FetchError;

        async fn get(&self, url: &Url) -> Result<RawResponse, Self::Error> {
            let response = self.client.get(url.clone()).send().await?;
            let status = response.status().as_u16();
            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .map(|v| decode_location(v.as_bytes()))
                .transpose()?;

            // Note: does not deal with streaming
            let body = response.text().await?;

            Ok(RawResponse {
                status,
                location,
                body,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_location_ascii() {
        assert_eq!(decode_location(b"/2015/sake/?json=1").unwrap(), "/2015/sake/?json=1");
    }

    #[test]
    fn test_decode_location_utf8() {
        let raw = "/2015/caf\u{e9}/?json=1";
        assert_eq!(decode_location(raw.as_bytes()).unwrap(), raw);
    }

    #[test]
    fn test_decode_location_invalid_bytes() {
        let err = decode_location(b"/2015/caf\xe9/").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
