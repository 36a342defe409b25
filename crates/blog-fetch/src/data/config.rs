use std::time::Duration;

/// Configuration a fetcher is bound to.
///
/// The origin is not validated here; a malformed origin is reported by the
/// first request made with it.
///
/// # Examples
///
/// ```
/// use blog_fetch::FetcherConfig;
/// use std::time::Duration;
///
/// let config = FetcherConfig::new("https://blog.example.com/")
///     .max_redirects(3)
///     .timeout(Some(Duration::from_secs(10)));
///
/// assert!(config.follow_redirects);
/// assert_eq!(config.max_redirects, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Absolute URL every request is resolved against.
    pub base_origin: String,

    /// Follow 3xx responses carrying a `Location` header.
    ///
    /// Default: true
    pub follow_redirects: bool,

    /// Form-encode request bodies.
    ///
    /// Only GET is issued, so this never changes a request.
    ///
    /// Default: true
    pub form_encode_requests: bool,

    /// Maximum number of redirect hops followed per fetch.
    ///
    /// A response that would require one more hop fails with
    /// [`FetchError::TooManyRedirects`](crate::FetchError::TooManyRedirects).
    ///
    /// Default: 5
    pub max_redirects: u32,

    /// Per-request timeout, applied to every hop.
    ///
    /// Default: None
    pub timeout: Option<Duration>,

    /// Value of the `User-Agent` header.
    ///
    /// Default: None (backend default)
    pub user_agent: Option<String>,
}

impl FetcherConfig {
    /// Origin of the blog this client was written against.
    pub const DEFAULT_ORIGIN: &'static str = "http://bw-wordpress-blog.herokuapp.com/";

    /// Default redirect hop limit.
    pub const DEFAULT_MAX_REDIRECTS: u32 = 5;

    pub fn new(base_origin: impl Into<String>) -> Self {
        Self {
            base_origin: base_origin.into(),
            follow_redirects: true,
            form_encode_requests: true,
            max_redirects: Self::DEFAULT_MAX_REDIRECTS,
            timeout: None,
            user_agent: None,
        }
    }

    #[must_use]
    pub fn follow_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }

    #[must_use]
    pub fn form_encode_requests(mut self, form_encode: bool) -> Self {
        self.form_encode_requests = form_encode;
        self
    }

    #[must_use]
    pub fn max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ORIGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetcherConfig::default();
        assert_eq!(config.base_origin, "http://bw-wordpress-blog.herokuapp.com/");
        assert!(config.follow_redirects);
        assert!(config.form_encode_requests);
        assert_eq!(config.max_redirects, 5);
        assert_eq!(config.timeout, None);
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_builder() {
        let config = FetcherConfig::new("http://localhost:8080")
            .follow_redirects(false)
            .form_encode_requests(false)
            .max_redirects(1)
            .timeout(Some(Duration::from_millis(250)))
            .user_agent("blog/0.1");

        assert_eq!(config.base_origin, "http://localhost:8080");
        assert!(!config.follow_redirects);
        assert!(!config.form_encode_requests);
        assert_eq!(config.max_redirects, 1);
        assert_eq!(config.timeout, Some(Duration::from_millis(250)));
        assert_eq!(config.user_agent.as_deref(), Some("blog/0.1"));
    }

    #[test]
    fn test_new_does_not_validate() {
        let config = FetcherConfig::new("definitely not a url");
        assert_eq!(config.base_origin, "definitely not a url");
    }
}
