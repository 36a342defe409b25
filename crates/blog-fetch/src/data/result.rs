/// Outcome of a single fetch.
///
/// `body_text` is exactly what the final response carried. `status`, `url`
/// and `redirects` describe how it was obtained; the fetcher makes no
/// decision based on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Raw response body.
    pub body_text: String,

    /// HTTP status of the final response (after redirects).
    pub status: u16,

    /// Final URL (after redirects).
    pub url: String,

    /// Number of redirect hops followed.
    pub redirects: u32,
}

impl FetchResult {
    pub fn body(&self) -> &str {
        &self.body_text
    }

    pub fn into_body(self) -> String {
        self.body_text
    }
}
