use url::Url;

use crate::error::{FetchError, Result};

const JSON_QUERY: &str = "?json=1";

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Compose the URL of a single post: `{base}/{identifier}/?json=1`.
///
/// A trailing slash on `base` is not doubled. The identifier is inserted as
/// given; escaping beyond what URL parsing does is the caller's concern. An
/// empty identifier names no post and resolves to the index, `{base}/?json=1`.
///
/// # Examples
///
/// ```
/// use blog_fetch::core::post_url;
///
/// assert_eq!(
///     post_url("http://blog.example.com/", "sake"),
///     "http://blog.example.com/sake/?json=1"
/// );
/// ```
pub fn post_url(base: &str, identifier: &str) -> String {
    if identifier.is_empty() {
        return index_url(base);
    }
    format!("{}/{}/{}", trim_base(base), identifier, JSON_QUERY)
}

/// Compose the URL of the site index: `{base}/?json=1`.
///
/// ```
/// use blog_fetch::core::index_url;
///
/// assert_eq!(index_url("http://blog.example.com"), "http://blog.example.com/?json=1");
/// ```
pub fn index_url(base: &str) -> String {
    format!("{}/{}", trim_base(base), JSON_QUERY)
}

/// Parse an absolute `http`/`https` URL.
pub fn parse_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(FetchError::InvalidUrl(format!(
            "{raw}: unsupported scheme '{scheme}'"
        ))),
    }
}

/// Resolve a `Location` header against the URL of the response carrying it.
///
/// Absolute locations replace `current` entirely; relative ones are joined.
pub fn resolve_location(current: &Url, location: &str) -> Result<Url> {
    let next = current
        .join(location)
        .map_err(|e| FetchError::InvalidUrl(format!("location '{location}': {e}")))?;
    parse_url(next.as_str())
}
