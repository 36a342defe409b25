//! I/O operations for fetching.
//!
//! The transport sits behind [`HttpClient`]; [`BlogPostFetcher`] drives it and
//! owns the redirect loop.

mod fetcher;
mod http;

pub use fetcher::BlogPostFetcher;
pub use http::{HttpClient, RawResponse};
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
