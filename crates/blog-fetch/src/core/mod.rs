//! Pure transformations for fetching.
//!
//! Nothing in here performs I/O: URL composition and status classification
//! only.

mod endpoint;
mod validation;

pub use endpoint::{index_url, parse_url, post_url, resolve_location};
pub use validation::is_redirect;
