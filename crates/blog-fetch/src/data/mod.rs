//! Immutable data types for fetching.
//!
//! A [`FetcherConfig`] is built once and owned by a fetcher for its whole
//! lifetime; a [`FetchResult`] is produced per call and owned by the caller.

mod config;
mod result;

pub use config::FetcherConfig;
pub use result::FetchResult;
