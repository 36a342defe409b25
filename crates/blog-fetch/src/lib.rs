//! Fetch a blog's JSON feed from a fixed origin.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable configuration and result types
//! - [`core`] - Pure transformations (URL composition, redirect classification)
//! - [`effects`] - I/O operations behind the [`HttpClient`] trait
//!
//! # Boundaries
//!
//! - **Opaque body**: the fetcher returns the response body as text and never
//!   parses it. Decoding JSON is the caller's step.
//! - **Status pass-through**: 4xx/5xx responses are returned like any other.
//! - **Mechanism-only**: no retries, no caching, no fallbacks. Every failure
//!   surfaces unchanged.

pub mod core;
pub mod data;
mod effects;
mod error;

pub use crate::core::{index_url, is_redirect, post_url, resolve_location};
pub use data::{FetchResult, FetcherConfig};
pub use effects::{BlogPostFetcher, HttpClient, RawResponse};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result};
