//! Decoding and presentation of the blog's JSON feed.
//!
//! This is the step that runs after a fetch: the fetcher hands over raw text
//! and everything JSON-shaped happens here, so a parse failure never looks
//! like a transport failure.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed reported an error: {0}")]
    Api(String),
}

/// A post as the feed describes it. Missing fields decode to defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub url: String,
    pub date: String,
    pub excerpt: String,
    pub content: String,
}

/// Front page: `GET /?json=1`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndexPage {
    pub status: String,
    pub error: Option<String>,
    pub count: u64,
    pub count_total: u64,
    pub pages: u64,
    pub posts: Vec<Post>,
}

/// Single post: `GET /{identifier}/?json=1`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostPage {
    pub status: String,
    pub error: Option<String>,
    pub post: Post,
}

/// Decode any JSON document, without assuming its shape.
pub fn decode(body: &str) -> Result<serde_json::Value, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_index(body: &str) -> Result<IndexPage, DecodeError> {
    let page: IndexPage = decode_as(body)?;
    check_status(&page.status, page.error.as_deref())?;
    Ok(page)
}

pub fn decode_post(body: &str) -> Result<PostPage, DecodeError> {
    let page: PostPage = decode_as(body)?;
    check_status(&page.status, page.error.as_deref())?;
    Ok(page)
}

fn decode_as<T: DeserializeOwned>(body: &str) -> Result<T, DecodeError> {
    Ok(serde_json::from_str(body)?)
}

fn check_status(status: &str, error: Option<&str>) -> Result<(), DecodeError> {
    if status == "error" {
        return Err(DecodeError::Api(error.unwrap_or("unknown error").to_string()));
    }
    Ok(())
}

/// One line per post: `slug  title`.
pub fn render_index(page: &IndexPage) -> String {
    let width = page.posts.iter().map(|p| p.slug.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for post in &page.posts {
        out.push_str(&format!("{:<width$}  {}\n", post.slug, post.title));
    }
    out.push_str(&format!(
        "({} of {} posts, {} pages)\n",
        page.posts.len(),
        page.count_total,
        page.pages
    ));
    out
}

pub fn render_post(page: &PostPage) -> String {
    let post = &page.post;
    format!("{}\n{}\n{}\n\n{}\n", post.title, post.date, post.url, post.content)
}
