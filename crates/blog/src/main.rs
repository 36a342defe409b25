use anyhow::{Context, Result};
use blog_fetch::BlogPostFetcher;
use clap::Parser;
use tracing::info;

use cli::{App, Commands};

mod article;
mod cli;
mod logging;

#[tokio::main]
async fn main() -> Result<()> {
    let app = App::parse();
    logging::init(app.verbose)?;

    let config = app.fetch.config();
    let fetcher = BlogPostFetcher::new(config).context("Failed to build HTTP client")?;

    let output = match app.cmd {
        Commands::Index => {
            let result = fetcher
                .fetch_index()
                .await
                .with_context(|| format!("Failed to fetch index of {}", fetcher.config().base_origin))?;
            info!(status = result.status, url = %result.url, redirects = result.redirects, "fetched index");

            if app.json {
                pretty(result.body())?
            } else {
                let page = article::decode_index(result.body()).context("Failed to decode index")?;
                article::render_index(&page)
            }
        }
        Commands::Post(arg) => {
            let result = fetcher
                .fetch_post(&arg.identifier)
                .await
                .with_context(|| format!("Failed to fetch post '{}'", arg.identifier))?;
            info!(status = result.status, url = %result.url, redirects = result.redirects, "fetched post");

            if app.json {
                pretty(result.body())?
            } else {
                let page = article::decode_post(result.body())
                    .with_context(|| format!("Failed to decode post '{}'", arg.identifier))?;
                article::render_post(&page)
            }
        }
    };

    print!("{output}");
    Ok(())
}

/// Re-indent a JSON body for the terminal.
fn pretty(body: &str) -> Result<String> {
    let value = article::decode(body).context("Failed to decode response body")?;
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}
