use std::time::Duration;

use blog_fetch::FetcherConfig;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Clone, Debug, Parser)]
#[command(name = "blog", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(flatten)]
    pub fetch: FetchArgs,

    /// Print the response body as indented JSON instead of rendering it
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "ls", name = "index", about = "List the posts on the front page")]
    Index,
    #[command(alias = "p", name = "post", about = "Show a single post")]
    Post(PostArg),
}

#[derive(Clone, Debug, Args)]
pub struct PostArg {
    /// Slug or title path segment of the post
    pub identifier: String,
}

#[derive(Clone, Debug, Args)]
pub struct FetchArgs {
    /// Origin of the blog
    #[arg(long, env = "BLOG_ORIGIN", default_value = FetcherConfig::DEFAULT_ORIGIN, global = true)]
    pub origin: String,

    /// Maximum number of redirects to follow
    #[arg(long, default_value_t = FetcherConfig::DEFAULT_MAX_REDIRECTS, global = true)]
    pub max_redirects: u32,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Do not follow redirects
    #[arg(long, global = true)]
    pub no_follow: bool,
}

impl FetchArgs {
    pub fn config(&self) -> FetcherConfig {
        FetcherConfig::new(self.origin.clone())
            .follow_redirects(!self.no_follow)
            .max_redirects(self.max_redirects)
            .timeout(self.timeout.map(Duration::from_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_post_with_options() {
        let app = App::try_parse_from([
            "blog",
            "--origin",
            "http://localhost:4000/",
            "--max-redirects",
            "2",
            "--timeout",
            "3",
            "post",
            "sake",
        ])
        .unwrap();

        let config = app.fetch.config();
        assert_eq!(config.base_origin, "http://localhost:4000/");
        assert_eq!(config.max_redirects, 2);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert!(config.follow_redirects);
        match app.cmd {
            Commands::Post(arg) => assert_eq!(arg.identifier, "sake"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_index_alias_and_flags() {
        let app = App::try_parse_from(["blog", "ls", "--no-follow", "--json", "-vv"]).unwrap();

        assert!(matches!(app.cmd, Commands::Index));
        assert!(app.json);
        assert_eq!(app.verbose, 2);
        assert!(!app.fetch.config().follow_redirects);
    }

    #[test]
    fn test_post_requires_identifier() {
        assert!(App::try_parse_from(["blog", "post"]).is_err());
    }
}
