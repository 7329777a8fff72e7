use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod list;
mod session;
mod show;

pub use list::{ListArgs, handle_list};
pub use session::{SessionArgs, handle_session};
pub use show::{ShowArgs, handle_show};

use crate::common::{EnvProvider, Locale, SystemEnvProvider};
use crate::feed::{Feed, FeedError};

#[derive(Parser)]
#[command(name = "feed-post")]
#[command(about = "A social-feed post with comments and applause, in your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Feed file to load, JSON or YAML (defaults to a built-in sample feed)
    #[arg(short, long, global = true)]
    pub feed: Option<PathBuf>,

    /// Locale for dates and messages: pt-BR or en-US
    #[arg(short, long, global = true)]
    pub locale: Option<Locale>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the posts in the feed
    List(ListArgs),
    /// Render a single post
    Show(ShowArgs),
    /// Comment on and applaud a post interactively
    Session(SessionArgs),
}

/// Feed and presentation settings shared by every command
pub struct Settings {
    pub feed: Feed,
    pub locale: Locale,
    pub commenter: String,
}

pub fn run_command(cli: Cli) -> Result<()> {
    let settings = resolve_settings(cli.feed, cli.locale, SystemEnvProvider)?;

    match cli.command {
        Commands::List(args) => handle_list(&settings, args),
        Commands::Show(args) => handle_show(&settings, args),
        Commands::Session(args) => handle_session(&settings, args),
    }
}

/// Combine command-line flags with the environment. Flags win, then
/// environment variables, then the built-in defaults.
pub(crate) fn resolve_settings(
    feed_path: Option<PathBuf>,
    locale: Option<Locale>,
    env_provider: impl EnvProvider,
) -> Result<Settings> {
    let locale = match locale {
        Some(locale) => locale,
        None => match env_provider.locale() {
            Some(raw) => raw
                .parse::<Locale>()
                .map_err(|_| FeedError::invalid_locale(&raw))?,
            None => Locale::default(),
        },
    };

    let feed = match feed_path.or_else(|| env_provider.feed_file()) {
        Some(path) => Feed::load(&path)?,
        None => {
            log::debug!("no feed file configured, using sample feed");
            Feed::sample()
        }
    };

    Ok(Settings {
        feed,
        locale,
        commenter: env_provider.commenter_name(),
    })
}
