use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

use crate::cli::output::{format_post_compact, format_post_summary};
use crate::common::{Clock, SystemClock};

use super::Settings;

#[derive(Args)]
pub struct ListArgs {
    /// Show one line per post
    #[arg(short, long)]
    pub compact: bool,
}

pub fn handle_list(settings: &Settings, args: ListArgs) -> Result<()> {
    let mut stdout = io::stdout();
    write_list(settings, &args, &SystemClock, &mut stdout)
}

pub(crate) fn write_list<C: Clock, W: Write>(
    settings: &Settings,
    args: &ListArgs,
    clock: &C,
    output: &mut W,
) -> Result<()> {
    let now = clock.now();

    for post in settings.feed.posts() {
        if args.compact {
            writeln!(output, "{}", format_post_compact(post, settings.locale, now))?;
        } else {
            write!(output, "{}", format_post_summary(post, settings.locale, now))?;
        }
    }

    Ok(())
}
