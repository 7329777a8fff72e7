use anyhow::Result;
use clap::Args;

use crate::cli::output::format_post_view;
use crate::common::PostId;
use crate::feed::PostController;

use super::Settings;

#[derive(Args)]
pub struct ShowArgs {
    /// Post ID to show
    pub id: PostId,

    /// Print the view model as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,
}

pub fn handle_show(settings: &Settings, args: ShowArgs) -> Result<()> {
    let post = settings.feed.get(args.id)?.clone();
    let controller = PostController::new(post, settings.locale);
    let view = controller.view();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!(
            "{}",
            format_post_view(&view, settings.locale, &settings.commenter)
        );
    }

    Ok(())
}
