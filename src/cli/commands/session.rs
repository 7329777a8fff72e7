use anyhow::Result;
use clap::Args;
use log::debug;
use std::io::{self, BufRead, Write};

use crate::cli::output::{format_post_view, info_message, success_message, warning_message};
use crate::common::{Clock, PostId};
use crate::feed::{FeedError, PostController, PostEvent};

use super::Settings;

const HELP: &str = "\
Commands:
  draft <text>     replace the comment draft
  submit           publish the current draft
  comment <text>   draft and publish in one go
  edit             compose the draft in $EDITOR
  delete <text>    delete every comment with this text
  applaud <text>   applaud the first comment with this text
  show             render the post
  help             show this help
  quit             end the session";

#[derive(Args)]
pub struct SessionArgs {
    /// Post ID to open
    pub id: PostId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    Event(PostEvent),
    Comment(String),
    Edit,
    Show,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
///
/// Everything after the first space is the argument, taken verbatim.
fn parse_line(line: &str) -> Option<SessionCommand> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    if line.trim().is_empty() {
        return None;
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.to_string();

    let command = match word.to_lowercase().as_str() {
        "draft" => SessionCommand::Event(PostEvent::DraftChanged(rest)),
        "submit" => SessionCommand::Event(PostEvent::SubmitAttempted),
        "delete" => SessionCommand::Event(PostEvent::DeleteRequested(rest)),
        "applaud" | "like" => SessionCommand::Event(PostEvent::ApplaudRequested(rest)),
        "comment" => SessionCommand::Comment(rest),
        "edit" => SessionCommand::Edit,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(word.to_string()),
    };
    Some(command)
}

/// Open `$EDITOR` on the current draft and return what was written
fn compose_in_editor(current: &str) -> io::Result<String> {
    let edited = edit::edit(current)?;
    Ok(edited
        .strip_suffix('\n')
        .map(str::to_string)
        .unwrap_or(edited))
}

pub fn handle_session(settings: &Settings, args: SessionArgs) -> Result<()> {
    let post = settings.feed.get(args.id)?.clone();
    let mut controller = PostController::new(post, settings.locale);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(
        &mut controller,
        &settings.commenter,
        stdin.lock(),
        &mut stdout,
        compose_in_editor,
    )
}

pub(crate) fn run_session<C, R, W, E>(
    controller: &mut PostController<C>,
    commenter: &str,
    input: R,
    output: &mut W,
    editor: E,
) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
    E: Fn(&str) -> io::Result<String>,
{
    let locale = controller.locale();
    writeln!(output, "{}", format_post_view(&controller.view(), locale, commenter))?;
    writeln!(output, "{}", info_message("Type `help` for commands"))?;

    for line in input.lines() {
        let Some(command) = parse_line(&line?) else {
            continue;
        };
        debug!("session command: {:?}", command);

        match command {
            SessionCommand::Event(PostEvent::SubmitAttempted) => submit(controller, output)?,
            SessionCommand::Event(PostEvent::DeleteRequested(text)) => {
                let removed = controller.delete_comment(&text);
                if removed == 0 {
                    writeln!(output, "{}", warning_message("No comment with that text"))?;
                } else {
                    writeln!(
                        output,
                        "{}",
                        success_message(&format!("Deleted {} comment(s)", removed))
                    )?;
                }
            }
            SessionCommand::Event(PostEvent::ApplaudRequested(text)) => {
                match controller.applaud(&text) {
                    Some(count) => writeln!(
                        output,
                        "{}",
                        success_message(&format!("Applauded ({})", count))
                    )?,
                    None => writeln!(output, "{}", warning_message("No comment with that text"))?,
                }
            }
            SessionCommand::Event(event) => controller.dispatch(event)?,
            SessionCommand::Comment(text) => {
                controller.change_draft(text);
                submit(controller, output)?;
            }
            SessionCommand::Edit => match editor(controller.draft()) {
                Ok(text) => {
                    controller.change_draft(text);
                    writeln!(
                        output,
                        "{}",
                        info_message(&format!("Draft: {}", controller.draft()))
                    )?;
                }
                Err(err) => {
                    debug!("editor failed: {}", err);
                    writeln!(
                        output,
                        "{}",
                        warning_message(&format!("Editor failed: {}", err))
                    )?;
                }
            },
            SessionCommand::Show => {
                write!(output, "{}", format_post_view(&controller.view(), locale, commenter))?;
            }
            SessionCommand::Help => writeln!(output, "{}", HELP)?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(word) => {
                writeln!(
                    output,
                    "{}",
                    warning_message(&format!("Unknown command '{}', try `help`", word))
                )?;
            }
        }
    }

    write!(output, "{}", format_post_view(&controller.view(), locale, commenter))?;
    Ok(())
}

/// Submit the live draft, reporting a rejected empty draft inline
fn submit<C: Clock, W: Write>(controller: &mut PostController<C>, output: &mut W) -> Result<()> {
    match controller.submit() {
        Ok(_) => writeln!(output, "{}", success_message("Comment published"))?,
        Err(FeedError::FieldRequired { message }) => {
            writeln!(output, "{}", warning_message(&message))?
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Author, ContentBlock, FixedClock, Locale, Post};
    use chrono::{TimeZone, Utc};

    fn controller() -> PostController<FixedClock> {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let post = Post::new(
            1,
            Author::new(
                "Test Author".to_string(),
                "Tester".to_string(),
                "https://example.com/avatar.png".to_string(),
            ),
            now,
            vec![ContentBlock::paragraph("Body")],
        );
        PostController::with_clock(post, Locale::EnUs, FixedClock(now))
    }

    fn no_editor(_: &str) -> io::Result<String> {
        Err(io::Error::other("no editor in tests"))
    }

    fn run(controller: &mut PostController<FixedClock>, script: &str) -> String {
        console::set_colors_enabled(false);
        let mut output = Vec::new();
        run_session(controller, "Tester", script.as_bytes(), &mut output, no_editor)
            .expect("session should succeed");
        String::from_utf8(output).expect("output should be UTF-8")
    }

    fn texts(controller: &PostController<FixedClock>) -> Vec<&str> {
        controller.comments().iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \n"), None);
        assert_eq!(
            parse_line("draft Hello there\n"),
            Some(SessionCommand::Event(PostEvent::DraftChanged(
                "Hello there".to_string()
            )))
        );
        assert_eq!(
            parse_line("draft"),
            Some(SessionCommand::Event(PostEvent::DraftChanged(String::new())))
        );
        assert_eq!(
            parse_line("SUBMIT"),
            Some(SessionCommand::Event(PostEvent::SubmitAttempted))
        );
        assert_eq!(
            parse_line("comment  padded"),
            Some(SessionCommand::Comment(" padded".to_string()))
        );
        assert_eq!(
            parse_line("like Great read!"),
            Some(SessionCommand::Event(PostEvent::ApplaudRequested(
                "Great read!".to_string()
            )))
        );
        assert_eq!(parse_line("exit"), Some(SessionCommand::Quit));
        assert_eq!(
            parse_line("dance now"),
            Some(SessionCommand::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_session_scenario() {
        let mut controller = controller();
        let output = run(
            &mut controller,
            "submit\ncomment Great read!\napplaud Great read!\napplaud Great read!\ndelete Nice post, huh?!\n",
        );

        assert_eq!(texts(&controller), vec!["Great read!"]);
        assert_eq!(controller.comments()[0].like_count(), 2);
        assert!(output.contains("This field is required"));
        assert!(output.contains("Comment published"));
        assert!(output.contains("Applauded (2)"));
        assert!(output.contains("Deleted 1 comment(s)"));
    }

    #[test]
    fn test_draft_then_submit() {
        let mut controller = controller();
        run(&mut controller, "draft first\ndraft second\nsubmit\n");

        assert_eq!(texts(&controller), vec!["Nice post, huh?!", "second"]);
        assert_eq!(controller.draft(), "");
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut controller = controller();
        run(&mut controller, "quit\ncomment ignored\n");
        assert_eq!(controller.comments().len(), 1);
    }

    #[test]
    fn test_unknown_and_missing_targets_warn() {
        let mut controller = controller();
        let output = run(&mut controller, "dance\napplaud nobody\ndelete nobody\n");

        assert!(output.contains("Unknown command 'dance'"));
        assert!(output.contains("No comment with that text"));
        assert_eq!(controller.comments().len(), 1);
    }

    #[test]
    fn test_edit_uses_editor_output() {
        let mut controller = controller();
        console::set_colors_enabled(false);
        let mut output = Vec::new();
        run_session(
            &mut controller,
            "Tester",
            "edit\nsubmit\n".as_bytes(),
            &mut output,
            |current: &str| Ok(format!("{}from editor", current)),
        )
        .unwrap();

        assert_eq!(texts(&controller), vec!["Nice post, huh?!", "from editor"]);
    }

    #[test]
    fn test_editor_failure_keeps_session_going() {
        let mut controller = controller();
        let output = run(&mut controller, "comment A\nedit\ncomment B\n");

        assert!(output.contains("Editor failed: no editor in tests"));
        assert_eq!(texts(&controller), vec!["Nice post, huh?!", "A", "B"]);
        // The final render still happens after the failed edit
        assert!(output.trim_end().ends_with("Applaud 0"));
    }

    #[test]
    fn test_editor_failure_leaves_draft_untouched() {
        let mut controller = controller();
        run(&mut controller, "draft typing\nedit\n");
        assert_eq!(controller.draft(), "typing");
    }
}
