use chrono::{DateTime, Utc};
use console::{Color, style};

use crate::common::{ContentKind, Locale, Post};
use crate::feed::{PostView, format_relative};

const SUMMARY_WORDS: usize = 12;

/// Cut `text` after `max_words` words, reporting how many were left out
fn truncate_words(text: &str, max_words: usize) -> (String, Option<usize>) {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return (text.to_string(), None);
    }

    (
        words[..max_words].join(" "),
        Some(words.len() - max_words),
    )
}

fn publish_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Publicar",
        Locale::EnUs => "Publish",
    }
}

fn applaud_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Aplaudir",
        Locale::EnUs => "Applaud",
    }
}

fn feedback_label(locale: Locale) -> &'static str {
    match locale {
        Locale::PtBr => "Deixe seu feedback",
        Locale::EnUs => "Leave your feedback",
    }
}

pub fn format_post_compact(post: &Post, locale: Locale, now: DateTime<Utc>) -> String {
    format!(
        "#{} {} {}",
        style(post.id).bold(),
        style(&post.author.name).green(),
        style(format_relative(post.published_at, now, locale)).dim()
    )
}

pub fn format_post_summary(post: &Post, locale: Locale, now: DateTime<Utc>) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {} ({}), {}\n",
        style(format!("#{}", post.id)).bold().cyan(),
        style(&post.author.name).green().bold(),
        post.author.role,
        format_relative(post.published_at, now, locale)
    ));

    if let Some(paragraph) = post.first_paragraph() {
        let (summary, remaining) = truncate_words(paragraph, SUMMARY_WORDS);
        output.push_str(&format!("  {}", summary));
        if let Some(word_count) = remaining {
            output.push_str(&format!(" {}", style(format!("[+{} words]", word_count)).dim()));
        }
        output.push('\n');
    }

    output.push('\n');
    output
}

/// Render a full post: header, body, comment form and comments
pub fn format_post_view(view: &PostView, locale: Locale, commenter: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} {}\n",
        style(&view.author.name).bold(),
        style(&view.author.role).dim()
    ));
    output.push_str(&format!(
        "{} {}\n",
        style(&view.published.relative).fg(Color::Cyan),
        style(format!("({})", view.published.absolute)).dim()
    ));
    output.push('\n');

    for block in &view.content {
        match block.kind {
            ContentKind::Paragraph => output.push_str(&format!("{}\n", block.text)),
            ContentKind::Link => {
                output.push_str(&format!("{}\n", style(&block.text).green().underlined()))
            }
        }
    }

    output.push('\n');
    output.push_str(&format!("{}\n", style(feedback_label(locale)).bold()));
    output.push_str(&format!("  > {}\n", view.draft));
    if !view.validation_message.is_empty() {
        output.push_str(&format!("  {}\n", style(&view.validation_message).red()));
    }
    let publish = if view.submit_disabled {
        style(format!("[{}]", publish_label(locale))).dim()
    } else {
        style(format!("[{}]", publish_label(locale))).green().bold()
    };
    output.push_str(&format!("  {}\n", publish));

    for comment in &view.comments {
        output.push('\n');
        output.push_str(&format!(
            "  {} {}\n",
            style(commenter).green(),
            style(&comment.created_relative).dim()
        ));
        output.push_str(&format!("    {}\n", comment.text));
        output.push_str(&format!(
            "    {} {}\n",
            applaud_label(locale),
            style(comment.like_count).bold()
        ));
    }

    output.push('\n');
    output
}

pub fn success_message(message: &str) -> String {
    format!("{} {}", style("✓").green().bold(), message)
}

pub fn error_message(message: &str) -> String {
    format!("{} {}", style("✗").red().bold(), message)
}

pub fn warning_message(message: &str) -> String {
    format!("{} {}", style("⚠").yellow().bold(), message)
}

pub fn info_message(message: &str) -> String {
    format!("{} {}", style("ℹ").blue().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Author, ContentBlock, FixedClock};
    use crate::feed::PostController;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn plain_output() {
        console::set_colors_enabled(false);
    }

    fn create_test_post() -> Post {
        Post::new(
            42,
            Author::new(
                "Test Author".to_string(),
                "Tester".to_string(),
                "https://example.com/avatar.png".to_string(),
            ),
            now() - Duration::hours(3),
            vec![
                ContentBlock::paragraph("Single paragraph body"),
                ContentBlock::link("example.com/post"),
            ],
        )
    }

    #[test]
    fn test_truncate_words_short_text() {
        let (text, remaining) = truncate_words("only a few words", 12);
        assert_eq!(text, "only a few words");
        assert_eq!(remaining, None);
    }

    #[test]
    fn test_truncate_words_long_text() {
        let (text, remaining) = truncate_words("one two three four five", 2);
        assert_eq!(text, "one two");
        assert_eq!(remaining, Some(3));
    }

    #[test]
    fn test_format_post_compact() {
        plain_output();
        let formatted = format_post_compact(&create_test_post(), Locale::EnUs, now());

        assert!(formatted.contains("#42"));
        assert!(formatted.contains("Test Author"));
        assert!(formatted.contains("about 3 hours ago"));
    }

    #[test]
    fn test_format_post_summary() {
        plain_output();
        let mut post = create_test_post();
        post.content[0] = ContentBlock::paragraph(
            "a b c d e f g h i j k l m n o",
        );
        let formatted = format_post_summary(&post, Locale::PtBr, now());

        assert!(formatted.contains("#42"));
        assert!(formatted.contains("há cerca de 3 horas"));
        assert!(formatted.contains("a b c d e f g h i j k l"));
        assert!(formatted.contains("[+3 words]"));
    }

    #[test]
    fn test_format_post_view() {
        plain_output();
        let mut controller =
            PostController::with_clock(create_test_post(), Locale::EnUs, FixedClock(now()));
        controller.submit_draft("Great read!").unwrap();
        controller.applaud("Great read!");

        let formatted = format_post_view(&controller.view(), Locale::EnUs, "Commenter");

        assert!(formatted.contains("Test Author"));
        assert!(formatted.contains("about 3 hours ago"));
        assert!(formatted.contains("19 de October às 9:00h"));
        assert!(formatted.contains("Single paragraph body"));
        assert!(formatted.contains("example.com/post"));
        assert!(formatted.contains("Nice post, huh?!"));
        assert!(formatted.contains("Great read!"));
        assert!(formatted.contains("Applaud 1"));
        assert!(formatted.contains("Commenter"));
        assert!(!formatted.contains("This field is required"));

        // Seed comment comes before the new one
        let seed_pos = formatted.find("Nice post, huh?!").unwrap();
        let new_pos = formatted.find("Great read!").unwrap();
        assert!(seed_pos < new_pos);
    }

    #[test]
    fn test_format_post_view_shows_validation_message() {
        plain_output();
        let mut controller =
            PostController::with_clock(create_test_post(), Locale::PtBr, FixedClock(now()));
        let _ = controller.submit();

        let formatted = format_post_view(&controller.view(), Locale::PtBr, "Commenter");

        assert!(formatted.contains("Esse campo é obrigatório!"));
        assert!(formatted.contains("[Publicar]"));
        assert!(formatted.contains("Aplaudir 0"));
    }

    #[test]
    fn test_message_helpers() {
        assert!(success_message("done").ends_with("done"));
        assert!(error_message("failed").ends_with("failed"));
        assert!(warning_message("careful").ends_with("careful"));
        assert!(info_message("note").ends_with("note"));
    }
}
