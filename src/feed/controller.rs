use log::debug;
use serde::Serialize;

use super::comments::CommentCollection;
use super::errors::FeedResult;
use super::time_format::{format_absolute, format_iso, format_relative};
use super::validation::{DraftForm, Validity};
use crate::common::{Author, Clock, CommentEntry, ContentKind, Locale, Post, PostId, SystemClock};

/// User-originated events a rendered post reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    DraftChanged(String),
    SubmitAttempted,
    DeleteRequested(String),
    ApplaudRequested(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedDisplay {
    pub absolute: String,
    pub relative: String,
    pub iso: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentView {
    pub kind: ContentKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub text: String,
    pub like_count: u64,
    pub created_relative: String,
}

/// Everything the rendering layer needs for one pass over a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: PostId,
    pub author: Author,
    pub published: PublishedDisplay,
    pub content: Vec<ContentView>,
    pub comments: Vec<CommentView>,
    pub draft: String,
    pub validation_message: String,
    pub submit_disabled: bool,
}

/// Interactive state of a single post: its comments, their applause and the
/// comment draft.
///
/// One controller exists per post identity. The post itself never changes;
/// handing in a post with another id starts over from a fresh state.
pub struct PostController<C: Clock = SystemClock> {
    post: Post,
    comments: CommentCollection,
    draft: DraftForm,
    locale: Locale,
    clock: C,
}

impl PostController<SystemClock> {
    pub fn new(post: Post, locale: Locale) -> Self {
        Self::with_clock(post, locale, SystemClock)
    }
}

impl<C: Clock> PostController<C> {
    pub fn with_clock(post: Post, locale: Locale, clock: C) -> Self {
        let comments = CommentCollection::seeded(locale.seed_comment(), clock.now());
        Self {
            post,
            comments,
            draft: DraftForm::new(locale),
            locale,
            clock,
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn comments(&self) -> &[CommentEntry] {
        self.comments.list()
    }

    pub fn comments_view(&self) -> Vec<CommentView> {
        let now = self.clock.now();
        self.comments
            .list()
            .iter()
            .map(|entry| CommentView {
                text: entry.text.clone(),
                like_count: entry.like_count(),
                created_relative: format_relative(entry.created_at, now, self.locale),
            })
            .collect()
    }

    pub fn draft(&self) -> &str {
        self.draft.text()
    }

    pub fn validity(&self) -> Validity {
        self.draft.validity()
    }

    pub fn validation_message(&self) -> &str {
        self.draft.message()
    }

    pub fn submit_disabled(&self) -> bool {
        self.draft.submit_disabled()
    }

    pub fn change_draft(&mut self, text: impl Into<String>) {
        self.draft.on_draft_change(text);
    }

    /// Submit the live draft. An empty draft leaves the comments untouched
    /// and puts the form into its invalid state.
    pub fn submit(&mut self) -> FeedResult<&CommentEntry> {
        let text = self.draft.on_submit_attempt()?;
        let now = self.clock.now();
        Ok(self.comments.append(text, now))
    }

    /// Replace the draft with `text` and submit it
    pub fn submit_draft(&mut self, text: impl Into<String>) -> FeedResult<&CommentEntry> {
        self.change_draft(text);
        self.submit()
    }

    /// Remove every comment with this text. Returns how many were removed.
    pub fn delete_comment(&mut self, text: &str) -> usize {
        self.comments.remove(text)
    }

    /// Applaud the first comment with this text. Returns its new count, or
    /// `None` when no comment matches.
    pub fn applaud(&mut self, text: &str) -> Option<u64> {
        let entry = self.comments.find_mut(text)?;
        let count = entry.likes.increment();
        debug!("applauded {:?}, now {}", text, count);
        Some(count)
    }

    /// Publish time of the post on the viewer's wall clock, and relative to
    /// the clock's current instant
    pub fn published_display(&self) -> PublishedDisplay {
        let published_at = self.post.published_at;
        let local = published_at.with_timezone(&self.clock.local_offset(published_at));
        PublishedDisplay {
            absolute: format_absolute(&local, self.locale),
            relative: format_relative(published_at, self.clock.now(), self.locale),
            iso: format_iso(published_at),
        }
    }

    pub fn dispatch(&mut self, event: PostEvent) -> FeedResult<()> {
        match event {
            PostEvent::DraftChanged(text) => self.change_draft(text),
            PostEvent::SubmitAttempted => {
                self.submit()?;
            }
            PostEvent::DeleteRequested(text) => {
                self.delete_comment(&text);
            }
            PostEvent::ApplaudRequested(text) => {
                self.applaud(&text);
            }
        }
        Ok(())
    }

    /// Hand in the post again. A different identity discards all comment and
    /// draft state; the same identity keeps it.
    pub fn rebind(&mut self, post: Post) {
        if post.id == self.post.id {
            return;
        }

        debug!("post {} replaced by post {}, resetting", self.post.id, post.id);
        self.comments = CommentCollection::seeded(self.locale.seed_comment(), self.clock.now());
        self.draft.reset();
        self.post = post;
    }

    pub fn view(&self) -> PostView {
        let content = self
            .post
            .content
            .iter()
            .filter_map(|block| block.renderable())
            .map(|(kind, text)| ContentView {
                kind,
                text: text.to_string(),
            })
            .collect();

        PostView {
            id: self.post.id,
            author: self.post.author.clone(),
            published: self.published_display(),
            content,
            comments: self.comments_view(),
            draft: self.draft().to_string(),
            validation_message: self.validation_message().to_string(),
            submit_disabled: self.submit_disabled(),
        }
    }
}
