use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::Author;

pub type PostId = u64;

/// One fragment of a post body.
///
/// Blocks of a kind this version does not know about deserialize to
/// `Unsupported` and render as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph { content: String },
    Link { content: String },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Paragraph,
    Link,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Paragraph => write!(f, "paragraph"),
            ContentKind::Link => write!(f, "link"),
        }
    }
}

impl ContentBlock {
    pub fn paragraph(content: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            content: content.into(),
        }
    }

    pub fn link(content: impl Into<String>) -> Self {
        ContentBlock::Link {
            content: content.into(),
        }
    }

    /// Kind and text of a renderable block, `None` for unsupported ones
    pub fn renderable(&self) -> Option<(ContentKind, &str)> {
        match self {
            ContentBlock::Paragraph { content } => Some((ContentKind::Paragraph, content)),
            ContentBlock::Link { content } => Some((ContentKind::Link, content)),
            ContentBlock::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub published_at: DateTime<Utc>,
    pub content: Vec<ContentBlock>,
}

impl Post {
    pub fn new(
        id: PostId,
        author: Author,
        published_at: DateTime<Utc>,
        content: Vec<ContentBlock>,
    ) -> Self {
        Self {
            id,
            author,
            published_at,
            content,
        }
    }

    /// First paragraph of the body, used for one-line summaries
    pub fn first_paragraph(&self) -> Option<&str> {
        self.content.iter().find_map(|block| match block {
            ContentBlock::Paragraph { content } => Some(content.as_str()),
            _ => None,
        })
    }
}
