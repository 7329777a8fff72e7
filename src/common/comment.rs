use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feed::LikeCounter;

/// A comment on a post. Its text doubles as its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentEntry {
    pub text: String,
    pub likes: LikeCounter,
    pub created_at: DateTime<Utc>,
}

impl CommentEntry {
    pub fn new(text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            text,
            likes: LikeCounter::default(),
            created_at,
        }
    }

    pub fn like_count(&self) -> u64 {
        self.likes.count()
    }

    pub fn matches(&self, text: &str) -> bool {
        self.text == text
    }
}
