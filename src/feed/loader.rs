use std::fs;
use std::path::Path;

use chrono::{Duration, Utc};
use log::{debug, info};

use super::errors::{FeedError, FeedResult};
use crate::common::{Author, ContentBlock, Post, PostId};

/// The posts available to render, in feed order
///
/// ## Feed files
///
/// A feed file is a list of posts. Files ending in `.yaml` or `.yml` are read
/// as YAML, anything else as JSON:
///
/// ```json
/// [{
///   "id": 1,
///   "author": { "name": "Ana", "role": "Engineer", "avatarUrl": "https://..." },
///   "publishedAt": "2026-05-03T20:00:00Z",
///   "content": [{ "type": "paragraph", "content": "Hello" }]
/// }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    posts: Vec<Post>,
}

impl Feed {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load a feed from a JSON or YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> FeedResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|err| FeedError::feed_file(path.display().to_string(), err.to_string()))?;

        let posts: Vec<Post> = if is_yaml(path) {
            debug!("parsing {} as YAML", path.display());
            serde_yaml::from_str(&raw)?
        } else {
            debug!("parsing {} as JSON", path.display());
            serde_json::from_str(&raw)?
        };

        info!("loaded {} post(s) from {}", posts.len(), path.display());
        Ok(Self::new(posts))
    }

    /// Built-in feed used when no feed file is configured
    pub fn sample() -> Self {
        let now = Utc::now();
        Self::new(vec![
            Post::new(
                1,
                Author::new(
                    "Marina Duarte".to_string(),
                    "Web Developer".to_string(),
                    "https://avatars.example.com/marina.png".to_string(),
                ),
                now - Duration::hours(1),
                vec![
                    ContentBlock::paragraph("Fala galera 👋"),
                    ContentBlock::paragraph(
                        "Acabei de subir mais um projeto no meu portfólio. É um feed com comentários e aplausos, feito no terminal.",
                    ),
                    ContentBlock::link("marina.design/feed"),
                ],
            ),
            Post::new(
                2,
                Author::new(
                    "Rafael Lima".to_string(),
                    "Educator".to_string(),
                    "https://avatars.example.com/rafael.png".to_string(),
                ),
                now - Duration::days(2),
                vec![
                    ContentBlock::paragraph("Hey everyone 👋"),
                    ContentBlock::paragraph(
                        "New write-up on building small state machines for UI components is out.",
                    ),
                    ContentBlock::link("rafael.dev/state-machines"),
                ],
            ),
        ])
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, post_id: PostId) -> FeedResult<&Post> {
        self.posts
            .iter()
            .find(|post| post.id == post_id)
            .ok_or_else(|| FeedError::post_not_found(post_id))
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}
