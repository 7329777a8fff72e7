use thiserror::Error;

use crate::common::PostId;

#[derive(Error, Debug)]
pub enum FeedError {
    /// An empty draft was submitted. Carries the localized inline message.
    #[error("{message}")]
    FieldRequired { message: String },

    #[error("Post not found: {post_id}")]
    PostNotFound { post_id: PostId },

    #[error("Invalid locale: {value}")]
    InvalidLocale { value: String },

    #[error("Feed file error: {path} - {message}")]
    FeedFile { path: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeedError {
    pub fn field_required(message: impl AsRef<str>) -> Self {
        FeedError::FieldRequired {
            message: message.as_ref().to_string(),
        }
    }

    pub fn post_not_found(post_id: PostId) -> Self {
        FeedError::PostNotFound { post_id }
    }

    pub fn invalid_locale(value: impl AsRef<str>) -> Self {
        FeedError::InvalidLocale {
            value: value.as_ref().to_string(),
        }
    }

    pub fn feed_file(path: impl AsRef<str>, message: impl AsRef<str>) -> Self {
        FeedError::FeedFile {
            path: path.as_ref().to_string(),
            message: message.as_ref().to_string(),
        }
    }
}

pub type FeedResult<T> = Result<T, FeedError>;
