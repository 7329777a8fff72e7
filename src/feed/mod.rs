pub mod comments;
pub mod controller;
pub mod errors;
pub mod likes;
pub mod loader;
pub mod time_format;
pub mod validation;

pub use controller::{PostController, PostEvent, PostView};
pub use errors::{FeedError, FeedResult};
pub use likes::LikeCounter;
pub use loader::Feed;
pub use time_format::format_relative;
pub use validation::Validity;
