pub mod author;
pub mod clock;
pub mod comment;
pub mod env;
pub mod locale;
pub mod post;

pub use author::*;
pub use clock::{Clock, SystemClock};
pub use comment::*;
pub use env::{EnvProvider, SystemEnvProvider};
pub use locale::*;
pub use post::*;

#[cfg(test)]
pub use clock::{FixedClock, ZonedClock};
#[cfg(test)]
pub use env::MockEnvProvider;
