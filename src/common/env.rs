#[cfg(test)]
use std::collections::HashMap;
use std::path::PathBuf;

pub const LOCALE_VAR: &str = "FEED_POST_LOCALE";
pub const FEED_FILE_VAR: &str = "FEED_POST_FILE";
pub const COMMENTER_VAR: &str = "FEED_POST_COMMENTER";

/// Trait for reading feed-post configuration from the environment
///
/// Lookups go through this trait so commands can be tested against a mock
/// environment instead of mutating the process environment.
pub trait EnvProvider {
    /// Get the value of an environment variable
    fn get_var(&self, key: &str) -> Option<String>;

    /// Raw locale string, if one is configured
    fn locale(&self) -> Option<String> {
        self.get_var(LOCALE_VAR).filter(|value| !value.is_empty())
    }

    /// Path of the feed file to load instead of the built-in sample feed
    fn feed_file(&self) -> Option<PathBuf> {
        self.get_var(FEED_FILE_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    /// Name shown next to comments written in this session
    fn commenter_name(&self) -> String {
        self.get_var(COMMENTER_VAR)
            .or_else(|| self.get_var("USER"))
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "Anonymous".to_string())
    }
}

/// Production implementation that uses the system environment
pub struct SystemEnvProvider;

impl EnvProvider for SystemEnvProvider {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test-only mock implementation for environment variables
#[cfg(test)]
pub struct MockEnvProvider {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvProvider {
    /// Create a new empty mock environment provider
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Set an environment variable in the mock
    pub fn set_var(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Create a mock with the locale and commenter configured
    pub fn with_feed_config(locale: impl Into<String>, commenter: impl Into<String>) -> Self {
        let mut mock = Self::new();
        mock.set_var(LOCALE_VAR, locale);
        mock.set_var(COMMENTER_VAR, commenter);
        mock
    }
}

#[cfg(test)]
impl EnvProvider for MockEnvProvider {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
