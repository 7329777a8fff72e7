use log::debug;
use serde::{Deserialize, Serialize};

use super::errors::{FeedError, FeedResult};
use crate::common::Locale;

/// Whether the comment field currently carries a validation failure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Validity {
    #[default]
    Valid,
    /// An empty draft was submitted; cleared on the next edit
    InvalidEmpty,
}

/// The single required comment field of a post
///
/// Typing never signals invalidity. Only a submission of the empty string
/// does, and the next edit clears it again.
#[derive(Debug, Clone)]
pub struct DraftForm {
    text: String,
    validity: Validity,
    locale: Locale,
}

impl DraftForm {
    pub fn new(locale: Locale) -> Self {
        Self {
            text: String::new(),
            validity: Validity::Valid,
            locale,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Inline message for the current state, empty when valid
    pub fn message(&self) -> &'static str {
        match self.validity {
            Validity::Valid => "",
            Validity::InvalidEmpty => self.locale.required_message(),
        }
    }

    /// The publish button is disabled while the live draft is empty
    pub fn submit_disabled(&self) -> bool {
        self.text.is_empty()
    }

    pub fn on_draft_change(&mut self, text: impl Into<String>) {
        self.validity = Validity::Valid;
        self.text = text.into();
    }

    /// Try to submit the live draft.
    ///
    /// On success the accepted text is handed back and the form is reset. The
    /// text is not trimmed, so whitespace-only drafts are accepted.
    pub fn on_submit_attempt(&mut self) -> FeedResult<String> {
        if self.text.is_empty() {
            debug!("rejected empty comment submission");
            self.validity = Validity::InvalidEmpty;
            return Err(FeedError::field_required(self.message()));
        }

        self.validity = Validity::Valid;
        Ok(std::mem::take(&mut self.text))
    }

    /// Drop the draft and any validation state
    pub fn reset(&mut self) {
        self.text.clear();
        self.validity = Validity::Valid;
    }
}
