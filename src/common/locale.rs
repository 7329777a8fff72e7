use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locales the feed knows how to format dates and messages for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// Brazilian Portuguese (default)
    PtBr,
    /// American English
    EnUs,
}

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const MONTHS_EN_US: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Locale {
    /// Full standalone month name for a 1-based month number
    pub fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            Locale::PtBr => &MONTHS_PT_BR,
            Locale::EnUs => &MONTHS_EN_US,
        };
        let index = month.clamp(1, 12) as usize - 1;
        names[index]
    }

    /// The comment every post starts out with
    pub fn seed_comment(self) -> &'static str {
        match self {
            Locale::PtBr => "Post muito bacana, hein?!",
            Locale::EnUs => "Nice post, huh?!",
        }
    }

    /// Inline message shown when an empty comment is submitted
    pub fn required_message(self) -> &'static str {
        match self {
            Locale::PtBr => "Esse campo é obrigatório!",
            Locale::EnUs => "This field is required",
        }
    }

    #[allow(unused)]
    pub fn all() -> &'static [Locale] {
        &[Locale::PtBr, Locale::EnUs]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::PtBr
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-BR"),
            Locale::EnUs => write!(f, "en-US"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(format!(
                "Invalid locale '{}'. Valid options: pt-BR, en-US",
                s
            )),
        }
    }
}
