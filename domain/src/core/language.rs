//! Submission language value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language the visitor used when filling in the form.
///
/// Drives the wording of client messages and of the operator notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian (default)
    #[default]
    Ru,
    /// English
    En,
}

impl Language {
    /// Resolve a language from an optional wire code.
    ///
    /// Absent means `ru`. Any code other than `ru` falls back to English.
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(str::trim) {
            None | Some("") => Language::Ru,
            Some(c) if c.eq_ignore_ascii_case("ru") => Language::Ru,
            Some(_) => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            "en" => Ok(Language::En),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}
