//! Inquiry domain entities

use crate::core::language::Language;
use crate::inquiry::field::Field;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Inquiry as it travels from the browser to the handler (wire shape).
///
/// Every field is optional at this stage: a missing `name` is a validation
/// failure, not a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl InquiryRequest {
    /// Raw value of a field as submitted, untrimmed.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::City => &self.city,
            Field::ProjectType => &self.project_type,
            Field::Area => &self.area,
            Field::Budget => &self.budget,
            Field::Message => &self.message,
        };
        value.as_deref()
    }

    pub fn language(&self) -> Language {
        Language::from_code(self.language.as_deref())
    }
}

/// A normalized inquiry, ready to be persisted (Entity)
///
/// String fields are trimmed and capped at their field limit, `email` is
/// lowercased, and absent optional fields are `None` (stored as `null`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub project_type: Option<String>,
    pub area: Option<String>,
    pub budget: Option<String>,
    pub message: Option<String>,
    pub language: Language,
}

impl Inquiry {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => Some(self.name.as_str()),
            Field::Phone => self.phone.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::City => self.city.as_deref(),
            Field::ProjectType => self.project_type.as_deref(),
            Field::Area => self.area.as_deref(),
            Field::Budget => self.budget.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    /// Contact channels present on this inquiry, for log lines.
    pub fn contact_channels(&self) -> &'static str {
        match (self.phone.is_some(), self.email.is_some()) {
            (true, true) => "phone+email",
            (true, false) => "phone",
            (false, true) => "email",
            (false, false) => "none",
        }
    }
}

/// An inquiry after the store accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredInquiry {
    /// Identifier generated by the store
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub inquiry: Inquiry,
}
