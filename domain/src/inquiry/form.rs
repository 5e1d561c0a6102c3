//! Form state owned by the submission client

use crate::core::language::Language;
use crate::core::string::non_empty;
use crate::inquiry::entities::InquiryRequest;
use crate::inquiry::field::Field;
use crate::inquiry::validation::{FieldError, collect_violations};

/// Current values of the contact form, exactly as typed.
///
/// Every input is a plain string; an empty string means the visitor left the
/// field blank. [`FormState::validate`] is the boundary where blanks become
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub project_type: String,
    pub area: String,
    pub budget: String,
    pub message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::City => &self.city,
            Field::ProjectType => &self.project_type,
            Field::Area => &self.area,
            Field::Budget => &self.budget,
            Field::Message => &self.message,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::City => &mut self.city,
            Field::ProjectType => &mut self.project_type,
            Field::Area => &mut self.area,
            Field::Budget => &mut self.budget,
            Field::Message => &mut self.message,
        }
    }

    /// Reset every field to blank.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Trimmed wire payload; blank fields are omitted.
    pub fn payload(&self, language: Language) -> InquiryRequest {
        let value = |field: Field| non_empty(self.get(field)).map(str::to_string);
        InquiryRequest {
            name: value(Field::Name),
            phone: value(Field::Phone),
            email: value(Field::Email),
            city: value(Field::City),
            project_type: value(Field::ProjectType),
            area: value(Field::Area),
            budget: value(Field::Budget),
            message: value(Field::Message),
            language: Some(language.code().to_string()),
        }
    }

    /// Run the client rule set and return the payload to send.
    pub fn validate(&self, language: Language) -> Result<InquiryRequest, Vec<FieldError>> {
        let payload = self.payload(language);
        let errors = collect_violations(&payload);
        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inquiry::validation::FieldErrorKind;

    #[test]
    fn payload_trims_and_omits_blanks() {
        let form = FormState::new()
            .with(Field::Name, "  Aliya ")
            .with(Field::Phone, "+7 777 000 0000")
            .with(Field::Email, "   ")
            .with(Field::Message, "\n Hello \n");
        let payload = form.payload(Language::Ru);
        assert_eq!(payload.name.as_deref(), Some("Aliya"));
        assert_eq!(payload.email, None);
        assert_eq!(payload.message.as_deref(), Some("Hello"));
        assert_eq!(payload.language.as_deref(), Some("ru"));
    }

    #[test]
    fn validate_returns_field_errors() {
        let form = FormState::new().with(Field::Email, "nope");
        let errors = form.validate(Language::En).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| (e.field, e.kind)).collect();
        assert_eq!(
            fields,
            vec![
                (Field::Name, FieldErrorKind::Required),
                (Field::Email, FieldErrorKind::InvalidEmail),
            ]
        );
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = FormState::new()
            .with(Field::Name, "Bob")
            .with(Field::Budget, "1m_3m");
        form.clear();
        assert_eq!(form, FormState::default());
    }
}
