//! Localized messages shown to the visitor by the submission client.

use crate::core::language::Language;
use crate::inquiry::field::Field;
use crate::inquiry::validation::{FieldError, FieldErrorKind, RejectReason};

/// Message catalog for client feedback
pub struct ClientMessages;

impl ClientMessages {
    pub fn success(language: Language) -> &'static str {
        match language {
            Language::Ru => "Спасибо! Ваша заявка отправлена. Мы свяжемся с вами в ближайшее время.",
            Language::En => "Thank you! Your request has been sent. We will get back to you shortly.",
        }
    }

    pub fn failure(language: Language) -> &'static str {
        match language {
            Language::Ru => "Не удалось отправить заявку. Попробуйте ещё раз.",
            Language::En => "Could not send your request. Please try again.",
        }
    }

    pub fn sending(language: Language) -> &'static str {
        match language {
            Language::Ru => "Отправка...",
            Language::En => "Sending...",
        }
    }

    pub fn field_label(field: Field, language: Language) -> &'static str {
        match (field, language) {
            (Field::Name, Language::Ru) => "Имя",
            (Field::Name, Language::En) => "Name",
            (Field::Phone, Language::Ru) => "Телефон",
            (Field::Phone, Language::En) => "Phone",
            (Field::Email, _) => "Email",
            (Field::City, Language::Ru) => "Город",
            (Field::City, Language::En) => "City",
            (Field::ProjectType, Language::Ru) => "Тип проекта",
            (Field::ProjectType, Language::En) => "Project type",
            (Field::Area, Language::Ru) => "Площадь, м²",
            (Field::Area, Language::En) => "Area, m²",
            (Field::Budget, Language::Ru) => "Бюджет",
            (Field::Budget, Language::En) => "Budget",
            (Field::Message, Language::Ru) => "Сообщение",
            (Field::Message, Language::En) => "Message",
        }
    }

    pub fn field_error(error: &FieldError, language: Language) -> String {
        match (error.kind, language) {
            (FieldErrorKind::Required, Language::Ru) => "Введите имя".to_string(),
            (FieldErrorKind::Required, Language::En) => "Please enter your name".to_string(),
            (FieldErrorKind::ContactRequired, Language::Ru) => {
                "Укажите телефон или email".to_string()
            }
            (FieldErrorKind::ContactRequired, Language::En) => {
                "Please provide a phone number or email".to_string()
            }
            (FieldErrorKind::InvalidEmail, Language::Ru) => "Некорректный email".to_string(),
            (FieldErrorKind::InvalidEmail, Language::En) => {
                "Please enter a valid email".to_string()
            }
            (FieldErrorKind::TooLong { max }, Language::Ru) => {
                format!("Не более {max} символов")
            }
            (FieldErrorKind::TooLong { max }, Language::En) => {
                format!("At most {max} characters")
            }
        }
    }

    /// Localized text for a reason the handler returned with HTTP 400.
    pub fn reject_reason(reason: RejectReason, language: Language) -> String {
        let kind = match reason {
            RejectReason::NameRequired => FieldErrorKind::Required,
            RejectReason::ContactRequired => FieldErrorKind::ContactRequired,
            RejectReason::InvalidEmail => FieldErrorKind::InvalidEmail,
        };
        Self::field_error(&FieldError::new(reason.field(), kind), language)
    }
}
