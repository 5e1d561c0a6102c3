//! Validation rule set for inquiries.
//!
//! The same rules run twice: the submission client collects every violation
//! so the form can highlight all fields at once, and the handler fails fast
//! on the first violation before normalizing the record.
//!
//! | Rule | Client | Handler |
//! |------|--------|---------|
//! | `name` non-empty after trim | [`FieldErrorKind::Required`] | [`RejectReason::NameRequired`] |
//! | `phone` or `email` present | [`FieldErrorKind::ContactRequired`] on `phone` | [`RejectReason::ContactRequired`] |
//! | `email` shape | [`FieldErrorKind::InvalidEmail`] | [`RejectReason::InvalidEmail`] |
//! | length limits | [`FieldErrorKind::TooLong`] | truncated by [`normalize`] |

use crate::core::string::{char_len, non_empty, truncate_chars};
use crate::inquiry::entities::{Inquiry, InquiryRequest};
use crate::inquiry::field::Field;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Deliberately loose: something before `@`, a dot somewhere after it, no whitespace.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Why the handler refused a submission.
///
/// The display strings are part of the HTTP contract.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    #[error("Name is required")]
    NameRequired,

    #[error("Phone or email is required")]
    ContactRequired,

    #[error("Invalid email format")]
    InvalidEmail,
}

impl RejectReason {
    /// Map a reason string returned by the handler back to the variant.
    pub fn from_wire(reason: &str) -> Option<Self> {
        match reason {
            "Name is required" => Some(RejectReason::NameRequired),
            "Phone or email is required" => Some(RejectReason::ContactRequired),
            "Invalid email format" => Some(RejectReason::InvalidEmail),
            _ => None,
        }
    }

    /// Field the UI attaches this reason to.
    pub fn field(&self) -> Field {
        match self {
            RejectReason::NameRequired => Field::Name,
            RejectReason::ContactRequired => Field::Phone,
            RejectReason::InvalidEmail => Field::Email,
        }
    }
}

/// Kind of a client-side violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
    ContactRequired,
    InvalidEmail,
    TooLong { max: usize },
}

/// A single client-side violation attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: FieldErrorKind) -> Self {
        Self { field, kind }
    }
}

/// Check the basic `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Authoritative handler check. Returns the first violated rule.
///
/// Lengths are not checked here; [`normalize`] truncates instead.
pub fn validate_submission(request: &InquiryRequest) -> Result<(), RejectReason> {
    let name = request.get(Field::Name).and_then(non_empty);
    if name.is_none() {
        return Err(RejectReason::NameRequired);
    }

    let phone = request.get(Field::Phone).and_then(non_empty);
    let email = request.get(Field::Email).and_then(non_empty);
    if phone.is_none() && email.is_none() {
        return Err(RejectReason::ContactRequired);
    }

    if let Some(email) = email
        && !is_valid_email(email)
    {
        return Err(RejectReason::InvalidEmail);
    }

    Ok(())
}

/// Collect every client-side violation for a request.
///
/// At most one error is reported per field.
pub fn collect_violations(request: &InquiryRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match request.get(Field::Name).and_then(non_empty) {
        None => errors.push(FieldError::new(Field::Name, FieldErrorKind::Required)),
        Some(name) => push_if_too_long(&mut errors, Field::Name, name),
    }

    let phone = request.get(Field::Phone).and_then(non_empty);
    let email = request.get(Field::Email).and_then(non_empty);

    match phone {
        None if email.is_none() => {
            errors.push(FieldError::new(Field::Phone, FieldErrorKind::ContactRequired));
        }
        None => {}
        Some(phone) => push_if_too_long(&mut errors, Field::Phone, phone),
    }

    if let Some(email) = email {
        if !is_valid_email(email) {
            errors.push(FieldError::new(Field::Email, FieldErrorKind::InvalidEmail));
        } else {
            push_if_too_long(&mut errors, Field::Email, email);
        }
    }

    for field in [
        Field::City,
        Field::ProjectType,
        Field::Area,
        Field::Budget,
        Field::Message,
    ] {
        if let Some(value) = request.get(field).and_then(non_empty) {
            push_if_too_long(&mut errors, field, value);
        }
    }

    errors
}

fn push_if_too_long(errors: &mut Vec<FieldError>, field: Field, value: &str) {
    let max = field.max_len();
    if char_len(value) > max {
        errors.push(FieldError::new(field, FieldErrorKind::TooLong { max }));
    }
}

/// Trim, cap and normalize a request into an [`Inquiry`].
///
/// Applied regardless of client validation. Blank optional fields become
/// `None`; `email` is lowercased.
pub fn normalize(request: &InquiryRequest) -> Inquiry {
    let capped = |field: Field| {
        request
            .get(field)
            .and_then(non_empty)
            .map(|v| truncate_chars(v, field.max_len()).to_string())
    };

    Inquiry {
        name: capped(Field::Name).unwrap_or_default(),
        phone: capped(Field::Phone),
        email: request
            .get(Field::Email)
            .and_then(non_empty)
            .map(|e| truncate_chars(&e.to_lowercase(), Field::Email.max_len()).to_string()),
        city: capped(Field::City),
        project_type: capped(Field::ProjectType),
        area: capped(Field::Area),
        budget: capped(Field::Budget),
        message: capped(Field::Message),
        language: request.language(),
    }
}

impl TryFrom<&InquiryRequest> for Inquiry {
    type Error = RejectReason;

    fn try_from(request: &InquiryRequest) -> Result<Self, Self::Error> {
        validate_submission(request)?;
        Ok(normalize(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::language::Language;

    fn request(name: &str) -> InquiryRequest {
        InquiryRequest {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    // ==================== Email shape ====================

    #[test]
    fn email_pattern_accepts_basic_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@studio.example.kz"));
        assert!(is_valid_email("A@B.CO"));
    }

    #[test]
    fn email_pattern_rejects_missing_parts() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@bcom"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    // ==================== Handler rules ====================

    #[test]
    fn blank_name_is_rejected_first() {
        for name in ["", "   ", "\t\n"] {
            let mut req = request(name);
            req.email = Some("not-an-email".to_string());
            assert_eq!(validate_submission(&req), Err(RejectReason::NameRequired));
        }
        assert_eq!(
            validate_submission(&InquiryRequest::default()),
            Err(RejectReason::NameRequired)
        );
    }

    #[test]
    fn missing_contact_is_rejected() {
        assert_eq!(
            validate_submission(&request("Bob")),
            Err(RejectReason::ContactRequired)
        );

        let mut req = request("Bob");
        req.phone = Some("  ".to_string());
        req.email = Some("".to_string());
        assert_eq!(validate_submission(&req), Err(RejectReason::ContactRequired));
    }

    #[test]
    fn malformed_email_is_rejected_even_with_phone() {
        let mut req = request("Bob");
        req.phone = Some("+7 777 000 0000".to_string());
        req.email = Some("not-an-email".to_string());
        assert_eq!(validate_submission(&req), Err(RejectReason::InvalidEmail));
    }

    #[test]
    fn phone_only_is_accepted() {
        let mut req = request("Aliya");
        req.phone = Some("+7 777 000 0000".to_string());
        assert_eq!(validate_submission(&req), Ok(()));
    }

    #[test]
    fn reject_reason_wire_strings() {
        assert_eq!(RejectReason::NameRequired.to_string(), "Name is required");
        assert_eq!(
            RejectReason::ContactRequired.to_string(),
            "Phone or email is required"
        );
        assert_eq!(RejectReason::InvalidEmail.to_string(), "Invalid email format");
        for reason in [
            RejectReason::NameRequired,
            RejectReason::ContactRequired,
            RejectReason::InvalidEmail,
        ] {
            assert_eq!(RejectReason::from_wire(&reason.to_string()), Some(reason));
        }
        assert_eq!(RejectReason::from_wire("Failed to save inquiry"), None);
    }

    // ==================== Client rules ====================

    #[test]
    fn client_collects_all_violations() {
        let req = InquiryRequest {
            name: Some(" ".to_string()),
            city: Some("x".repeat(101)),
            message: Some("m".repeat(2001)),
            ..Default::default()
        };
        let errors = collect_violations(&req);
        assert_eq!(
            errors,
            vec![
                FieldError::new(Field::Name, FieldErrorKind::Required),
                FieldError::new(Field::Phone, FieldErrorKind::ContactRequired),
                FieldError::new(Field::City, FieldErrorKind::TooLong { max: 100 }),
                FieldError::new(Field::Message, FieldErrorKind::TooLong { max: 2000 }),
            ]
        );
    }

    #[test]
    fn client_reports_invalid_email_once() {
        let mut req = request("Bob");
        req.email = Some(format!("{}@", "a".repeat(300)));
        assert_eq!(
            collect_violations(&req),
            vec![FieldError::new(Field::Email, FieldErrorKind::InvalidEmail)]
        );
    }

    #[test]
    fn client_limits_count_characters() {
        let mut req = request(&"Ж".repeat(100));
        req.phone = Some("1".repeat(50));
        req.area = Some("9".repeat(51));
        assert_eq!(
            collect_violations(&req),
            vec![FieldError::new(Field::Area, FieldErrorKind::TooLong { max: 50 })]
        );
    }

    #[test]
    fn valid_request_has_no_violations() {
        let mut req = request("Aliya");
        req.email = Some(" aliya@example.com ".to_string());
        assert!(collect_violations(&req).is_empty());
    }

    // ==================== Normalization ====================

    #[test]
    fn normalize_trims_caps_and_lowercases() {
        let req = InquiryRequest {
            name: Some(format!("  {}  ", "n".repeat(150))),
            phone: Some("   ".to_string()),
            email: Some("  Bob@Example.COM ".to_string()),
            city: Some(" Almaty ".to_string()),
            area: Some("120 m2".to_string()),
            message: Some("x".repeat(3000)),
            language: Some("en".to_string()),
            ..Default::default()
        };
        let inquiry = normalize(&req);
        assert_eq!(inquiry.name, "n".repeat(100));
        assert_eq!(inquiry.phone, None);
        assert_eq!(inquiry.email.as_deref(), Some("bob@example.com"));
        assert_eq!(inquiry.city.as_deref(), Some("Almaty"));
        assert_eq!(inquiry.area.as_deref(), Some("120 m2"));
        assert_eq!(inquiry.project_type, None);
        assert_eq!(inquiry.message.as_ref().map(|m| m.chars().count()), Some(2000));
        assert_eq!(inquiry.language, Language::En);
    }

    #[test]
    fn normalize_keeps_leading_characters() {
        let message: String = (0..2500).map(|i| if i < 2000 { 'a' } else { 'b' }).collect();
        let mut req = request("Bob");
        req.phone = Some("1".to_string());
        req.message = Some(message);
        let inquiry = normalize(&req);
        assert_eq!(inquiry.message, Some("a".repeat(2000)));
    }

    #[test]
    fn normalize_caps_every_field_at_its_limit() {
        for field in Field::ALL {
            let max = field.max_len();
            let kept = "k".repeat(max);
            let submitted = format!("  {}{}  ", kept, "z".repeat(25));
            let req = InquiryRequest {
                name: Some(submitted.clone()),
                phone: Some(submitted.clone()),
                email: Some(submitted.clone()),
                city: Some(submitted.clone()),
                project_type: Some(submitted.clone()),
                area: Some(submitted.clone()),
                budget: Some(submitted.clone()),
                message: Some(submitted),
                language: None,
            };
            let inquiry = normalize(&req);
            assert_eq!(inquiry.get(field), Some(kept.as_str()), "field {}", field);
        }
    }

    #[test]
    fn lowercased_email_stays_within_limit() {
        // 'İ' lowercases to two characters
        let mut req = request("Bob");
        req.email = Some(format!("{}@b.co", "\u{130}".repeat(250)));
        assert_eq!(validate_submission(&req), Ok(()));

        let email = normalize(&req).email.unwrap();
        assert_eq!(email.chars().count(), Field::Email.max_len());
        assert!(email.starts_with("i\u{307}"));
    }

    #[test]
    fn try_from_validates_then_normalizes() {
        let mut req = request(" Aliya ");
        req.phone = Some("+7 777 000 0000".to_string());
        req.language = Some("ru".to_string());
        let inquiry = Inquiry::try_from(&req).unwrap();
        assert_eq!(inquiry.name, "Aliya");
        assert_eq!(inquiry.language, Language::Ru);

        assert_eq!(
            Inquiry::try_from(&request("Bob")),
            Err(RejectReason::ContactRequired)
        );
    }
}
