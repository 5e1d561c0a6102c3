//! Inquiry fields and their length limits

use std::fmt;

/// A single field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    City,
    ProjectType,
    Area,
    Budget,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Phone,
        Field::Email,
        Field::City,
        Field::ProjectType,
        Field::Area,
        Field::Budget,
        Field::Message,
    ];

    /// Maximum length in characters, applied after trimming.
    pub fn max_len(&self) -> usize {
        match self {
            Field::Name => 100,
            Field::Phone => 50,
            Field::Email => 255,
            Field::City => 100,
            Field::ProjectType => 100,
            Field::Area => 50,
            Field::Budget => 100,
            Field::Message => 2000,
        }
    }

    /// Name of the field on the wire (camelCase JSON key).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::City => "city",
            Field::ProjectType => "projectType",
            Field::Area => "area",
            Field::Budget => "budget",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
