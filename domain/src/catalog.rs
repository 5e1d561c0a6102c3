//! Option lists offered by the form for `projectType` and `budget`.
//!
//! The handler does not enforce these as closed sets; a value outside the
//! catalog is stored and shown as submitted.

use crate::core::language::Language;

/// A selectable option with its wire code and localized labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOption {
    pub code: &'static str,
    pub label_ru: &'static str,
    pub label_en: &'static str,
}

impl CatalogOption {
    pub fn label(&self, language: Language) -> &'static str {
        match language {
            Language::Ru => self.label_ru,
            Language::En => self.label_en,
        }
    }
}

pub const PROJECT_TYPES: &[CatalogOption] = &[
    CatalogOption { code: "apartment", label_ru: "Квартира", label_en: "Apartment" },
    CatalogOption { code: "house", label_ru: "Частный дом", label_en: "House" },
    CatalogOption { code: "office", label_ru: "Офис", label_en: "Office" },
    CatalogOption { code: "commercial", label_ru: "Коммерческое помещение", label_en: "Commercial space" },
    CatalogOption { code: "other", label_ru: "Другое", label_en: "Other" },
];

pub const BUDGET_RANGES: &[CatalogOption] = &[
    CatalogOption { code: "under_1m", label_ru: "До 1 млн ₸", label_en: "Under 1M ₸" },
    CatalogOption { code: "1m_3m", label_ru: "1–3 млн ₸", label_en: "1–3M ₸" },
    CatalogOption { code: "3m_5m", label_ru: "3–5 млн ₸", label_en: "3–5M ₸" },
    CatalogOption { code: "5m_10m", label_ru: "5–10 млн ₸", label_en: "5–10M ₸" },
    CatalogOption { code: "over_10m", label_ru: "Более 10 млн ₸", label_en: "Over 10M ₸" },
];

fn find(options: &'static [CatalogOption], code: &str) -> Option<&'static CatalogOption> {
    options.iter().find(|o| o.code == code)
}

/// Human label for a submitted `projectType`, or the value itself when unknown.
pub fn project_type_label(value: &str, language: Language) -> &str {
    find(PROJECT_TYPES, value).map_or(value, |o| o.label(language))
}

/// Human label for a submitted `budget`, or the value itself when unknown.
pub fn budget_label(value: &str, language: Language) -> &str {
    find(BUDGET_RANGES, value).map_or(value, |o| o.label(language))
}

/// Comma-separated codes, for CLI help.
pub fn codes(options: &[CatalogOption]) -> String {
    options.iter().map(|o| o.code).collect::<Vec<_>>().join(", ")
}
