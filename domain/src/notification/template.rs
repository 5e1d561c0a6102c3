//! Operator notification email template

use crate::catalog::{budget_label, project_type_label};
use crate::core::language::Language;
use crate::inquiry::entities::Inquiry;
use crate::inquiry::field::Field;
use crate::messages::ClientMessages;

/// Rendered subject and HTML body of a notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailContent {
    pub subject: String,
    pub html: String,
}

/// Builds the email sent to the studio operator for a new inquiry.
pub struct NotificationTemplate;

impl NotificationTemplate {
    pub fn subject(inquiry: &Inquiry) -> String {
        match inquiry.language {
            Language::Ru => format!("Новая заявка с сайта: {}", inquiry.name),
            Language::En => format!("New website inquiry: {}", inquiry.name),
        }
    }

    fn heading(language: Language) -> &'static str {
        match language {
            Language::Ru => "Новая заявка на дизайн интерьера",
            Language::En => "New interior design inquiry",
        }
    }

    fn footer(language: Language) -> &'static str {
        match language {
            Language::Ru => "Заявка сохранена в базе данных.",
            Language::En => "The inquiry has been saved to the database.",
        }
    }

    /// Render the full email. Absent fields produce no row.
    pub fn render(inquiry: &Inquiry) -> EmailContent {
        let language = inquiry.language;
        let mut rows = String::new();

        for field in Field::ALL {
            let Some(value) = inquiry.get(field) else {
                continue;
            };
            let label = ClientMessages::field_label(field, language);
            let cell = match field {
                Field::Email => {
                    let email = escape_html(value);
                    format!(r#"<a href="mailto:{email}">{email}</a>"#)
                }
                Field::Phone => {
                    let phone = escape_html(value);
                    let dial: String = value
                        .chars()
                        .filter(|c| c.is_ascii_digit() || *c == '+')
                        .collect();
                    format!(r#"<a href="tel:{dial}">{phone}</a>"#)
                }
                Field::ProjectType => escape_html(project_type_label(value, language)),
                Field::Budget => escape_html(budget_label(value, language)),
                Field::Message => escape_html(value).replace('\n', "<br>"),
                _ => escape_html(value),
            };
            rows.push_str(&format!(
                "<tr><td style=\"padding:6px 12px;color:#666;\">{}</td>\
                 <td style=\"padding:6px 12px;\">{}</td></tr>\n",
                label, cell
            ));
        }

        let html = format!(
            r#"<div style="font-family:Arial,sans-serif;max-width:600px;">
<h2 style="color:#333;">{heading}</h2>
<table style="border-collapse:collapse;width:100%;">
{rows}</table>
<p style="color:#999;font-size:12px;">{footer} ({lang})</p>
</div>"#,
            heading = Self::heading(language),
            rows = rows,
            footer = Self::footer(language),
            lang = language.code(),
        );

        EmailContent {
            subject: Self::subject(inquiry),
            html,
        }
    }
}

/// Escape text for safe inclusion in HTML element content and attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
