//! Console output for submit attempts

use colored::Colorize;
use inquiry_application::SubmitOutcome;
use inquiry_domain::{ClientMessages, FieldError, Language};

/// Formats submission outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// One block of feedback for a submit attempt, localized like the form.
    pub fn format_outcome(outcome: &SubmitOutcome, language: Language) -> String {
        match outcome {
            SubmitOutcome::Sent {
                message,
                email_sent,
            } => {
                let mut output = format!("{} {}\n", "✓".green().bold(), message.green());
                if !email_sent {
                    output.push_str(&format!(
                        "  {}\n",
                        "(stored, but the studio was not notified by email)".dimmed()
                    ));
                }
                output
            }
            SubmitOutcome::RejectedLocally(errors) => Self::format_field_errors(errors, language),
            SubmitOutcome::Busy => format!(
                "{} {}\n",
                "…".yellow(),
                ClientMessages::sending(language).yellow()
            ),
            SubmitOutcome::Failed { message, error } => format!(
                "{} {}\n  {}\n",
                "✗".red().bold(),
                message.red(),
                error.to_string().dimmed()
            ),
        }
    }

    /// Inline field errors, one per line with the field label.
    pub fn format_field_errors(errors: &[FieldError], language: Language) -> String {
        let mut output = String::new();
        for error in errors {
            output.push_str(&format!(
                "{} {}: {}\n",
                "✗".red().bold(),
                ClientMessages::field_label(error.field, language).cyan(),
                ClientMessages::field_error(error, language)
            ));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquiry_application::TransportError;
    use inquiry_domain::{Field, FieldErrorKind};

    #[test]
    fn test_sent_without_email_mentions_it() {
        let outcome = SubmitOutcome::Sent {
            message: "Thank you!".to_string(),
            email_sent: false,
        };
        let text = ConsoleFormatter::format_outcome(&outcome, Language::En);
        assert!(text.contains("Thank you!"));
        assert!(text.contains("not notified"));
    }

    #[test]
    fn test_field_errors_are_labelled() {
        let errors = vec![
            FieldError::new(Field::Name, FieldErrorKind::Required),
            FieldError::new(Field::Message, FieldErrorKind::TooLong { max: 2000 }),
        ];
        let text = ConsoleFormatter::format_field_errors(&errors, Language::En);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("At most 2000 characters"));
    }

    #[test]
    fn test_failed_shows_cause() {
        let outcome = SubmitOutcome::Failed {
            message: "Something went wrong".to_string(),
            error: TransportError::Network("connection refused".to_string()),
        };
        let text = ConsoleFormatter::format_outcome(&outcome, Language::En);
        assert!(text.contains("connection refused"));
    }
}
