//! Application-level configuration.
//!
//! Configuration types that control how use cases behave, independent of
//! where the values were loaded from.

/// Addressing for the operator notification email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    /// `From` header, e.g. `Studio <noreply@studio.kz>`
    pub sender: String,
    /// Operator inbox(es) receiving new inquiries
    pub operator_inbox: Vec<String>,
}

impl NotificationSettings {
    pub fn new(sender: impl Into<String>, operator_inbox: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            operator_inbox: vec![operator_inbox.into()],
        }
    }
}

