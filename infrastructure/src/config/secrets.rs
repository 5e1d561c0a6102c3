//! Secrets read from the environment at handler start

use thiserror::Error;

/// Persistence service credential
pub const STORE_KEY_VAR: &str = "INQUIRY_STORE_KEY";
/// Notification provider API key
pub const NOTIFY_KEY_VAR: &str = "INQUIRY_NOTIFY_KEY";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecretError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),
}

/// Credentials for the external collaborators
///
/// Never loaded from config files. `Debug` hides the values.
#[derive(Clone, Default)]
pub struct Secrets {
    store_key: Option<String>,
    notify_key: Option<String>,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("store_key", &self.store_key.as_ref().map(|_| "***"))
            .field("notify_key", &self.notify_key.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Secrets {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup; blank values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        Self {
            store_key: read(STORE_KEY_VAR),
            notify_key: read(NOTIFY_KEY_VAR),
        }
    }

    pub fn store_key(&self) -> Result<&str, SecretError> {
        self.store_key
            .as_deref()
            .ok_or(SecretError::Missing(STORE_KEY_VAR))
    }

    pub fn notify_key(&self) -> Result<&str, SecretError> {
        self.notify_key
            .as_deref()
            .ok_or(SecretError::Missing(NOTIFY_KEY_VAR))
    }
}
