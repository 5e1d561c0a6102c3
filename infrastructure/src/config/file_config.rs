//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use inquiry_application::NotificationSettings;
use inquiry_domain::Language;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("server.listen cannot be empty")]
    EmptyListen,

    #[error("server.path must start with '/': {0}")]
    InvalidPath(String),

    #[error("store.url is required when store.backend = \"rest\"")]
    MissingStoreUrl,

    #[error("notification.from is required when notifications are enabled")]
    MissingSender,

    #[error("notification.to needs at least one recipient when notifications are enabled")]
    MissingRecipient,
}

/// Raw server configuration from TOML (`[server]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to bind
    pub listen: String,
    /// Route of the inquiry handler
    pub path: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8080".to_string(),
            path: "/inquiry".to_string(),
        }
    }
}

/// Which store adapter backs the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStoreBackend {
    /// Hosted table behind a REST insert endpoint
    Rest,
    /// Local append-only JSONL file (default)
    #[default]
    Jsonl,
    /// Process memory, lost on restart
    Memory,
}

/// Raw store configuration from TOML (`[store]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: FileStoreBackend,
    /// REST base URL (e.g. `https://project.example.co`)
    pub url: Option<String>,
    /// Table name for the REST backend
    pub table: String,
    /// File path for the JSONL backend
    pub path: String,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: FileStoreBackend::default(),
            url: None,
            table: "inquiries".to_string(),
            path: "data/inquiries.jsonl".to_string(),
        }
    }
}

/// Raw notification configuration from TOML (`[notification]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationConfig {
    pub enabled: bool,
    /// Email provider endpoint
    pub endpoint: String,
    /// Sender, e.g. `Studio <noreply@studio.kz>`
    pub from: Option<String>,
    /// Operator inbox(es)
    pub to: Vec<String>,
}

impl Default for FileNotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.resend.com/emails".to_string(),
            from: None,
            to: Vec::new(),
        }
    }
}

/// Raw submission client configuration from TOML (`[client]`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// URL of the inquiry handler
    pub endpoint: String,
    /// Public key sent as `apikey` and bearer token, if the host requires one
    pub anon_key: Option<String>,
    /// Default form language
    pub language: Language,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8080/inquiry".to_string(),
            anon_key: None,
            language: Language::default(),
        }
    }
}

/// Root of the TOML configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub store: FileStoreConfig,
    pub notification: FileNotificationConfig,
    pub client: FileClientConfig,
}

impl FileConfig {
    /// Validate the handler-side settings
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.listen.trim().is_empty() {
            return Err(ConfigValidationError::EmptyListen);
        }
        if !self.server.path.starts_with('/') {
            return Err(ConfigValidationError::InvalidPath(self.server.path.clone()));
        }
        if self.store.backend == FileStoreBackend::Rest
            && self.store.url.as_deref().is_none_or(|u| u.trim().is_empty())
        {
            return Err(ConfigValidationError::MissingStoreUrl);
        }
        if self.notification.enabled {
            if self
                .notification
                .from
                .as_deref()
                .is_none_or(|f| f.trim().is_empty())
            {
                return Err(ConfigValidationError::MissingSender);
            }
            if self.notification.to.iter().all(|t| t.trim().is_empty()) {
                return Err(ConfigValidationError::MissingRecipient);
            }
        }
        Ok(())
    }

    /// Addressing for the notification email
    pub fn notification_settings(&self) -> NotificationSettings {
        NotificationSettings {
            sender: self.notification.from.clone().unwrap_or_default(),
            operator_inbox: self
                .notification
                .to
                .iter()
                .filter(|t| !t.trim().is_empty())
                .cloned()
                .collect(),
        }
    }
}
