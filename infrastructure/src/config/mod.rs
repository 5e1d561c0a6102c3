//! Configuration loading for studio-inquiry
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INQUIRY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./inquiry.toml` or `./.inquiry.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/studio-inquiry/config.toml`
//! 5. Default values
//!
//! Secrets are never part of the file configuration; see [`Secrets`].

mod file_config;
mod loader;
mod secrets;

pub use file_config::{
    ConfigValidationError, FileClientConfig, FileConfig, FileNotificationConfig, FileServerConfig,
    FileStoreBackend, FileStoreConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
pub use secrets::{NOTIFY_KEY_VAR, STORE_KEY_VAR, SecretError, Secrets};
