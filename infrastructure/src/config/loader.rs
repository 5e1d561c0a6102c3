//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Prefix of environment overrides, e.g. `INQUIRY_SERVER__LISTEN`
pub const ENV_PREFIX: &str = "INQUIRY_";

const PROJECT_FILES: [&str; 2] = ["inquiry.toml", ".inquiry.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `INQUIRY_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./inquiry.toml` or `./.inquiry.toml`
    /// 4. Global config: `$XDG_CONFIG_HOME/studio-inquiry/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Secrets share the prefix but are read separately
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .ignore(&["STORE_KEY", "NOTIFY_KEY"])
                .split("__"),
        );

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("studio-inquiry").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./inquiry.toml or ./.inquiry.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileStoreBackend;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.store.backend, FileStoreBackend::Jsonl);
        assert!(config.notification.enabled);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("studio-inquiry"));
    }

    #[test]
    fn test_project_file_and_env_override() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "inquiry.toml",
                r#"
[server]
listen = "127.0.0.1:3000"

[store]
backend = "memory"
"#,
            )?;
            jail.set_env("INQUIRY_SERVER__LISTEN", "127.0.0.1:9000");
            jail.set_env("INQUIRY_NOTIFICATION__ENABLED", "false");
            jail.set_env("INQUIRY_STORE_KEY", "secret");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.server.listen, "127.0.0.1:9000");
            assert_eq!(config.store.backend, FileStoreBackend::Memory);
            assert!(!config.notification.enabled);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_beats_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("inquiry.toml", "[server]\npath = \"/project\"\n")?;
            jail.create_file("custom.toml", "[server]\npath = \"/custom\"\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.server.path, "/custom");
            Ok(())
        });
    }
}
