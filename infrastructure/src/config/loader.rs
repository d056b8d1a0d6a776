//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ADVISOR_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./advisor.toml` or `./.advisor.toml`
    /// 4. Global: `~/.config/supplement-advisor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["advisor.toml", ".advisor.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Env vars mirror the original app's configuration surface
        // (ADVISOR_USE_MOCK, ADVISOR_MODEL, ADVISOR_API_KEY, ...)
        figment = figment.merge(Env::prefixed("ADVISOR_"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("supplement-advisor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["advisor.toml", ".advisor.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.model.as_str(), "gpt-4");
        assert!(!config.use_mock);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(
            path.unwrap()
                .to_string_lossy()
                .contains("supplement-advisor")
        );
    }

    #[test]
    fn test_project_file_and_env_precedence() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "advisor.toml",
                r#"
                    model = "gpt-4o-mini"
                    use_mock = false
                    timeout_seconds = 30
                "#,
            )?;
            jail.set_env("ADVISOR_USE_MOCK", "true");

            let config = ConfigLoader::load(None).expect("config should load");
            // File sets the model, env overrides the mock flag
            assert_eq!(config.model.as_str(), "gpt-4o-mini");
            assert!(config.use_mock);
            assert_eq!(config.timeout_seconds, 30);
            Ok(())
        });
    }

    #[test]
    fn test_env_only_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ADVISOR_MODEL", "gpt-5-nano");
            jail.set_env("ADVISOR_MAX_RETRIES", "1");

            let config = ConfigLoader::load(None).expect("config should load");
            assert_eq!(config.model.as_str(), "gpt-5-nano");
            assert_eq!(config.max_retries, 1);
            Ok(())
        });
    }
}
