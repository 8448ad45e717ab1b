//! Configuration management module.
//!
//! This module loads the application configuration once at startup: the
//! contact API location, environment name, analytics and debug flags. Values
//! come from `config.yml` and may be overridden by environment variables.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/folio-tui";

pub const API_URL_VAR: &str = "FOLIO_API_URL";
pub const ENVIRONMENT_VAR: &str = "FOLIO_ENVIRONMENT";
pub const ENABLE_ANALYTICS_VAR: &str = "FOLIO_ENABLE_ANALYTICS";
pub const DEBUG_VAR: &str = "FOLIO_DEBUG";
pub const ANALYTICS_ID_VAR: &str = "FOLIO_ANALYTICS_ID";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub environment: String,
    pub enable_analytics: bool,
    pub debug: bool,
    pub analytics_id: Option<String>,
    dir_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default)]
    pub enable_analytics: bool,
    #[serde(default)]
    pub debug: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_id: Option<String>,
}

fn default_api_url() -> String {
    "http://localhost:3001/api".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

/// Interpret common spellings of a boolean flag.
///
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config {
            api_url: default_api_url(),
            environment: default_environment(),
            enable_analytics: false,
            debug: false,
            analytics_id: None,
            dir_path: None,
        }
    }

    /// Load the configuration file from the custom directory if provided or
    /// the default directory otherwise, then apply environment overrides.
    /// A default file is written if none exists.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }
        self.dir_path = Some(dir_path.clone());

        let file_path = dir_path.join(FILE_NAME);
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.api_url = data.api_url;
            self.environment = data.environment;
            self.enable_analytics = data.enable_analytics;
            self.debug = data.debug;
            self.analytics_id = data.analytics_id;
        } else {
            self.create_file(&file_path)?;
        }

        self.apply_env(|key| std::env::var(key).ok())
    }

    /// Override values from environment-style lookups.
    ///
    pub fn apply_env<F>(&mut self, lookup: F) -> AppResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        if let Some(environment) = lookup(ENVIRONMENT_VAR).filter(|v| !v.trim().is_empty()) {
            self.environment = environment.trim().to_string();
        }
        if let Some(value) = lookup(ENABLE_ANALYTICS_VAR) {
            self.enable_analytics = parse_flag(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: ENABLE_ANALYTICS_VAR.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(DEBUG_VAR) {
            self.debug = parse_flag(&value).ok_or_else(|| ConfigError::InvalidValue {
                key: DEBUG_VAR.to_string(),
                value: value.clone(),
            })?;
        }
        if let Some(id) = lookup(ANALYTICS_ID_VAR).filter(|v| !v.trim().is_empty()) {
            self.analytics_id = Some(id.trim().to_string());
        }
        self.validate()
    }

    /// Check that the values make sense together.
    ///
    pub fn validate(&self) -> AppResult<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "api_url".to_string(),
                value: self.api_url.clone(),
            }
            .into());
        }
        if self.enable_analytics && self.analytics_id.is_none() {
            warn!("Analytics is enabled but no analytics id is configured.");
        }
        Ok(())
    }

    /// Return the directory holding configuration and preferences.
    ///
    pub fn dir_path(&self) -> AppResult<PathBuf> {
        self.dir_path
            .clone()
            .ok_or_else(|| ConfigError::FilePathNotSet.into())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Attempt to serialize the configuration data and write it to the disk,
    /// returning any unrecoverable errors.
    ///
    fn create_file(&self, file_path: &Path) -> AppResult<()> {
        let data = FileSpec {
            api_url: self.api_url.clone(),
            environment: self.environment.clone(),
            enable_analytics: self.enable_analytics,
            debug: self.debug,
            analytics_id: self.analytics_id.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        let save_error = |e| ConfigError::SaveFailed {
            path: file_path.to_path_buf(),
            source: e,
        };
        let mut file = fs::File::create(file_path).map_err(save_error)?;
        write!(file, "{}", content).map_err(save_error)?;
        file.flush().map_err(save_error)?; // Ensure data is written to disk
        debug!("Wrote default configuration to {}", file_path.display());
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.api_url, "http://localhost:3001/api");
        assert_eq!(config.environment, "development");
        assert!(!config.enable_analytics);
        assert!(!config.debug);
        assert!(config.dir_path().is_err());
    }

    #[test]
    fn test_load_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio");
        let mut config = Config::new();
        config.load(path.to_str()).unwrap();
        assert!(path.join(FILE_NAME).exists());
        assert_eq!(config.dir_path().unwrap(), path);
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(FILE_NAME),
            "api_url: https://api.example.com\nenvironment: production\nenable_analytics: true\nanalytics_id: G-123\n",
        )
        .unwrap();
        let mut loaded = Config::new();
        loaded.load(dir.path().to_str()).unwrap();
        // The process environment may carry overrides, so only check fields
        // that were read from the file when no override exists.
        if std::env::var(API_URL_VAR).is_err() {
            assert_eq!(loaded.api_url, "https://api.example.com");
        }
        if std::env::var(ENVIRONMENT_VAR).is_err() {
            assert!(loaded.is_production());
        }
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::new();
        config
            .apply_env(lookup_from(&[
                (API_URL_VAR, " https://api.example.com "),
                (ENVIRONMENT_VAR, "staging"),
                (ENABLE_ANALYTICS_VAR, "true"),
                (DEBUG_VAR, "1"),
                (ANALYTICS_ID_VAR, "G-XYZ"),
            ]))
            .unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.environment, "staging");
        assert!(config.enable_analytics);
        assert!(config.debug);
        assert_eq!(config.analytics_id.as_deref(), Some("G-XYZ"));
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let mut config = Config::new();
        let result = config.apply_env(lookup_from(&[(DEBUG_VAR, "maybe")]));
        assert!(matches!(
            result,
            Err(crate::error::AppError::Config(ConfigError::InvalidValue { .. }))
        ));
    }

    #[test]
    fn test_invalid_api_url_rejected() {
        let mut config = Config::new();
        let result = config.apply_env(lookup_from(&[(API_URL_VAR, "ftp://example.com")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("YES"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }
}
