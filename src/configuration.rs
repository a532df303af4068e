//! Configuration management.
//!
//! The API key and base URL are resolved once at startup from, in order of
//! precedence: an explicitly provided YAML file, the environment, the default
//! YAML file in the user's configuration directory, and finally the built-in
//! default base URL. The result is an immutable [`Configuration`] value that
//! is handed to the client explicitly.

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "pagertree";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const DEFAULT_BASE_URL: &str = "https://api.pagertree.com/api/v4";

pub const ENV_API_KEY: &str = "PAGERTREE_API_KEY";
pub const ENV_BASE_URL: &str = "PAGERTREE_BASE_URL";
pub const ENV_CONFIG_DIR: &str = "PAGERTREE_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data from {path:?}, because of: {cause}")]
    FailedToLoadData {
        path: PathBuf,
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing value for property {name:?}")]
    MissingRequiredPropertyValue { name: String },
    #[error("invalid base URL {url:?}: {cause}")]
    InvalidBaseUrl { url: String, cause: url::ParseError },
}

/// On-disk shape of a configuration file. Every key is optional so that a
/// file can override just one setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ConfigurationFile {
    pub fn load(path: &Path) -> Result<ConfigurationFile, ConfigurationError> {
        debug!("Loading configuration from {}...", path.display());
        let content = fs::read_to_string(path).map_err(|cause| ConfigurationError::FailedToLoadData {
            path: path.to_path_buf(),
            cause: Box::new(cause),
        })?;
        if content.trim().is_empty() {
            return Ok(ConfigurationFile::default());
        }
        serde_yaml::from_str(&content).map_err(|cause| ConfigurationError::FailedToLoadData {
            path: path.to_path_buf(),
            cause: Box::new(cause),
        })
    }
}

/// Resolved, immutable client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    api_key: String,
    base_url: String,
}

impl Configuration {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, ConfigurationError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigurationError::MissingRequiredPropertyValue {
                name: "api_key".to_string(),
            });
        }
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|cause| ConfigurationError::InvalidBaseUrl {
            url: base_url.clone(),
            cause,
        })?;
        Ok(Self { api_key, base_url })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The API key with everything but the last four characters hidden
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(ENV_CONFIG_DIR) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(mut path) => {
                path.push(DEFAULT_APPLICATION_ID);
                path.push(DEFAULT_CONFIGURATION_FILE_NAME);
                Ok(path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Resolve the configuration for this process.
    ///
    /// A `.env` file in the working directory is loaded into the environment
    /// first. An explicit `config_file` that cannot be read is an error; the
    /// default file is only consulted when it exists.
    pub fn resolve(config_file: Option<&Path>) -> Result<Configuration, ConfigurationError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }

        let explicit = config_file.map(ConfigurationFile::load).transpose()?;
        let default_file = match Self::get_default_configuration_file_path() {
            Ok(path) if path.is_file() => Some(ConfigurationFile::load(&path)?),
            _ => None,
        };

        Self::resolve_from(explicit, |name| std::env::var(name).ok(), default_file)
    }

    /// Merge the configuration sources, field by field, by precedence.
    pub fn resolve_from<F>(
        explicit: Option<ConfigurationFile>,
        env: F,
        default_file: Option<ConfigurationFile>,
    ) -> Result<Configuration, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let api_key = non_empty(explicit.as_ref().and_then(|f| f.api_key.clone()))
            .or_else(|| non_empty(env(ENV_API_KEY)))
            .or_else(|| non_empty(default_file.as_ref().and_then(|f| f.api_key.clone())))
            .ok_or_else(|| ConfigurationError::MissingRequiredPropertyValue {
                name: "api_key".to_string(),
            })?;

        let base_url = non_empty(explicit.as_ref().and_then(|f| f.base_url.clone()))
            .or_else(|| non_empty(env(ENV_BASE_URL)))
            .or_else(|| non_empty(default_file.as_ref().and_then(|f| f.base_url.clone())))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Configuration::new(api_key, base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    fn file(api_key: Option<&str>, base_url: Option<&str>) -> ConfigurationFile {
        ConfigurationFile {
            api_key: api_key.map(String::from),
            base_url: base_url.map(String::from),
        }
    }

    #[test]
    fn test_explicit_file_wins_over_environment() {
        let config = Configuration::resolve_from(
            Some(file(Some("from-file"), Some("https://file.example.com"))),
            env_of(&[(ENV_API_KEY, "from-env"), (ENV_BASE_URL, "https://env.example.com")]),
            None,
        )
        .unwrap();
        assert_eq!(config.api_key(), "from-file");
        assert_eq!(config.base_url(), "https://file.example.com");
    }

    #[test]
    fn test_environment_fills_fields_missing_from_file() {
        let config = Configuration::resolve_from(
            Some(file(None, Some("https://file.example.com"))),
            env_of(&[(ENV_API_KEY, "from-env")]),
            Some(file(Some("from-default"), None)),
        )
        .unwrap();
        assert_eq!(config.api_key(), "from-env");
        assert_eq!(config.base_url(), "https://file.example.com");
    }

    #[test]
    fn test_default_base_url_when_nothing_set() {
        let config =
            Configuration::resolve_from(None, env_of(&[(ENV_API_KEY, "k")]), None).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_api_key_fails() {
        let result = Configuration::resolve_from(None, env_of(&[]), Some(file(Some("  "), None)));
        assert!(matches!(
            result,
            Err(ConfigurationError::MissingRequiredPropertyValue { ref name }) if name == "api_key"
        ));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = Configuration::resolve_from(
            None,
            env_of(&[(ENV_API_KEY, "k"), (ENV_BASE_URL, "not a url")]),
            None,
        );
        assert!(matches!(result, Err(ConfigurationError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "api_key: abc123\nbase_url: https://example.com/api/v4").unwrap();
        let loaded = ConfigurationFile::load(tmp.path()).unwrap();
        assert_eq!(loaded, file(Some("abc123"), Some("https://example.com/api/v4")));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = ConfigurationFile::load(Path::new("/definitely/not/here.yml"));
        assert!(matches!(result, Err(ConfigurationError::FailedToLoadData { .. })));
    }

    #[test]
    fn test_masked_api_key() {
        let config = Configuration::new("abcdefgh", DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.masked_api_key(), "****efgh");
        let short = Configuration::new("abc", DEFAULT_BASE_URL).unwrap();
        assert_eq!(short.masked_api_key(), "***");
    }
}
