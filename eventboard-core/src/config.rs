//! Startup configuration.
//!
//! Values come from an optional TOML file at ~/.config/eventboard/config.toml
//! (or the path in `EVENTBOARD_CONFIG`), overridden by `EVENTBOARD_*`
//! environment variables:
//!
//! ```toml
//! endpoint = "https://cloud.appwrite.io/v1"
//! project_id = "my-project"
//! database_id = "events-db"
//! collection_id = "events"
//! # api_key = "..."
//! # public_url = "https://events.example.com"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

use crate::constants::{DEFAULT_PUBLIC_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::{EventBoardError, EventBoardResult};

const ENV_PREFIX: &str = "EVENTBOARD";
const CONFIG_PATH_VAR: &str = "EVENTBOARD_CONFIG";

/// Everything as read, before required keys are checked.
#[derive(Deserialize, Default)]
struct RawConfig {
    endpoint: Option<String>,
    project_id: Option<String>,
    database_id: Option<String>,
    collection_id: Option<String>,
    api_key: Option<String>,
    public_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the document service API (e.g. https://cloud.appwrite.io/v1)
    pub endpoint: Url,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    /// Server API key, only needed when the collection isn't publicly writable
    pub api_key: Option<String>,
    /// Where event pages are reachable, used for sharing links
    pub public_url: Url,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn config_path() -> EventBoardResult<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
            return Ok(PathBuf::from(shellexpand::tilde(&path).into_owned()));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventBoardError::Config("Could not determine config directory".into()))?
            .join("eventboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the config file and the process environment.
    pub fn load() -> EventBoardResult<Self> {
        let path = Self::config_path()?;
        Self::load_from(Some(&path), None)
    }

    /// Load from `path` (if it exists) and `env`, or the process environment when `env` is `None`.
    pub fn load_from(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> EventBoardResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let raw: RawConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .map_err(|e| EventBoardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventBoardError::Config(e.to_string()))?;

        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> EventBoardResult<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let endpoint = non_empty(raw.endpoint);
        let project_id = non_empty(raw.project_id);
        let database_id = non_empty(raw.database_id);
        let collection_id = non_empty(raw.collection_id);

        let missing: Vec<String> = [
            ("endpoint", endpoint.is_none()),
            ("project_id", project_id.is_none()),
            ("database_id", database_id.is_none()),
            ("collection_id", collection_id.is_none()),
        ]
        .into_iter()
        .filter(|(_, is_missing)| *is_missing)
        .map(|(key, _)| format!("{}_{}", ENV_PREFIX, key.to_uppercase()))
        .collect();

        let (Some(endpoint), Some(project_id), Some(database_id), Some(collection_id)) =
            (endpoint, project_id, database_id, collection_id)
        else {
            return Err(EventBoardError::Config(format!(
                "Missing required settings: {}",
                missing.join(", ")
            )));
        };

        let endpoint = parse_url("endpoint", &endpoint)?;
        let public_url = parse_url(
            "public_url",
            non_empty(raw.public_url).as_deref().unwrap_or(DEFAULT_PUBLIC_URL),
        )?;

        Ok(AppConfig {
            endpoint,
            project_id,
            database_id,
            collection_id,
            api_key: non_empty(raw.api_key),
            public_url,
            request_timeout: Duration::from_secs(
                raw.request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        })
    }
}

fn parse_url(key: &str, value: &str) -> EventBoardResult<Url> {
    Url::parse(value).map_err(|e| EventBoardError::Config(format!("Invalid {key} '{value}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_load_from_env() {
        let config = AppConfig::load_from(
            None,
            env(&[
                ("EVENTBOARD_ENDPOINT", "https://cloud.appwrite.io/v1"),
                ("EVENTBOARD_PROJECT_ID", "proj"),
                ("EVENTBOARD_DATABASE_ID", "db"),
                ("EVENTBOARD_COLLECTION_ID", "events"),
            ]),
        )
        .unwrap();

        assert_eq!(config.endpoint.as_str(), "https://cloud.appwrite.io/v1");
        assert_eq!(config.project_id, "proj");
        assert_eq!(config.api_key, None);
        assert_eq!(config.public_url.as_str(), "http://localhost:4096/");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_values_are_fatal_and_named() {
        let err = AppConfig::load_from(
            None,
            env(&[
                ("EVENTBOARD_ENDPOINT", "https://cloud.appwrite.io/v1"),
                ("EVENTBOARD_DATABASE_ID", ""),
            ]),
        )
        .unwrap_err();

        assert!(matches!(err, EventBoardError::Config(_)));
        let message = err.to_string();
        assert!(message.contains("EVENTBOARD_PROJECT_ID"));
        assert!(message.contains("EVENTBOARD_DATABASE_ID"));
        assert!(message.contains("EVENTBOARD_COLLECTION_ID"));
        assert!(!message.contains("EVENTBOARD_ENDPOINT"));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = AppConfig::load_from(
            None,
            env(&[
                ("EVENTBOARD_ENDPOINT", "not a url"),
                ("EVENTBOARD_PROJECT_ID", "proj"),
                ("EVENTBOARD_DATABASE_ID", "db"),
                ("EVENTBOARD_COLLECTION_ID", "events"),
            ]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid endpoint"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = PathBuf::from("/nonexistent/eventboard/config.toml");
        let err = AppConfig::load_from(Some(&path), env(&[])).unwrap_err();
        assert!(err.to_string().contains("Missing required settings"));
    }
}
