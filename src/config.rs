use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::router::Route;

pub const CONFIG_ENV: &str = "FITTRACK_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "fittrack.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    NordDark,
    NordLight,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub theme: Theme,
    pub font_path: Option<String>,
    pub log_level: String,
    pub start_route: Route,
    /// Signs in automatically when set.
    pub user: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_size: [1280.0, 800.0],
            theme: Theme::default(),
            font_path: None,
            log_level: "info".to_string(),
            start_route: Route::Login,
            user: None,
        }
    }
}

pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn parse(json: &str) -> Result<AppConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// `Ok(None)` when there is no file at `path`.
pub fn load_from(path: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse(&content).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(parse("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = parse(
            r#"{"theme": "nord_light", "start_route": "dashboard", "user": "sam", "window_size": [800, 600]}"#,
        )
        .unwrap();
        assert_eq!(config.theme, Theme::NordLight);
        assert_eq!(config.start_route, Route::Dashboard);
        assert_eq!(config.user.as_deref(), Some("sam"));
        assert_eq!(config.window_size, [800.0, 600.0]);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let err = parse(r#"{"theme": "solarized"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("fittrack-missing-config-test.json");
        let _ = fs::remove_file(&path);
        assert!(load_from(&path).unwrap().is_none());
    }

    #[test]
    fn reads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("fittrack-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"log_level": "debug"}"#).unwrap();
        let config = load_from(&path).unwrap().unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.log_level, "debug");
    }
}
