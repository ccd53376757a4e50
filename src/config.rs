//! Configuration handling for the TUI

use crate::state::FormOptions;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistrationConfig {
    /// Courses offered in the course drop-down
    pub courses: Option<Vec<String>>,
    /// Reject non-digit keystrokes in the phone field
    pub phone_digits_only: Option<bool>,
    /// Name credited in the footer
    pub footer_owner: Option<String>,
}

impl RegistrationConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "registration", "registration-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: RegistrationConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Form options with defaults for anything not configured
    pub fn form_options(&self) -> FormOptions {
        let defaults = FormOptions::default();
        FormOptions {
            courses: self
                .courses
                .clone()
                .filter(|courses| !courses.is_empty())
                .unwrap_or(defaults.courses),
            phone_digits_only: self
                .phone_digits_only
                .unwrap_or(defaults.phone_digits_only),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("registration-tui-test-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_config() {
        let config = RegistrationConfig::default();
        assert!(config.courses.is_none());
        assert!(config.phone_digits_only.is_none());
        assert!(config.footer_owner.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = RegistrationConfig {
            courses: Some(vec!["Law".to_string(), "Physics".to_string()]),
            phone_digits_only: Some(false),
            footer_owner: Some("Tarun".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RegistrationConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.courses,
            Some(vec!["Law".to_string(), "Physics".to_string()])
        );
        assert_eq!(parsed.phone_digits_only, Some(false));
        assert_eq!(parsed.footer_owner, Some("Tarun".to_string()));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: RegistrationConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.courses.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"phone_digits_only": false, "unknown_field": "value"}"#;
        let parsed: RegistrationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.phone_digits_only, Some(false));
    }

    #[test]
    fn test_form_options_defaults() {
        let options = RegistrationConfig::default().form_options();
        assert_eq!(options.courses, FormOptions::default().courses);
        assert!(options.phone_digits_only);
    }

    #[test]
    fn test_form_options_ignores_empty_course_list() {
        let config = RegistrationConfig {
            courses: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(config.form_options().courses, FormOptions::default().courses);
    }

    #[test]
    fn test_form_options_overrides() {
        let config = RegistrationConfig {
            courses: Some(vec!["Law".to_string()]),
            phone_digits_only: Some(false),
            ..Default::default()
        };
        let options = config.form_options();
        assert_eq!(options.courses, vec!["Law".to_string()]);
        assert!(!options.phone_digits_only);
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let path = temp_config_path("missing");
        let config = RegistrationConfig::load_from(&path).unwrap();
        assert!(config.courses.is_none());
    }

    #[test]
    fn test_load_from_written_file() {
        let path = temp_config_path("roundtrip");
        let config = RegistrationConfig {
            footer_owner: Some("Registrar".to_string()),
            ..Default::default()
        };
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = RegistrationConfig::load_from(&path).unwrap();
        assert_eq!(loaded.footer_owner, Some("Registrar".to_string()));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_invalid_json_errors() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        assert!(RegistrationConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_config_path_points_at_config_json() {
        if let Some(path) = RegistrationConfig::config_path() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.json"));
            assert!(path.ends_with("config.json"));
            assert!(path
                .parent()
                .is_some_and(|dir| dir.to_string_lossy().contains("registration-tui")));
        }
    }
}
