// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

pub const STORE_ENV: &str = "PASSKEEPER_STORE";

// Configuration for the password keeper
#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub store_path: PathBuf,
    pub legacy_file: PathBuf,

    // Prompts
    pub default_email: Option<String>,

    // Logging
    pub log_level: LevelFilter,

    // Settings that were present but unusable, as (key, value); reported
    // once the logger is up
    pub ignored: Vec<(&'static str, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("data.json"),
            legacy_file: PathBuf::from("data.txt"),
            default_email: None,
            log_level: LevelFilter::Warn,
            ignored: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Storage
        if let Some(path) = lookup(STORE_ENV).filter(|s| !s.trim().is_empty()) {
            config.store_path = PathBuf::from(path);
        }

        if let Some(path) = lookup("LEGACY_FILE").filter(|s| !s.trim().is_empty()) {
            config.legacy_file = PathBuf::from(path);
        }

        // Prompts
        if let Some(email) = lookup("DEFAULT_EMAIL") {
            let email = email.trim().to_string();
            if !email.is_empty() {
                config.default_email = Some(email);
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.ignored.push(("LOG_LEVEL", level)),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.store_path, PathBuf::from("data.json"));
        assert_eq!(config.legacy_file, PathBuf::from("data.txt"));
        assert_eq!(config.default_email, None);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            (STORE_ENV, "/tmp/logins.json"),
            ("LEGACY_FILE", "old.txt"),
            ("DEFAULT_EMAIL", "  me@example.com "),
            ("LOG_LEVEL", "DEBUG"),
        ]);
        assert_eq!(config.store_path, PathBuf::from("/tmp/logins.json"));
        assert_eq!(config.legacy_file, PathBuf::from("old.txt"));
        assert_eq!(config.default_email.as_deref(), Some("me@example.com"));
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = config_from(&[(STORE_ENV, " "), ("DEFAULT_EMAIL", ""), ("LOG_LEVEL", "loud")]);
        assert_eq!(config.store_path, PathBuf::from("data.json"));
        assert_eq!(config.default_email, None);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert_eq!(config.ignored, vec![("LOG_LEVEL", "loud".to_string())]);
    }

    #[test]
    fn test_valid_values_are_not_reported() {
        let config = config_from(&[("LOG_LEVEL", "info")]);
        assert!(config.ignored.is_empty());
    }
}
