// src/core/config.rs
use std::collections::BTreeSet;
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::models::{CharacterClass, Configuration, DEFAULT_PASSWORD_LENGTH};

// Configuration for the generator front end
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_password_classes: BTreeSet<CharacterClass>,

    // Settings store
    pub settings_file: Option<PathBuf>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: DEFAULT_PASSWORD_LENGTH,
            default_password_classes: CharacterClass::ALL.into_iter().collect(),

            // Settings store, resolved in load()
            settings_file: None,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Self::from_lookup(|key| env::var(key).ok());

        if config.settings_file.is_none() {
            match crate::utils::get_app_config_dir() {
                Ok(dir) => config.settings_file = Some(dir.join("settings.json")),
                Err(e) => config.warnings.push(format!("No settings directory: {}", e)),
            }
        }

        config
    }

    /// Emit the warnings collected by `load`. Call after the logger is set.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{}", warning);
        }
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.trim().parse::<usize>() {
                Ok(length) => config.default_password_length = length,
                Err(_) => config.warnings.push(format!(
                    "Invalid DEFAULT_PASSWORD_LENGTH '{}', using {}",
                    val, DEFAULT_PASSWORD_LENGTH
                )),
            }
        }

        if let Some(val) = lookup("DEFAULT_PASSWORD_CLASSES") {
            match parse_classes(&val) {
                Ok(classes) if !classes.is_empty() => config.default_password_classes = classes,
                Ok(_) => config
                    .warnings
                    .push("DEFAULT_PASSWORD_CLASSES is empty, enabling all classes".to_string()),
                Err(e) => config
                    .warnings
                    .push(format!("Invalid DEFAULT_PASSWORD_CLASSES: {}, enabling all classes", e)),
            }
        }

        // Settings store
        if let Some(file) = lookup("SETTINGS_FILE") {
            config.settings_file = Some(PathBuf::from(file));
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
                _ => config
                    .warnings
                    .push(format!("Invalid LOG_LEVEL '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.log_file = Some(PathBuf::from(file));
        }

        config
    }

    /// Starting configuration for a generation request.
    pub fn default_configuration(&self) -> Configuration {
        Configuration::new(
            self.default_password_length,
            self.default_password_classes.iter().copied(),
        )
    }
}

pub fn parse_classes(list: &str) -> Result<BTreeSet<CharacterClass>, String> {
    list.split(',')
        .filter(|s| !s.trim().is_empty())
        .map(str::parse)
        .collect()
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
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.default_password_classes.len(), 4);
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.settings_file.is_none());
        assert!(config.warnings.is_empty());
        assert_eq!(config.default_configuration(), Configuration::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "24"),
            ("DEFAULT_PASSWORD_CLASSES", "lower, numbers"),
            ("SETTINGS_FILE", "/tmp/passgen.json"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "/tmp/passgen.log"),
        ]));

        assert_eq!(config.default_password_length, 24);
        assert_eq!(
            config.default_configuration().classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Numeric]
        );
        assert_eq!(config.settings_file, Some(PathBuf::from("/tmp/passgen.json")));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/passgen.log")));
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DEFAULT_PASSWORD_LENGTH", "lots"),
            ("DEFAULT_PASSWORD_CLASSES", "lower,emoji"),
            ("LOG_LEVEL", "verbose"),
        ]));

        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.default_password_classes.len(), 4);
        assert_eq!(config.log_level, LevelFilter::Warn);

        assert_eq!(config.warnings.len(), 3, "{:?}", config.warnings);
        assert!(config.warnings[0].contains("DEFAULT_PASSWORD_LENGTH 'lots'"));
        assert!(config.warnings[1].contains("unknown character class 'emoji'"));
        assert!(config.warnings[2].contains("LOG_LEVEL 'verbose'"));
    }

    #[test]
    fn empty_class_list_is_reported() {
        let config = Config::from_lookup(lookup_from(&[("DEFAULT_PASSWORD_CLASSES", " , ")]));
        assert_eq!(config.default_password_classes.len(), 4);
        assert_eq!(config.warnings.len(), 1);
    }

    #[test]
    fn parse_class_list() {
        assert_eq!(parse_classes("").unwrap().len(), 0);
        assert_eq!(parse_classes("upper,upper,special").unwrap().len(), 2);
        assert!(parse_classes("upper,nope").is_err());
    }
}
