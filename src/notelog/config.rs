use crate::error::{NotelogError, Result};
use crate::timestamp::{validate_format, DEFAULT_TIMESTAMP_FORMAT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PLACEHOLDER: &str = "Enter an activity to log...";
const DEFAULT_COUNT_LABEL: &str = "Logged activities";

/// Keys accepted by [`NotelogConfig::get`] and [`NotelogConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["placeholder", "count-label", "timestamp-format"];

/// Configuration for notelog, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotelogConfig {
    /// Hint shown above the input prompt
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Label rendered in front of the note count
    #[serde(default = "default_count_label")]
    pub count_label: String,

    /// strftime format used to stamp new notes
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_count_label() -> String {
    DEFAULT_COUNT_LABEL.to_string()
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for NotelogConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            count_label: default_count_label(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl NotelogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotelogError::Io)?;
        let config: NotelogConfig =
            serde_json::from_str(&content).map_err(NotelogError::Serialization)?;
        if let Err(e) = validate_format(&config.timestamp_format) {
            return Err(NotelogError::Config(format!(
                "{} ({})",
                e,
                config_path.display()
            )));
        }
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotelogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotelogError::Serialization)?;
        fs::write(config_path, content).map_err(NotelogError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "placeholder" => Some(self.placeholder.clone()),
            "count-label" => Some(self.count_label.clone()),
            "timestamp-format" => Some(self.timestamp_format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "placeholder" => self.placeholder = value.to_string(),
            "count-label" => self.count_label = value.to_string(),
            "timestamp-format" => {
                validate_format(value)?;
                self.timestamp_format = value.to_string();
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// All `(key, value)` pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotelogConfig::default();
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.count_label, "Logged activities");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = NotelogConfig::load(temp.path()).unwrap();
        assert_eq!(config, NotelogConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let mut config = NotelogConfig::default();
        config.set("count-label", "Activities").unwrap();
        config.save(&dir).unwrap();

        let loaded = NotelogConfig::load(&dir).unwrap();
        assert_eq!(loaded.count_label, "Activities");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "placeholder": "What did you do?" }"#,
        )
        .unwrap();

        let config = NotelogConfig::load(temp.path()).unwrap();
        assert_eq!(config.placeholder, "What did you do?");
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_load_rejects_invalid_timestamp_format() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{ "timestamp_format": "%Q" }"#,
        )
        .unwrap();

        assert!(matches!(
            NotelogConfig::load(temp.path()),
            Err(NotelogError::Config(_))
        ));
    }

    #[test]
    fn test_set_rejects_invalid_timestamp_format() {
        let mut config = NotelogConfig::default();
        assert!(config.set("timestamp-format", "%Q").is_err());
        assert_eq!(config.timestamp_format, DEFAULT_TIMESTAMP_FORMAT);
    }

    #[test]
    fn test_unknown_key() {
        let mut config = NotelogConfig::default();
        assert!(config.get("file-ext").is_none());
        assert!(config.set("file-ext", ".md").is_err());
    }

    #[test]
    fn test_entries_follow_key_order() {
        let keys: Vec<_> = NotelogConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }
}
