use crate::error::{BylinesError, Result};
use crate::report::font::FontSource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for bylines, stored next to the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BylinesConfig {
    /// TrueType font used for report text; the built-in bitmap face is used
    /// when unset or unloadable.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

impl BylinesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BylinesError::Io)?;
        let config: BylinesConfig =
            serde_json::from_str(&content).map_err(BylinesError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BylinesError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BylinesError::Serialization)?;
        fs::write(config_path, content).map_err(BylinesError::Io)?;
        Ok(())
    }

    pub fn font_source(&self) -> FontSource {
        match &self.font_path {
            Some(path) => FontSource::TtfPath(path.clone()),
            None => FontSource::BuiltIn,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "font-path" => Some(
                self.font_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "font-path" => {
                self.font_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_builtin_font() {
        let config = BylinesConfig::default();
        assert_eq!(config.font_source(), FontSource::BuiltIn);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BylinesConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, BylinesConfig::default());
    }

    #[test]
    fn save_and_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = BylinesConfig::default();
        config.set("font-path", "/tmp/report.ttf").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = BylinesConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.font_source(),
            FontSource::TtfPath(PathBuf::from("/tmp/report.ttf"))
        );
    }

    #[test]
    fn empty_value_clears_the_font_path() {
        let mut config = BylinesConfig::default();
        config.set("font-path", "/tmp/report.ttf").unwrap();
        config.set("font-path", "").unwrap();
        assert_eq!(config.font_path, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut config = BylinesConfig::default();
        assert!(config.set("nope", "x").is_err());
        assert!(config.get("nope").is_none());
    }
}
