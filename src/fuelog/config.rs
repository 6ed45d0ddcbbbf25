use crate::error::{FuelogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PERIOD_DAYS: u64 = 30;

/// Configuration for fuelog, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FuelogConfig {
    /// Trailing window used by `report` when no filter is given
    #[serde(default = "default_period_days")]
    pub default_period_days: u64,

    /// Label printed after money amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Unit the odometer counts in
    #[serde(default = "default_distance_unit")]
    pub distance_unit: String,
}

fn default_period_days() -> u64 {
    DEFAULT_PERIOD_DAYS
}

fn default_currency() -> String {
    "Toman".to_string()
}

fn default_distance_unit() -> String {
    "km".to_string()
}

impl Default for FuelogConfig {
    fn default() -> Self {
        Self {
            default_period_days: DEFAULT_PERIOD_DAYS,
            currency: default_currency(),
            distance_unit: default_distance_unit(),
        }
    }
}

impl FuelogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FuelogError::Io)?;
        let config: FuelogConfig =
            serde_json::from_str(&content).map_err(FuelogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FuelogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FuelogError::Serialization)?;
        fs::write(config_path, content).map_err(FuelogError::Io)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["default-period-days", "currency", "distance-unit"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-period-days" => Some(self.default_period_days.to_string()),
            "currency" => Some(self.currency.clone()),
            "distance-unit" => Some(self.distance_unit.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-period-days" => {
                let days: u64 = value.parse().map_err(|_| {
                    FuelogError::Config(format!("Not a number of days: {}", value))
                })?;
                if days == 0 {
                    return Err(FuelogError::Config(
                        "default-period-days must be at least 1".to_string(),
                    ));
                }
                self.default_period_days = days;
            }
            "currency" => self.currency = non_empty(key, value)?,
            "distance-unit" => self.distance_unit = non_empty(key, value)?,
            _ => return Err(FuelogError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::keys()
            .iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FuelogError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FuelogConfig::default();
        assert_eq!(config.default_period_days, 30);
        assert_eq!(config.currency, "Toman");
        assert_eq!(config.distance_unit, "km");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = FuelogConfig::load(temp.path()).unwrap();
        assert_eq!(config, FuelogConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"currency": "EUR"}"#).unwrap();
        let config = FuelogConfig::load(temp.path()).unwrap();
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.default_period_days, 30);
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("fuelog");

        let mut config = FuelogConfig::default();
        config.set("default-period-days", "90").unwrap();
        config.set("distance-unit", "mi").unwrap();
        config.save(&dir).unwrap();

        let loaded = FuelogConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_period_days, 90);
        assert_eq!(loaded.distance_unit, "mi");
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = FuelogConfig::default();
        assert!(config.set("default-period-days", "soon").is_err());
        assert!(config.set("default-period-days", "0").is_err());
        assert!(config.set("currency", "   ").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, FuelogConfig::default());
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let listed = FuelogConfig::default().list_all();
        assert_eq!(listed.len(), FuelogConfig::keys().len());
        assert_eq!(listed[0], ("default-period-days", "30".to_string()));
    }
}
