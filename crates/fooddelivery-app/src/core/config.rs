use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "fooddelivery_data".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NetworkConfig {
    pub probe_addr: String,
    pub probe_interval_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            probe_addr: "1.1.1.1:53".to_string(),
            probe_interval_secs: 5,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let config_path = "fooddelivery_config.toml";
        if Path::new(config_path).exists() {
            match fs::read_to_string(config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!("Failed to parse config: {e}"),
                },
                Err(e) => warn!("Failed to read config file: {e}"),
            }
        }

        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("[storage]\ndata_dir = \"/tmp/x\"\n").unwrap();
        assert_eq!(config.storage.data_dir, "/tmp/x");
        assert_eq!(config.network.probe_addr, "1.1.1.1:53");
        assert_eq!(config.network.probe_interval_secs, 5);
    }
}
