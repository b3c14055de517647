use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_STOCK_NAME: &str = "GameStop";
pub const DEFAULT_DATA_FILE: &str = "stock_data.txt";
pub const DEFAULT_LOG_FILE: &str = "log.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub stock_name: String,
    pub data_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stock_name: DEFAULT_STOCK_NAME.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        if cfg!(test) || env::var("PRICELOG_TEST_MODE").is_ok() {
            PathBuf::from("/tmp/pricelog_test_config.json")
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pricelog")
                .join("config.json")
        }
    }
}
