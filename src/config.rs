use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Key/value persistence settings.
///
/// Every key maps to one JSON document; the shopping list lives under a
/// single fixed key and is overwritten on each generate.
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub dir: String,
    pub shopping_list_key: String,
    pub planner_key: String,
    pub recipes_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TOKTOTABLE__STORAGE__DIR, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.dir", ".toktotable")?
            .set_default("storage.shopping_list_key", "toktotable.shoppingList")?
            .set_default("storage.planner_key", "toktotable.planner")?
            .set_default("storage.recipes_key", "toktotable.recipes")?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("TOKTOTABLE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.dir.trim().is_empty() {
            return Err("Storage dir must not be empty".to_string());
        }

        let keys = [
            &self.storage.shopping_list_key,
            &self.storage.planner_key,
            &self.storage.recipes_key,
        ];

        if keys.iter().any(|key| key.trim().is_empty()) {
            return Err("Storage keys must not be empty".to_string());
        }

        if keys[0] == keys[1] || keys[0] == keys[2] || keys[1] == keys[2] {
            return Err("Storage keys must be distinct".to_string());
        }

        Ok(())
    }
}
