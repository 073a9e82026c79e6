//! # Configuration Manager Module
//!
//! ## Purpose
//! Keeps the path of the reference dataset and the default evaluation conditions
//! (pH, ion concentration, temperature) in one place, persisted as `frost_config.json`.
//!
//! ## Architecture
//! - **FrostConfig**: serializable configuration structure
//! - **ConfigManager**: loads, validates, updates and saves the configuration
//! - **Global Access**: `OnceLock<Mutex<ConfigManager>>` with closure-based accessors
//!
//! ## Configuration Format
//! ```json
//! {
//!   "dataset": "data/frost_data.json",
//!   "default_pH": 0.0,
//!   "default_conc_ion": 1.0,
//!   "default_temperature": 298.15
//! }
//! ```
//!
//! ## Usage
//! ```rust
//! use RedoxFrost::config_manager::with_config_manager;
//!
//! let dataset = with_config_manager(|manager| manager.dataset_path().to_string());
//! assert!(dataset.ends_with(".json"));
//! ```
use crate::Electrochemistry::constants::{
    STANDARD_ACID_PH, STANDARD_CONCENTRATION, STANDARD_TEMPERATURE,
};
use crate::Electrochemistry::nernst_api::Conditions;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock};

pub const CONFIG_FILE: &str = "frost_config.json";
pub const DEFAULT_DATASET: &str = "data/frost_data.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrostConfig {
    /// JSON dataset with the reference table
    pub dataset: String,
    pub default_pH: f64,
    /// mol/L
    pub default_conc_ion: f64,
    /// K
    pub default_temperature: f64,
}

impl Default for FrostConfig {
    fn default() -> Self {
        Self {
            dataset: DEFAULT_DATASET.to_string(),
            default_pH: STANDARD_ACID_PH,
            default_conc_ion: STANDARD_CONCENTRATION,
            default_temperature: STANDARD_TEMPERATURE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: FrostConfig,
    config_file: String,
}

impl ConfigManager {
    /// loads `frost_config.json` from the working directory, defaults otherwise
    pub fn new() -> Self {
        Self::with_config_file(CONFIG_FILE)
    }

    pub fn with_config_file(config_file: &str) -> Self {
        let config = match Self::load_config(config_file) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "cannot read config '{}': {}, using defaults",
                    config_file, e
                );
                FrostConfig::default()
            }
        };
        Self {
            config,
            config_file: config_file.to_string(),
        }
    }

    fn load_config(config_file: &str) -> Result<FrostConfig, Box<dyn std::error::Error>> {
        if Path::new(config_file).exists() {
            let content = fs::read_to_string(config_file)?;
            let config: FrostConfig = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(FrostConfig::default())
        }
    }

    pub fn save_config(&self) -> Result<(), Box<dyn std::error::Error>> {
        #[cfg(test)]
        {
            // tests never touch the real config file
            return Ok(());
        }

        #[cfg(not(test))]
        {
            let content = serde_json::to_string_pretty(&self.config)?;
            fs::write(&self.config_file, content)?;
            info!("configuration saved to '{}'", self.config_file);
            Ok(())
        }
    }

    pub fn get_config(&self) -> &FrostConfig {
        &self.config
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    pub fn dataset_path(&self) -> &str {
        &self.config.dataset
    }

    pub fn default_conditions(&self) -> Conditions {
        Conditions::new(
            self.config.default_pH,
            self.config.default_conc_ion,
            self.config.default_temperature,
        )
    }
    /// the file must exist
    pub fn set_dataset(&mut self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        if Path::new(path).exists() {
            self.config.dataset = path.to_string();
            self.save_config()?;
            Ok(())
        } else {
            Err(format!("File does not exist: {}", path).into())
        }
    }

    pub fn set_default_conditions(
        &mut self,
        conditions: Conditions,
    ) -> Result<(), Box<dyn std::error::Error>> {
        conditions.validate()?;
        self.config.default_pH = conditions.pH;
        self.config.default_conc_ion = conditions.conc_ion;
        self.config.default_temperature = conditions.temperature;
        self.save_config()?;
        Ok(())
    }

    pub fn reset_to_defaults(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.config = FrostConfig::default();
        self.save_config()?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_CONFIG_MANAGER: OnceLock<Mutex<ConfigManager>> = OnceLock::new();

fn get_config_manager() -> MutexGuard<'static, ConfigManager> {
    GLOBAL_CONFIG_MANAGER
        .get_or_init(|| Mutex::new(ConfigManager::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// read-only access to the global manager
pub fn with_config_manager<F, R>(f: F) -> R
where
    F: FnOnce(&ConfigManager) -> R,
{
    let manager = get_config_manager();
    f(&manager)
}

/// mutable access to the global manager
pub fn with_config_manager_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut ConfigManager) -> R,
{
    let mut manager = get_config_manager();
    f(&mut manager)
}
