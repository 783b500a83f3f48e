use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{Result, VehicleError};
use crate::utils::persistence::{load_json_from_file, save_json_to_file};

const CONFIG_DIR_NAME: &str = "vehicle_core";
const CONFIG_FILE_NAME: &str = "config.json";
const MAX_PRICE_PRECISION: u32 = 6;
const MAX_CHART_WINDOW_DAYS: i64 = 36_525;

/// Tunables for the analytics engine. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Reference distance allowance surfaced to callers, never computed.
    pub mileage_limit: u64,
    /// Calendar months covered by the recent consumption figures.
    pub recent_months: u32,
    /// Days covered by the rolling fuel price chart.
    pub chart_window_days: i64,
    /// Decimal places kept on chart unit prices.
    pub price_precision: u32,
    pub currency: String,
    pub locale: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mileage_limit: 15_000,
            recent_months: 6,
            chart_window_days: 365,
            price_precision: 3,
            currency: "EUR".into(),
            locale: "en-US".into(),
        }
    }
}

impl EngineConfig {
    pub fn with_mileage_limit(mut self, mileage_limit: u64) -> Self {
        self.mileage_limit = mileage_limit;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_CHART_WINDOW_DAYS).contains(&self.chart_window_days) {
            return Err(VehicleError::Config(format!(
                "chart_window_days must be between 0 and {} (got {})",
                MAX_CHART_WINDOW_DAYS, self.chart_window_days
            )));
        }
        if self.price_precision > MAX_PRICE_PRECISION {
            return Err(VehicleError::Config(format!(
                "price_precision must be at most {} (got {})",
                MAX_PRICE_PRECISION, self.price_precision
            )));
        }
        Ok(())
    }
}

/// Loads and stores [`EngineConfig`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses `<config dir>/vehicle_core/config.json`, falling back to the working directory.
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored configuration, or defaults when no file exists yet.
    pub fn load(&self) -> Result<EngineConfig> {
        if !self.path.exists() {
            tracing::debug!("no config at {}, using defaults", self.path.display());
            return Ok(EngineConfig::default());
        }
        let config: EngineConfig = load_json_from_file(&self.path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &EngineConfig) -> Result<()> {
        config.validate()?;
        save_json_to_file(config, &self.path)
    }
}
