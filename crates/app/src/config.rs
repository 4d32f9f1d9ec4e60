//! Process configuration read from `PICKER_*` environment variables.

use core::str::FromStr;
use std::path::PathBuf;

use picker_loadlist::{PlanError, PlannerConfig, StockPolicy};
use picker_observability::LogFormat;

use crate::error::AppError;

pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON catalog snapshot to plan against.
    pub catalog_path: PathBuf,
    pub planner: PlannerConfig,
    /// Fixed seed for a reproducible plan; OS entropy when absent.
    pub seed: Option<u64>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            planner: PlannerConfig::default(),
            seed: None,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        let defaults = PlannerConfig::default();

        if let Some(path) = lookup("PICKER_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }

        config.planner = PlannerConfig::default()
            .with_max_customers(
                parse(&lookup, "PICKER_MAX_CUSTOMERS")?.unwrap_or(defaults.max_customers),
            )
            .with_max_pallet_weight(
                parse(&lookup, "PICKER_MAX_PALLET_WEIGHT")?.unwrap_or(defaults.max_pallet_weight),
            )
            .with_client_count(
                parse(&lookup, "PICKER_CLIENT_COUNT_MIN")?.unwrap_or(defaults.client_count_min),
                parse(&lookup, "PICKER_CLIENT_COUNT_MAX")?.unwrap_or(defaults.client_count_max),
            )
            .with_stock_policy(
                parse::<StockPolicy>(&lookup, "PICKER_STOCK_POLICY")?.unwrap_or_default(),
            );
        config.planner.validate().map_err(PlanError::from)?;

        config.seed = parse(&lookup, "PICKER_SEED")?;
        config.log_format = parse(&lookup, "PICKER_LOG_FORMAT")?.unwrap_or_default();

        Ok(config)
    }

    pub fn uses_default_catalog(&self) -> bool {
        self.catalog_path == PathBuf::from(DEFAULT_CATALOG_PATH)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| AppError::Config {
            name,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
