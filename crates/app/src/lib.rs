//! `picker-app` — wiring for the load-list run.
//!
//! Reads configuration, loads the catalog snapshot and computes one load
//! list. The `picker` binary is a thin shell around [`run`].

pub mod config;
pub mod error;
pub mod report;

pub use config::AppConfig;
pub use error::AppError;
pub use report::LoadListReport;

use picker_inventory::{CatalogSnapshot, InventoryCatalog};
use picker_loadlist::{LoadList, LoadListPlanner, RandomSource, RngSource};

/// Compute a load list from the configured catalog snapshot.
pub fn run(config: &AppConfig) -> Result<LoadListReport, AppError> {
    let catalog = CatalogSnapshot::from_path(&config.catalog_path)?.into_catalog()?;
    let load_list = plan(config, &catalog)?;
    Ok(LoadListReport::new(load_list, config.seed))
}

/// Plan against any catalog, seeding from config or OS entropy.
pub fn plan<C>(config: &AppConfig, catalog: &C) -> Result<LoadList, AppError>
where
    C: InventoryCatalog + ?Sized,
{
    match config.seed {
        Some(seed) => plan_with(config, catalog, RngSource::seeded(seed)),
        None => plan_with(config, catalog, RngSource::from_os_rng()),
    }
}

fn plan_with<C, S>(config: &AppConfig, catalog: &C, source: S) -> Result<LoadList, AppError>
where
    C: InventoryCatalog + ?Sized,
    S: RandomSource,
{
    let mut planner = LoadListPlanner::new(config.planner.clone(), source)?;
    Ok(planner.plan(catalog)?)
}
