use thiserror::Error;

use picker_inventory::CatalogError;
use picker_loadlist::PlanError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid value for {name} ('{value}'): {reason}")]
    Config {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to encode load list: {0}")]
    Json(#[from] serde_json::Error),
}
