use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use picker_loadlist::{LoadList, LoadListSummary};

use crate::error::AppError;

/// A generated load list with run metadata.
///
/// The metadata lives here rather than on [`LoadList`] so that two plans
/// produced from the same seed stay byte-identical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadListReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Seed that reproduces this plan, when one was fixed.
    pub seed: Option<u64>,
    pub summary: LoadListSummary,
    pub load_list: LoadList,
}

impl LoadListReport {
    pub fn new(load_list: LoadList, seed: Option<u64>) -> Self {
        Self {
            run_id: Uuid::now_v7(),
            generated_at: Utc::now(),
            seed,
            summary: load_list.summary(),
            load_list,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
