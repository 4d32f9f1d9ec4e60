use core::str::FromStr;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use picker_core::{DomainError, DomainResult};

/// Whether stock placed on one pallet stays available to later customers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockPolicy {
    /// Every customer's pass sees the full catalog, as if freshly restocked.
    /// The same item may land on several pallets in one run.
    #[default]
    Replenished,
    /// An item placed on a pallet is removed from the pool of every customer
    /// packed after it.
    Consumed,
}

impl FromStr for StockPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replenished" => Ok(StockPolicy::Replenished),
            "consumed" => Ok(StockPolicy::Consumed),
            other => Err(DomainError::validation(format!(
                "unknown stock policy '{other}' (expected 'replenished' or 'consumed')"
            ))),
        }
    }
}

/// Tunables of one planner instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Upper bound on pallets (one per customer) in a load list.
    pub max_customers: usize,
    /// Capacity of one pallet in kilograms.
    pub max_pallet_weight: f64,
    /// Smallest simulated client count rolled per item.
    pub client_count_min: u32,
    /// Largest simulated client count rolled per item.
    pub client_count_max: u32,
    pub stock_policy: StockPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_customers: 5,
            max_pallet_weight: 1000.0,
            client_count_min: 1,
            client_count_max: 5,
            stock_policy: StockPolicy::Replenished,
        }
    }
}

impl PlannerConfig {
    pub fn with_max_customers(mut self, max_customers: usize) -> Self {
        self.max_customers = max_customers;
        self
    }

    pub fn with_max_pallet_weight(mut self, max_pallet_weight: f64) -> Self {
        self.max_pallet_weight = max_pallet_weight;
        self
    }

    pub fn with_client_count(mut self, min: u32, max: u32) -> Self {
        self.client_count_min = min;
        self.client_count_max = max;
        self
    }

    pub fn with_stock_policy(mut self, stock_policy: StockPolicy) -> Self {
        self.stock_policy = stock_policy;
        self
    }

    pub fn client_count_range(&self) -> RangeInclusive<u32> {
        self.client_count_min..=self.client_count_max
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.max_pallet_weight.is_finite() && self.max_pallet_weight >= 0.0) {
            return Err(DomainError::validation(
                "max_pallet_weight must be a finite, non-negative number",
            ));
        }
        if self.client_count_min == 0 {
            return Err(DomainError::validation("client_count_min must be at least 1"));
        }
        if self.client_count_min > self.client_count_max {
            return Err(DomainError::validation(format!(
                "client count range {}..={} is empty",
                self.client_count_min, self.client_count_max
            )));
        }
        Ok(())
    }
}
