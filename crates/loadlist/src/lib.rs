//! Load-list (Ladeliste) planning.
//!
//! Turns one inventory catalog snapshot into pallets for a delivery tour:
//! a random subset of customers, each with a weight-bounded pallet packed
//! greedily from a shuffled pool of doors and frames.
//!
//! Planning is pure computation over in-memory data. All randomness comes
//! from an injected [`RandomSource`], so a fixed source reproduces a plan.

pub mod config;
pub mod format;
pub mod pallet;
pub mod planner;
pub mod random;

pub use config::{PlannerConfig, StockPolicy};
pub use format::{FormattedItem, format_item, total_weight};
pub use pallet::{LoadList, LoadListSummary, Pallet};
pub use planner::{LoadListPlanner, PlanError};
pub use random::{RandomSource, RngSource, ScriptedSource};
