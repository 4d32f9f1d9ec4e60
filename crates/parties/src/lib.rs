//! Parties domain module (delivery customers).
//!
//! Customers are plain records owned by the inventory catalog. Planning treats
//! them as opaque values; only their identity groups a pallet.

pub mod customer;

pub use customer::{ContactInfo, Customer, CustomerId};
