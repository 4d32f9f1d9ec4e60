use serde::{Deserialize, Serialize};

use picker_parties::Customer;

use crate::format::FormattedItem;

/// Goods bundled for one customer in one planning pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pallet {
    pub customer: Customer,
    pub items: Vec<FormattedItem>,
    /// Running total of `items[..].total_weight` in kilograms.
    pub weight: f64,
}

impl Pallet {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            items: Vec::new(),
            weight: 0.0,
        }
    }

    /// Whether `item` still fits under `capacity`.
    pub fn fits(&self, item: &FormattedItem, capacity: f64) -> bool {
        self.weight + item.total_weight <= capacity
    }

    /// Place `item` if it fits; returns whether it was placed.
    pub fn try_place(&mut self, item: FormattedItem, capacity: f64) -> bool {
        if !self.fits(&item, capacity) {
            return false;
        }
        self.weight += item.total_weight;
        self.items.push(item);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Planning output: one pallet per selected customer, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoadList {
    pub pallets: Vec<Pallet>,
}

/// Aggregate figures of a load list for logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadListSummary {
    pub pallets: usize,
    pub items: usize,
    pub empty_pallets: usize,
    pub total_weight: f64,
}

impl LoadList {
    pub fn len(&self) -> usize {
        self.pallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pallets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pallet> {
        self.pallets.iter()
    }

    pub fn summary(&self) -> LoadListSummary {
        LoadListSummary {
            pallets: self.pallets.len(),
            items: self.pallets.iter().map(|p| p.items.len()).sum(),
            empty_pallets: self.pallets.iter().filter(|p| p.is_empty()).count(),
            total_weight: self.pallets.iter().map(|p| p.weight).sum(),
        }
    }
}

impl IntoIterator for LoadList {
    type Item = Pallet;
    type IntoIter = std::vec::IntoIter<Pallet>;

    fn into_iter(self) -> Self::IntoIter {
        self.pallets.into_iter()
    }
}
