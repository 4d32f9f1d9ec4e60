use std::collections::HashSet;

use thiserror::Error;

use picker_core::DomainError;
use picker_inventory::{CatalogError, InventoryCatalog, ItemKind, StockItem};
use picker_parties::Customer;

use crate::config::{PlannerConfig, StockPolicy};
use crate::format::format_item;
use crate::pallet::{LoadList, Pallet};
use crate::random::RandomSource;

#[derive(Debug, Error)]
pub enum PlanError {
    /// The catalog read failed; the planner holds no partial state.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid planner configuration: {0}")]
    Config(#[from] DomainError),
}

/// Greedy first-fit load planner.
///
/// Model:
/// - Sample up to `max_customers` customers without replacement.
/// - For each, shuffle the door+frame pool and walk it once, rolling a client
///   count per candidate and placing it if the pallet stays within capacity.
/// - Skipped candidates are never reconsidered for that pallet.
///
/// This does not maximise pallet weight; it is a single pass.
#[derive(Debug, Clone)]
pub struct LoadListPlanner<S> {
    config: PlannerConfig,
    source: S,
}

type Candidate<'a> = (ItemKind, &'a StockItem);

impl<S: RandomSource> LoadListPlanner<S> {
    pub fn new(config: PlannerConfig, source: S) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Read one catalog snapshot and plan against it.
    pub fn plan<C>(&mut self, catalog: &C) -> Result<LoadList, PlanError>
    where
        C: InventoryCatalog + ?Sized,
    {
        let doors = catalog.list_doors()?;
        let frames = catalog.list_frames()?;
        let customers = catalog.list_customers()?;
        Ok(self.generate_load_list(&doors, &frames, &customers))
    }

    pub fn generate_load_list(
        &mut self,
        doors: &[StockItem],
        frames: &[StockItem],
        customers: &[Customer],
    ) -> LoadList {
        let selected = self.select_customers(customers);

        let mut pool: Vec<Candidate<'_>> = doors
            .iter()
            .map(|d| (ItemKind::Door, d))
            .chain(frames.iter().map(|f| (ItemKind::Frame, f)))
            .collect();

        let mut pallets = Vec::with_capacity(selected.len());
        for customer in selected {
            let (pallet, placed) = self.pack_pallet(customer.clone(), &pool);
            tracing::debug!(
                customer_id = %pallet.customer.id,
                items = pallet.items.len(),
                weight = pallet.weight,
                candidates = pool.len(),
                "pallet packed"
            );
            if self.config.stock_policy == StockPolicy::Consumed {
                remove_placed(&mut pool, &placed);
            }
            pallets.push(pallet);
        }

        let load_list = LoadList { pallets };
        let summary = load_list.summary();
        tracing::info!(
            customers = customers.len(),
            doors = doors.len(),
            frames = frames.len(),
            pallets = summary.pallets,
            items = summary.items,
            empty_pallets = summary.empty_pallets,
            total_weight = summary.total_weight,
            "load list generated"
        );
        load_list
    }

    fn select_customers<'a>(&mut self, customers: &'a [Customer]) -> Vec<&'a Customer> {
        let amount = self.config.max_customers.min(customers.len());
        let mut seen = HashSet::with_capacity(amount);
        self.source
            .sample_indices(customers.len(), amount)
            .into_iter()
            .filter(|i| seen.insert(*i))
            .filter_map(|i| customers.get(i))
            .take(amount)
            .collect()
    }

    /// Pack one pallet; returns it with the pool indices that were placed.
    fn pack_pallet(&mut self, customer: Customer, pool: &[Candidate<'_>]) -> (Pallet, Vec<usize>) {
        let capacity = self.config.max_pallet_weight;
        let mut pallet = Pallet::new(customer);
        let mut placed = Vec::new();
        let mut visited = HashSet::with_capacity(pool.len());

        for index in self.source.permutation(pool.len()) {
            if !visited.insert(index) {
                continue;
            }
            let Some(&(kind, item)) = pool.get(index) else {
                continue;
            };
            let client_count = self.source.client_count(self.config.client_count_range());
            let formatted = format_item(item, kind, client_count);
            if pallet.try_place(formatted, capacity) {
                placed.push(index);
            } else {
                tracing::trace!(item_id = %item.id, kind = %kind, client_count, "candidate skipped");
            }
        }

        (pallet, placed)
    }
}

fn remove_placed(pool: &mut Vec<Candidate<'_>>, placed: &[usize]) {
    if placed.is_empty() {
        return;
    }
    let placed: HashSet<usize> = placed.iter().copied().collect();
    let mut index = 0;
    pool.retain(|_| {
        let keep = !placed.contains(&index);
        index += 1;
        keep
    });
}
