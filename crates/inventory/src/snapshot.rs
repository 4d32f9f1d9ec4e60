//! JSON catalog snapshots.
//!
//! A snapshot is the whole catalog in one document: reference tables, stock
//! rows (with foreign keys) and customers. Loading validates it the same way
//! inserting rows one by one would.

use std::path::Path;

use serde::{Deserialize, Serialize};

use picker_core::DomainResult;
use picker_parties::Customer;

use crate::catalog::InMemoryCatalog;
use crate::error::{CatalogError, CatalogResult};
use crate::item::{DoorRecord, FrameRecord};
use crate::reference::{
    Brand, FrameType, Height, Location, LockType, Orientation, Reference, ReferenceData,
    ReferenceTable, Surface, WallThickness, Width,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub orientations: Vec<Orientation>,
    #[serde(default)]
    pub heights: Vec<Height>,
    #[serde(default)]
    pub widths: Vec<Width>,
    #[serde(default)]
    pub surfaces: Vec<Surface>,
    #[serde(default)]
    pub wall_thicknesses: Vec<WallThickness>,
    #[serde(default)]
    pub lock_types: Vec<LockType>,
    #[serde(default)]
    pub frame_types: Vec<FrameType>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub doors: Vec<DoorRecord>,
    #[serde(default)]
    pub frames: Vec<FrameRecord>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl CatalogSnapshot {
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::SnapshotIo {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            doors = snapshot.doors.len(),
            frames = snapshot.frames.len(),
            customers = snapshot.customers.len(),
            "catalog snapshot read"
        );
        Ok(snapshot)
    }

    /// Build an in-memory catalog, rejecting duplicates and dangling references.
    pub fn into_catalog(self) -> CatalogResult<InMemoryCatalog> {
        let mut refs = ReferenceData::new();
        fill(&mut refs.brands, self.brands)?;
        fill(&mut refs.orientations, self.orientations)?;
        fill(&mut refs.heights, self.heights)?;
        fill(&mut refs.widths, self.widths)?;
        fill(&mut refs.surfaces, self.surfaces)?;
        fill(&mut refs.wall_thicknesses, self.wall_thicknesses)?;
        fill(&mut refs.lock_types, self.lock_types)?;
        fill(&mut refs.frame_types, self.frame_types)?;
        fill(&mut refs.locations, self.locations)?;

        let catalog = InMemoryCatalog::with_references(refs);
        for door in self.doors {
            catalog.insert_door(door)?;
        }
        for frame in self.frames {
            catalog.insert_frame(frame)?;
        }
        for customer in self.customers {
            catalog.insert_customer(customer)?;
        }

        tracing::info!(
            doors = catalog.door_count(),
            frames = catalog.frame_count(),
            "inventory catalog loaded"
        );
        Ok(catalog)
    }
}

fn fill<R: Reference>(table: &mut ReferenceTable<R>, rows: Vec<R>) -> DomainResult<()> {
    rows.into_iter().try_for_each(|row| table.insert(row))
}
