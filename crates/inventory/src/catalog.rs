use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use picker_core::{DomainError, DomainResult};
use picker_parties::{Customer, CustomerId};

use crate::error::{CatalogError, CatalogResult};
use crate::item::{DoorId, DoorRecord, FrameId, FrameRecord, StockItem};
use crate::reference::ReferenceData;

/// Read side of the inventory catalog consumed by load planning.
///
/// Every returned stock item is fully resolved: implementations do any join
/// against reference data before handing records out.
pub trait InventoryCatalog: Send + Sync {
    fn list_doors(&self) -> CatalogResult<Vec<StockItem>>;
    fn list_frames(&self) -> CatalogResult<Vec<StockItem>>;
    fn list_customers(&self) -> CatalogResult<Vec<Customer>>;
}

impl<S> InventoryCatalog for Arc<S>
where
    S: InventoryCatalog + ?Sized,
{
    fn list_doors(&self) -> CatalogResult<Vec<StockItem>> {
        (**self).list_doors()
    }

    fn list_frames(&self) -> CatalogResult<Vec<StockItem>> {
        (**self).list_frames()
    }

    fn list_customers(&self) -> CatalogResult<Vec<Customer>> {
        (**self).list_customers()
    }
}

/// In-memory catalog for tests/dev and snapshot-driven runs.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    references: RwLock<ReferenceData>,
    doors: RwLock<BTreeMap<DoorId, DoorRecord>>,
    frames: RwLock<BTreeMap<FrameId, FrameRecord>>,
    customers: RwLock<BTreeMap<CustomerId, Customer>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_references(references: ReferenceData) -> Self {
        Self {
            references: RwLock::new(references),
            ..Self::default()
        }
    }

    /// Mutate the reference tables under the write lock.
    pub fn update_references<T>(
        &self,
        f: impl FnOnce(&mut ReferenceData) -> DomainResult<T>,
    ) -> CatalogResult<T> {
        let mut refs = self
            .references
            .write()
            .map_err(|_| CatalogError::poisoned("references"))?;
        Ok(f(&mut refs)?)
    }

    /// Store a door. Its references must already resolve.
    pub fn insert_door(&self, door: DoorRecord) -> CatalogResult<()> {
        validate_weight("door", door.id.get(), door.weight)?;
        self.read_references()?.resolve_door(&door)?;

        let mut doors = self.doors.write().map_err(|_| CatalogError::poisoned("doors"))?;
        if doors.contains_key(&door.id) {
            return Err(DomainError::conflict(format!("door {} already exists", door.id)).into());
        }
        doors.insert(door.id, door);
        Ok(())
    }

    /// Store a frame. Its references must already resolve.
    pub fn insert_frame(&self, frame: FrameRecord) -> CatalogResult<()> {
        validate_weight("frame", frame.id.get(), frame.weight)?;
        self.read_references()?.resolve_frame(&frame)?;

        let mut frames = self.frames.write().map_err(|_| CatalogError::poisoned("frames"))?;
        if frames.contains_key(&frame.id) {
            return Err(DomainError::conflict(format!("frame {} already exists", frame.id)).into());
        }
        frames.insert(frame.id, frame);
        Ok(())
    }

    /// Store a customer. Ids and names are unique.
    pub fn insert_customer(&self, customer: Customer) -> CatalogResult<()> {
        let mut customers = self
            .customers
            .write()
            .map_err(|_| CatalogError::poisoned("customers"))?;
        if customer.name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty").into());
        }
        if customers.contains_key(&customer.id) {
            return Err(
                DomainError::conflict(format!("customer {} already exists", customer.id)).into(),
            );
        }
        if customers.values().any(|c| c.name == customer.name) {
            return Err(
                DomainError::conflict(format!("customer '{}' already exists", customer.name))
                    .into(),
            );
        }
        customers.insert(customer.id, customer);
        Ok(())
    }

    pub fn door_count(&self) -> usize {
        self.doors.read().map(|d| d.len()).unwrap_or(0)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.read().map(|f| f.len()).unwrap_or(0)
    }

    fn read_references(&self) -> CatalogResult<std::sync::RwLockReadGuard<'_, ReferenceData>> {
        self.references
            .read()
            .map_err(|_| CatalogError::poisoned("references"))
    }
}

/// Unit weights are absent or finite and non-negative.
fn validate_weight(kind: &str, id: u32, weight: Option<f64>) -> DomainResult<()> {
    match weight {
        Some(w) if !w.is_finite() || w < 0.0 => Err(DomainError::validation(format!(
            "{kind} {id} weight must be a non-negative number, got {w}"
        ))),
        _ => Ok(()),
    }
}

impl InventoryCatalog for InMemoryCatalog {
    fn list_doors(&self) -> CatalogResult<Vec<StockItem>> {
        let refs = self.read_references()?;
        let doors = self.doors.read().map_err(|_| CatalogError::poisoned("doors"))?;
        doors.values().map(|d| refs.resolve_door(d)).collect()
    }

    fn list_frames(&self) -> CatalogResult<Vec<StockItem>> {
        let refs = self.read_references()?;
        let frames = self.frames.read().map_err(|_| CatalogError::poisoned("frames"))?;
        frames.values().map(|f| refs.resolve_frame(f)).collect()
    }

    fn list_customers(&self) -> CatalogResult<Vec<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|_| CatalogError::poisoned("customers"))?;
        Ok(customers.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;
    use crate::reference::{
        Brand, BrandId, FrameType, FrameTypeId, Height, HeightId, Location, LocationId, LockType,
        LockTypeId, Orientation, OrientationId, ReferenceKind, Surface, SurfaceId, WallThickness,
        WallThicknessId, Width, WidthId,
    };
    use picker_parties::ContactInfo;

    fn seeded_catalog() -> InMemoryCatalog {
        let catalog = InMemoryCatalog::new();
        catalog
            .update_references(|refs| {
                refs.locations.insert(Location {
                    id: LocationId::new(1),
                    name: "Regal 4".to_string(),
                    description: None,
                })?;
                refs.brands.insert(Brand {
                    id: BrandId::new(1),
                    name: "Jeld-Wen".to_string(),
                    description: None,
                })?;
                refs.orientations.insert(Orientation {
                    id: OrientationId::new(1),
                    name: "DIN rechts".to_string(),
                    abbreviation: "R".to_string(),
                    description: None,
                })?;
                refs.heights.insert(Height {
                    id: HeightId::new(1),
                    name: "Standard".to_string(),
                    number: 1985,
                    description: None,
                })?;
                refs.widths.insert(Width {
                    id: WidthId::new(1),
                    name: "73er".to_string(),
                    number: 735,
                    description: None,
                })?;
                refs.surfaces.insert(Surface {
                    id: SurfaceId::new(1),
                    name: "CPL Eiche".to_string(),
                    description: None,
                })?;
                refs.lock_types.insert(LockType {
                    id: LockTypeId::new(1),
                    name: "Profilzylinder".to_string(),
                    abbreviation: "PZ".to_string(),
                    description: None,
                })
            })
            .unwrap();
        catalog
    }

    fn door(id: u32, brand: u32) -> DoorRecord {
        DoorRecord {
            id: DoorId::new(id),
            location_id: LocationId::new(1),
            brand_id: BrandId::new(brand),
            orientation_id: OrientationId::new(1),
            height_id: HeightId::new(1),
            width_id: WidthId::new(1),
            surface_id: SurfaceId::new(1),
            lock_type_id: LockTypeId::new(1),
            quantity: 2,
            weight: Some(25.0),
            description: None,
        }
    }

    fn customer(id: u32, name: &str) -> Customer {
        Customer::new(CustomerId::new(id), name, ContactInfo::default()).unwrap()
    }

    #[test]
    fn list_doors_returns_resolved_items() {
        let catalog = seeded_catalog();
        catalog.insert_door(door(1, 1)).unwrap();
        catalog.insert_door(door(2, 1)).unwrap();

        let doors = catalog.list_doors().unwrap();
        assert_eq!(doors.len(), 2);
        assert!(doors.iter().all(|d| d.kind() == ItemKind::Door));
        assert!(doors.iter().all(|d| d.brand == "Jeld-Wen"));
        assert!(catalog.list_frames().unwrap().is_empty());
    }

    #[test]
    fn insert_door_rejects_unknown_reference() {
        let catalog = seeded_catalog();
        let err = catalog.insert_door(door(1, 42)).unwrap_err();
        match err {
            CatalogError::UnresolvedReference { kind, id } => {
                assert_eq!(kind, ReferenceKind::Brand);
                assert_eq!(id, 42);
            }
            other => panic!("Expected UnresolvedReference, got {other:?}"),
        }
        assert_eq!(catalog.door_count(), 0);
    }

    #[test]
    fn insert_door_rejects_duplicate_id() {
        let catalog = seeded_catalog();
        catalog.insert_door(door(1, 1)).unwrap();
        let err = catalog.insert_door(door(1, 1)).unwrap_err();
        assert!(matches!(err, CatalogError::Domain(DomainError::Conflict(_))));
    }

    #[test]
    fn insert_door_rejects_negative_weight() {
        let catalog = seeded_catalog();
        let err = catalog
            .insert_door(DoorRecord {
                weight: Some(-5.0),
                ..door(1, 1)
            })
            .unwrap_err();

        assert!(matches!(err, CatalogError::Domain(DomainError::Validation(_))));
        assert_eq!(catalog.door_count(), 0);
    }

    #[test]
    fn insert_door_accepts_missing_or_zero_weight() {
        let catalog = seeded_catalog();
        catalog.insert_door(DoorRecord { weight: None, ..door(1, 1) }).unwrap();
        catalog.insert_door(DoorRecord { weight: Some(0.0), ..door(2, 1) }).unwrap();
        assert_eq!(catalog.door_count(), 2);
    }

    #[test]
    fn insert_frame_rejects_negative_weight() {
        let catalog = seeded_catalog();
        catalog
            .update_references(|refs| {
                refs.wall_thicknesses.insert(WallThickness {
                    id: WallThicknessId::new(1),
                    name: "100 mm".to_string(),
                    description: None,
                })?;
                refs.frame_types.insert(FrameType {
                    id: FrameTypeId::new(1),
                    name: "Umfassungszarge".to_string(),
                    description: None,
                })
            })
            .unwrap();
        let frame = FrameRecord {
            id: FrameId::new(1),
            location_id: LocationId::new(1),
            brand_id: BrandId::new(1),
            orientation_id: OrientationId::new(1),
            height_id: HeightId::new(1),
            width_id: WidthId::new(1),
            surface_id: SurfaceId::new(1),
            wall_thickness_id: WallThicknessId::new(1),
            frame_type_id: FrameTypeId::new(1),
            quantity: 1,
            weight: Some(-0.5),
            description: None,
        };

        let err = catalog.insert_frame(frame.clone()).unwrap_err();
        assert!(matches!(err, CatalogError::Domain(DomainError::Validation(_))));

        catalog
            .insert_frame(FrameRecord {
                weight: Some(18.0),
                ..frame
            })
            .unwrap();
        assert_eq!(catalog.frame_count(), 1);
    }

    #[test]
    fn insert_customer_rejects_duplicate_name() {
        let catalog = InMemoryCatalog::new();
        catalog.insert_customer(customer(1, "Bauhof Krause")).unwrap();

        let err = catalog.insert_customer(customer(2, "Bauhof Krause")).unwrap_err();
        assert!(matches!(err, CatalogError::Domain(DomainError::Conflict(_))));
        assert_eq!(catalog.list_customers().unwrap().len(), 1);
    }

    #[test]
    fn arc_catalog_delegates() {
        let catalog = Arc::new(InMemoryCatalog::new());
        catalog.insert_customer(customer(1, "A")).unwrap();
        catalog.insert_customer(customer(2, "B")).unwrap();

        let shared: Arc<dyn InventoryCatalog> = catalog;
        assert_eq!(shared.list_customers().unwrap().len(), 2);
    }
}
