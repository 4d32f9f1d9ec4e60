//! Reference catalogs (Stammdaten) that stock records point at.
//!
//! Each table keeps its rows keyed by id and enforces unique names, the same
//! constraint the storage schema carries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use picker_core::{DomainError, DomainResult, Entity, ValueObject, record_id};

use crate::error::{CatalogError, CatalogResult};

record_id! {
    /// Brand (Marke) identifier.
    pub struct BrandId;
}
record_id! {
    /// Opening direction (Richtung) identifier.
    pub struct OrientationId;
}
record_id! {
    /// Height (Höhe) identifier.
    pub struct HeightId;
}
record_id! {
    /// Width (Breite) identifier.
    pub struct WidthId;
}
record_id! {
    /// Surface finish (Oberfläche) identifier.
    pub struct SurfaceId;
}
record_id! {
    /// Wall thickness (Wandstärke) identifier.
    pub struct WallThicknessId;
}
record_id! {
    /// Lock type (Schlossart) identifier.
    pub struct LockTypeId;
}
record_id! {
    /// Frame type (Zargenart) identifier.
    pub struct FrameTypeId;
}
record_id! {
    /// Warehouse location (Lagerort) identifier.
    pub struct LocationId;
}

/// Which reference table a row belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Brand,
    Orientation,
    Height,
    Width,
    Surface,
    WallThickness,
    LockType,
    FrameType,
    Location,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Brand => "brand",
            ReferenceKind::Orientation => "orientation",
            ReferenceKind::Height => "height",
            ReferenceKind::Width => "width",
            ReferenceKind::Surface => "surface",
            ReferenceKind::WallThickness => "wall_thickness",
            ReferenceKind::LockType => "lock_type",
            ReferenceKind::FrameType => "frame_type",
            ReferenceKind::Location => "location",
        }
    }
}

impl core::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of a reference table.
pub trait Reference: Entity + Clone {
    const KIND: ReferenceKind;

    fn name(&self) -> &str;

    fn raw_id(&self) -> u32;
}

macro_rules! impl_reference {
    ($t:ty, $id:ty, $kind:expr) => {
        impl Entity for $t {
            type Id = $id;

            fn id(&self) -> &Self::Id {
                &self.id
            }
        }

        impl Reference for $t {
            const KIND: ReferenceKind = $kind;

            fn name(&self) -> &str {
                &self.name
            }

            fn raw_id(&self) -> u32 {
                self.id.get()
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Opening direction, e.g. "DIN links" abbreviated "L".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientation {
    pub id: OrientationId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub id: HeightId,
    pub name: String,
    /// Nominal size in millimetres.
    pub number: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Width {
    pub id: WidthId,
    pub name: String,
    /// Nominal size in millimetres.
    pub number: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surface {
    pub id: SurfaceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallThickness {
    pub id: WallThicknessId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockType {
    pub id: LockTypeId,
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameType {
    pub id: FrameTypeId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl_reference!(Brand, BrandId, ReferenceKind::Brand);
impl_reference!(Orientation, OrientationId, ReferenceKind::Orientation);
impl_reference!(Height, HeightId, ReferenceKind::Height);
impl_reference!(Width, WidthId, ReferenceKind::Width);
impl_reference!(Surface, SurfaceId, ReferenceKind::Surface);
impl_reference!(WallThickness, WallThicknessId, ReferenceKind::WallThickness);
impl_reference!(LockType, LockTypeId, ReferenceKind::LockType);
impl_reference!(FrameType, FrameTypeId, ReferenceKind::FrameType);
impl_reference!(Location, LocationId, ReferenceKind::Location);

/// A resolved name + abbreviation pair (orientation, lock type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviated {
    pub name: String,
    pub abbreviation: String,
}

impl ValueObject for Abbreviated {}

/// A resolved name + nominal size pair (height, width).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub number: u32,
}

impl ValueObject for Dimension {}

impl From<&Orientation> for Abbreviated {
    fn from(value: &Orientation) -> Self {
        Self {
            name: value.name.clone(),
            abbreviation: value.abbreviation.clone(),
        }
    }
}

impl From<&LockType> for Abbreviated {
    fn from(value: &LockType) -> Self {
        Self {
            name: value.name.clone(),
            abbreviation: value.abbreviation.clone(),
        }
    }
}

impl From<&Height> for Dimension {
    fn from(value: &Height) -> Self {
        Self {
            name: value.name.clone(),
            number: value.number,
        }
    }
}

impl From<&Width> for Dimension {
    fn from(value: &Width) -> Self {
        Self {
            name: value.name.clone(),
            number: value.number,
        }
    }
}

/// One reference table with unique, non-blank names.
#[derive(Debug, Clone)]
pub struct ReferenceTable<R> {
    rows: BTreeMap<u32, R>,
}

impl<R> Default for ReferenceTable<R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<R: Reference> ReferenceTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, row: R) -> DomainResult<()> {
        if row.name().trim().is_empty() {
            return Err(DomainError::validation(format!("{} name cannot be empty", R::KIND)));
        }
        if self.rows.contains_key(&row.raw_id()) {
            return Err(DomainError::conflict(format!(
                "{} id {} already exists",
                R::KIND,
                row.raw_id()
            )));
        }
        if self.by_name(row.name()).is_some() {
            return Err(DomainError::conflict(format!(
                "{} '{}' already exists",
                R::KIND,
                row.name()
            )));
        }
        self.rows.insert(row.raw_id(), row);
        Ok(())
    }

    pub fn get(&self, id: u32) -> CatalogResult<&R> {
        self.rows
            .get(&id)
            .ok_or(CatalogError::UnresolvedReference { kind: R::KIND, id })
    }

    pub fn by_name(&self, name: &str) -> Option<&R> {
        self.rows.values().find(|r| r.name() == name)
    }

    pub fn list(&self) -> Vec<R> {
        self.rows.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// All reference tables of the catalog.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub brands: ReferenceTable<Brand>,
    pub orientations: ReferenceTable<Orientation>,
    pub heights: ReferenceTable<Height>,
    pub widths: ReferenceTable<Width>,
    pub surfaces: ReferenceTable<Surface>,
    pub wall_thicknesses: ReferenceTable<WallThickness>,
    pub lock_types: ReferenceTable<LockType>,
    pub frame_types: ReferenceTable<FrameType>,
    pub locations: ReferenceTable<Location>,
}

impl ReferenceData {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand(id: u32, name: &str) -> Brand {
        Brand {
            id: BrandId::new(id),
            name: name.to_string(),
            description: None,
        }
    }

    #[test]
    fn insert_rejects_duplicate_name() {
        let mut table = ReferenceTable::new();
        table.insert(brand(1, "Prüm")).unwrap();

        let err = table.insert(brand(2, "Prüm")).unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("brand 'Prüm'")),
            _ => panic!("Expected Conflict error for duplicate name"),
        }
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut table = ReferenceTable::new();
        table.insert(brand(1, "Prüm")).unwrap();

        let err = table.insert(brand(1, "Hörmann")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn insert_rejects_blank_name() {
        let mut table: ReferenceTable<Brand> = ReferenceTable::new();
        let err = table.insert(brand(1, "  ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(table.is_empty());
    }

    #[test]
    fn get_unknown_id_names_the_table() {
        let table: ReferenceTable<Height> = ReferenceTable::new();
        let err = table.get(12).unwrap_err();
        match err {
            CatalogError::UnresolvedReference { kind, id } => {
                assert_eq!(kind, ReferenceKind::Height);
                assert_eq!(id, 12);
            }
            other => panic!("Expected UnresolvedReference, got {other:?}"),
        }
    }

    #[test]
    fn list_is_ordered_by_id() {
        let mut table = ReferenceTable::new();
        table.insert(brand(3, "C")).unwrap();
        table.insert(brand(1, "A")).unwrap();
        table.insert(brand(2, "B")).unwrap();

        let names: Vec<_> = table.list().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every distinct name inserted is found again by name.
            #[test]
            fn distinct_names_are_all_retrievable(
                names in prop::collection::btree_set("[A-Za-z][A-Za-z0-9 ]{0,20}", 1..20)
            ) {
                let mut table = ReferenceTable::new();
                for (i, name) in names.iter().enumerate() {
                    table.insert(brand(i as u32 + 1, name)).unwrap();
                }

                prop_assert_eq!(table.len(), names.len());
                for name in &names {
                    prop_assert!(table.by_name(name).is_some());
                }
            }
        }
    }
}
