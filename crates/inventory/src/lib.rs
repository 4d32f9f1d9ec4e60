//! Inventory catalog: reference data, door/frame stock and customers.
//!
//! Stock rows are stored with foreign keys and resolved on read, so consumers
//! (load planning) only ever see [`StockItem`]s with display values filled in.

pub mod catalog;
pub mod error;
pub mod item;
pub mod reference;
pub mod snapshot;

pub use catalog::{InMemoryCatalog, InventoryCatalog};
pub use error::{CatalogError, CatalogResult};
pub use item::{DoorId, DoorRecord, FrameId, FrameRecord, ItemKind, StockDetails, StockItem};
pub use reference::{
    Abbreviated, Brand, BrandId, Dimension, FrameType, FrameTypeId, Height, HeightId, Location,
    LocationId, LockType, LockTypeId, Orientation, OrientationId, Reference, ReferenceData,
    ReferenceKind, ReferenceTable, Surface, SurfaceId, WallThickness, WallThicknessId, Width,
    WidthId,
};
pub use snapshot::CatalogSnapshot;
