use serde::{Deserialize, Serialize};

use picker_core::{Entity, RecordId, record_id};

use crate::error::CatalogResult;
use crate::reference::{
    Abbreviated, BrandId, Dimension, FrameTypeId, HeightId, LocationId, LockTypeId,
    OrientationId, ReferenceData, SurfaceId, WallThicknessId, WidthId,
};

record_id! {
    /// Door (Tür) identifier.
    pub struct DoorId;
}
record_id! {
    /// Frame (Zarge) identifier.
    pub struct FrameId;
}

/// Type tag of a stock item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Door,
    Frame,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Door => "door",
            ItemKind::Frame => "frame",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored door row: attributes are foreign keys into the reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorRecord {
    pub id: DoorId,
    pub location_id: LocationId,
    pub brand_id: BrandId,
    pub orientation_id: OrientationId,
    pub height_id: HeightId,
    pub width_id: WidthId,
    pub surface_id: SurfaceId,
    pub lock_type_id: LockTypeId,
    /// Units on hand (Menge).
    #[serde(default)]
    pub quantity: u32,
    /// Unit weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Stored frame row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub id: FrameId,
    pub location_id: LocationId,
    pub brand_id: BrandId,
    pub orientation_id: OrientationId,
    pub height_id: HeightId,
    pub width_id: WidthId,
    pub wall_thickness_id: WallThicknessId,
    pub surface_id: SurfaceId,
    pub frame_type_id: FrameTypeId,
    #[serde(default)]
    pub quantity: u32,
    /// Unit weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for DoorRecord {
    type Id = DoorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for FrameRecord {
    type Id = FrameId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Attributes only one kind of stock item carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StockDetails {
    Door {
        lock_type: Abbreviated,
    },
    Frame {
        wall_thickness: String,
        frame_type: String,
    },
}

/// A door or frame with every reference resolved to its display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: RecordId,
    pub location: String,
    pub brand: String,
    pub orientation: Abbreviated,
    pub height: Dimension,
    pub width: Dimension,
    pub surface: String,
    /// Unit weight in kilograms; absent when never recorded.
    pub weight: Option<f64>,
    pub quantity: u32,
    pub description: Option<String>,
    pub details: StockDetails,
}

impl StockItem {
    pub fn kind(&self) -> ItemKind {
        match self.details {
            StockDetails::Door { .. } => ItemKind::Door,
            StockDetails::Frame { .. } => ItemKind::Frame,
        }
    }
}

impl ReferenceData {
    /// Join a door row against the reference tables.
    pub fn resolve_door(&self, door: &DoorRecord) -> CatalogResult<StockItem> {
        Ok(StockItem {
            id: door.id.0,
            location: self.locations.get(door.location_id.get())?.name.clone(),
            brand: self.brands.get(door.brand_id.get())?.name.clone(),
            orientation: self.orientations.get(door.orientation_id.get())?.into(),
            height: self.heights.get(door.height_id.get())?.into(),
            width: self.widths.get(door.width_id.get())?.into(),
            surface: self.surfaces.get(door.surface_id.get())?.name.clone(),
            weight: door.weight,
            quantity: door.quantity,
            description: door.description.clone(),
            details: StockDetails::Door {
                lock_type: self.lock_types.get(door.lock_type_id.get())?.into(),
            },
        })
    }

    /// Join a frame row against the reference tables.
    pub fn resolve_frame(&self, frame: &FrameRecord) -> CatalogResult<StockItem> {
        Ok(StockItem {
            id: frame.id.0,
            location: self.locations.get(frame.location_id.get())?.name.clone(),
            brand: self.brands.get(frame.brand_id.get())?.name.clone(),
            orientation: self.orientations.get(frame.orientation_id.get())?.into(),
            height: self.heights.get(frame.height_id.get())?.into(),
            width: self.widths.get(frame.width_id.get())?.into(),
            surface: self.surfaces.get(frame.surface_id.get())?.name.clone(),
            weight: frame.weight,
            quantity: frame.quantity,
            description: frame.description.clone(),
            details: StockDetails::Frame {
                wall_thickness: self
                    .wall_thicknesses
                    .get(frame.wall_thickness_id.get())?
                    .name
                    .clone(),
                frame_type: self.frame_types.get(frame.frame_type_id.get())?.name.clone(),
            },
        })
    }
}
