use serde::{Deserialize, Serialize};

use picker_core::RecordId;
use picker_inventory::{ItemKind, StockItem};

/// Flat display record of one stock item on a pallet.
///
/// Field names on the wire follow the dispatch sheet columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedItem {
    #[serde(rename = "lagerort")]
    pub location: String,
    #[serde(rename = "mark")]
    pub brand: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Orientation abbreviation.
    #[serde(rename = "richtung")]
    pub orientation: String,
    #[serde(rename = "höhe")]
    pub height: u32,
    #[serde(rename = "breite")]
    pub width: u32,
    #[serde(rename = "nummer")]
    pub number: RecordId,
    #[serde(rename = "oberfläche")]
    pub surface: String,
    /// Unit weight in kilograms, as recorded.
    #[serde(rename = "gewicht")]
    pub weight: Option<f64>,
    pub client_count: u32,
    pub id: RecordId,
    /// `weight * client_count`; a missing weight counts as zero.
    pub total_weight: f64,
}

/// Flatten a stock item for a pallet, given its tag and rolled client count.
pub fn format_item(item: &StockItem, kind: ItemKind, client_count: u32) -> FormattedItem {
    FormattedItem {
        location: item.location.clone(),
        brand: item.brand.clone(),
        kind,
        orientation: item.orientation.abbreviation.clone(),
        height: item.height.number,
        width: item.width.number,
        number: item.id,
        surface: item.surface.clone(),
        weight: item.weight,
        client_count,
        id: item.id,
        total_weight: total_weight(item.weight, client_count),
    }
}

pub fn total_weight(unit_weight: Option<f64>, client_count: u32) -> f64 {
    unit_weight.unwrap_or(0.0) * f64::from(client_count)
}


#[cfg(test)]
mod tests {
    use super::fixtures::{door, frame};
    use super::*;

    #[test]
    fn format_item_flattens_resolved_attributes() {
        let item = format_item(&door(7, Some(30.0)), ItemKind::Door, 3);

        assert_eq!(item.location, "Halle A");
        assert_eq!(item.brand, "Prüm");
        assert_eq!(item.kind, ItemKind::Door);
        assert_eq!(item.orientation, "L");
        assert_eq!(item.height, 1985);
        assert_eq!(item.width, 860);
        assert_eq!(item.surface, "Weißlack");
        assert_eq!(item.number, RecordId::new(7));
        assert_eq!(item.id, RecordId::new(7));
        assert_eq!(item.weight, Some(30.0));
        assert_eq!(item.client_count, 3);
        assert_eq!(item.total_weight, 90.0);
    }

    #[test]
    fn missing_weight_counts_as_zero() {
        let item = format_item(&frame(2, None), ItemKind::Frame, 5);
        assert_eq!(item.weight, None);
        assert_eq!(item.total_weight, 0.0);
    }

    #[test]
    fn serializes_with_dispatch_sheet_keys() {
        let item = format_item(&frame(4, Some(12.5)), ItemKind::Frame, 2);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["lagerort"], "Halle B");
        assert_eq!(json["mark"], "Prüm");
        assert_eq!(json["type"], "frame");
        assert_eq!(json["richtung"], "L");
        assert_eq!(json["höhe"], 1985);
        assert_eq!(json["breite"], 860);
        assert_eq!(json["nummer"], 4);
        assert_eq!(json["id"], 4);
        assert_eq!(json["oberfläche"], "Weißlack");
        assert_eq!(json["gewicht"], 12.5);
        assert_eq!(json["client_count"], 2);
        assert_eq!(json["total_weight"], 25.0);
    }
}
