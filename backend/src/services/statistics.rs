//! Farm-wide rollup statistics

use rust_decimal::Decimal;
use serde::Serialize;

/// Counts and acreage totals computed from the record store at call time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FarmStatistics {
    pub total_crops: usize,
    pub total_livestock: usize,
    pub total_fields: usize,
    pub total_harvests: usize,
    pub total_inventory_items: usize,
    /// Sum of every field's size, whatever its status
    pub total_field_acreage: Decimal,
    /// Sum of crop areas for crops still planted or growing
    pub actively_planted_acreage: Decimal,
    pub low_stock_item_count: usize,
}

impl std::fmt::Display for FarmStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Farm Statistics:")?;
        writeln!(f, "  Total Crops: {}", self.total_crops)?;
        writeln!(f, "  Total Livestock: {}", self.total_livestock)?;
        writeln!(
            f,
            "  Total Fields: {} ({:.2} acres)",
            self.total_fields, self.total_field_acreage
        )?;
        writeln!(f, "  Actively Planted: {:.2} acres", self.actively_planted_acreage)?;
        writeln!(f, "  Total Harvests: {}", self.total_harvests)?;
        write!(
            f,
            "  Inventory Items: {} ({} low stock)",
            self.total_inventory_items, self.low_stock_item_count
        )
    }
}
