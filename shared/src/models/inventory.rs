//! Inventory management models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{impl_enum_text, short_id, EntityId};

/// Categories of stocked supplies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Seeds,
    Fertilizer,
    Pesticide,
    Feed,
    Equipment,
    Fuel,
    Medicine,
    Other,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 8] = [
        ItemCategory::Seeds,
        ItemCategory::Fertilizer,
        ItemCategory::Pesticide,
        ItemCategory::Feed,
        ItemCategory::Equipment,
        ItemCategory::Fuel,
        ItemCategory::Medicine,
        ItemCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Seeds => "SEEDS",
            ItemCategory::Fertilizer => "FERTILIZER",
            ItemCategory::Pesticide => "PESTICIDE",
            ItemCategory::Feed => "FEED",
            ItemCategory::Equipment => "EQUIPMENT",
            ItemCategory::Fuel => "FUEL",
            ItemCategory::Medicine => "MEDICINE",
            ItemCategory::Other => "OTHER",
        }
    }
}

impl_enum_text!(ItemCategory, "item category");

/// A stocked supply: seeds, feed, fuel, equipment and so on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: EntityId,
    pub name: String,
    pub category: ItemCategory,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_cost: Decimal,
    /// Stock at or below this level is reported as low
    pub minimum_stock: Decimal,
    pub supplier: Option<String>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

impl InventoryItem {
    pub fn new(
        name: impl Into<String>,
        category: ItemCategory,
        quantity: Decimal,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            quantity,
            unit: unit.into(),
            unit_cost: Decimal::ZERO,
            minimum_stock: Decimal::ZERO,
            supplier: None,
            storage_location: None,
            notes: None,
        }
    }

    /// Assigned at construction, never changed
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Adjust the quantity by `amount`. Negative amounts are applied as-is
    /// and may drive the quantity below zero. Saturates at the `Decimal`
    /// bounds.
    pub fn add_quantity(&mut self, amount: Decimal) {
        self.quantity = self.quantity.saturating_add(amount);
    }

    /// Take `amount` out of stock if enough is on hand.
    ///
    /// Returns `false` and leaves the quantity untouched otherwise.
    pub fn remove_quantity(&mut self, amount: Decimal) -> bool {
        if amount <= self.quantity {
            self.quantity = self.quantity.saturating_sub(amount);
            true
        } else {
            false
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum_stock
    }

    /// Quantity times unit cost, saturating at the `Decimal` bounds
    pub fn total_value(&self) -> Decimal {
        self.quantity.saturating_mul(self.unit_cost)
    }
}

impl std::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InventoryItem{{id='{}', name='{}', category={}, quantity={:.2} {}{}}}",
            short_id(&self.id),
            self.name,
            self.category,
            self.quantity,
            self.unit,
            if self.is_low_stock() { " [LOW STOCK]" } else { "" }
        )
    }
}
