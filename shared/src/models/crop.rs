//! Crop models

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{impl_enum_text, short_id, EntityId};

/// Growth stage of a crop.
///
/// Transitions are not checked: any stage may follow any other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CropStatus {
    #[default]
    Planted,
    Growing,
    ReadyForHarvest,
    Harvested,
    Failed,
}

impl CropStatus {
    pub const ALL: [CropStatus; 5] = [
        CropStatus::Planted,
        CropStatus::Growing,
        CropStatus::ReadyForHarvest,
        CropStatus::Harvested,
        CropStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropStatus::Planted => "PLANTED",
            CropStatus::Growing => "GROWING",
            CropStatus::ReadyForHarvest => "READY_FOR_HARVEST",
            CropStatus::Harvested => "HARVESTED",
            CropStatus::Failed => "FAILED",
        }
    }

    /// Whether the crop still occupies its planted area
    pub fn is_active(&self) -> bool {
        matches!(self, CropStatus::Planted | CropStatus::Growing)
    }
}

impl_enum_text!(CropStatus, "crop status");

/// A crop planted on the farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crop {
    id: EntityId,
    pub name: String,
    pub variety: String,
    pub planting_date: NaiveDate,
    pub expected_harvest_date: Option<NaiveDate>,
    pub area_acres: Decimal,
    pub status: CropStatus,
    /// Field this crop was planted in. Non-owning.
    pub field_id: Option<EntityId>,
    pub expected_yield_per_acre: Decimal,
    pub notes: Option<String>,
}

impl Crop {
    /// Create a crop planted today
    pub fn new(name: impl Into<String>, variety: impl Into<String>, area_acres: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            variety: variety.into(),
            planting_date: Utc::now().date_naive(),
            expected_harvest_date: None,
            area_acres,
            status: CropStatus::Planted,
            field_id: None,
            expected_yield_per_acre: Decimal::ZERO,
            notes: None,
        }
    }

    /// Assigned at construction, never changed
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Expected yield over the whole planted area, saturating at the
    /// `Decimal` bounds
    pub fn expected_total_yield(&self) -> Decimal {
        self.expected_yield_per_acre.saturating_mul(self.area_acres)
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Crop{{id='{}', name='{}', variety='{}', area={:.2} acres, status={}, planted={}}}",
            short_id(&self.id),
            self.name,
            self.variety,
            self.area_acres,
            self.status,
            self.planting_date
        )
    }
}
