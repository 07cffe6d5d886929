//! Harvest models

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{impl_enum_text, short_id, EntityId};

/// Quality grade assigned to a harvest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    Premium,
    #[default]
    GradeA,
    GradeB,
    GradeC,
    Rejected,
}

impl QualityGrade {
    pub const ALL: [QualityGrade; 5] = [
        QualityGrade::Premium,
        QualityGrade::GradeA,
        QualityGrade::GradeB,
        QualityGrade::GradeC,
        QualityGrade::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityGrade::Premium => "PREMIUM",
            QualityGrade::GradeA => "GRADE_A",
            QualityGrade::GradeB => "GRADE_B",
            QualityGrade::GradeC => "GRADE_C",
            QualityGrade::Rejected => "REJECTED",
        }
    }
}

impl_enum_text!(QualityGrade, "quality grade");

/// A harvest record for a crop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
    id: EntityId,
    /// Crop this harvest came from. Non-owning; may outlive the crop.
    pub crop_id: EntityId,
    pub harvest_date: NaiveDate,
    pub quantity: Decimal,
    pub unit: String,
    pub quality: QualityGrade,
    pub market_value: Decimal,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

impl Harvest {
    /// Record a Grade A harvest taken today
    pub fn new(crop_id: EntityId, quantity: Decimal, unit: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            crop_id,
            harvest_date: Utc::now().date_naive(),
            quantity,
            unit: unit.into(),
            quality: QualityGrade::default(),
            market_value: Decimal::ZERO,
            storage_location: None,
            notes: None,
        }
    }

    /// Assigned at construction, never changed
    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl std::fmt::Display for Harvest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Harvest{{id='{}', crop='{}', quantity={:.2} {}, quality={}, date={}}}",
            short_id(&self.id),
            short_id(&self.crop_id),
            self.quantity,
            self.unit,
            self.quality,
            self.harvest_date
        )
    }
}
