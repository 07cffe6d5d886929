//! Field (plot of land) models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{impl_enum_text, short_id, EntityId};

/// Soil classification of a field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Sandy,
    Loamy,
    Silt,
    Peat,
    Chalk,
}

impl SoilType {
    pub const ALL: [SoilType; 6] = [
        SoilType::Clay,
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Silt,
        SoilType::Peat,
        SoilType::Chalk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Clay => "CLAY",
            SoilType::Sandy => "SANDY",
            SoilType::Loamy => "LOAMY",
            SoilType::Silt => "SILT",
            SoilType::Peat => "PEAT",
            SoilType::Chalk => "CHALK",
        }
    }
}

impl_enum_text!(SoilType, "soil type");

/// Usage state of a field.
///
/// `Available` and `Planted` follow the crop list; `Fallow` and
/// `UnderPreparation` are only ever set explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    #[default]
    Available,
    Planted,
    Fallow,
    UnderPreparation,
}

impl FieldStatus {
    pub const ALL: [FieldStatus; 4] = [
        FieldStatus::Available,
        FieldStatus::Planted,
        FieldStatus::Fallow,
        FieldStatus::UnderPreparation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Available => "AVAILABLE",
            FieldStatus::Planted => "PLANTED",
            FieldStatus::Fallow => "FALLOW",
            FieldStatus::UnderPreparation => "UNDER_PREPARATION",
        }
    }
}

impl_enum_text!(FieldStatus, "field status");

/// A field or plot of land on the farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    id: EntityId,
    pub name: String,
    pub size_acres: Decimal,
    pub soil_type: SoilType,
    /// Follows the crop list through `add_crop_id`/`remove_crop_id`.
    /// Assigning it directly bypasses that rule.
    pub status: FieldStatus,
    pub location: Option<String>,
    /// Crops planted here, in planting order. Duplicates are allowed.
    crop_ids: Vec<EntityId>,
    pub notes: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, size_acres: Decimal, soil_type: SoilType) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            size_acres,
            soil_type,
            status: FieldStatus::Available,
            location: None,
            crop_ids: Vec::new(),
            notes: None,
        }
    }

    /// Assigned at construction, never changed
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn crop_ids(&self) -> &[EntityId] {
        &self.crop_ids
    }

    /// Append a crop and mark the field as planted
    pub fn add_crop_id(&mut self, crop_id: EntityId) {
        self.crop_ids.push(crop_id);
        self.status = FieldStatus::Planted;
    }

    /// Remove the first occurrence of a crop. The field becomes available
    /// again once its crop list is empty.
    pub fn remove_crop_id(&mut self, crop_id: EntityId) {
        if let Some(pos) = self.crop_ids.iter().position(|id| *id == crop_id) {
            self.crop_ids.remove(pos);
        }
        if self.crop_ids.is_empty() {
            self.status = FieldStatus::Available;
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Field{{id='{}', name='{}', size={:.2} acres, soil={}, status={}}}",
            short_id(&self.id),
            self.name,
            self.size_acres,
            self.soil_type,
            self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn north_field() -> Field {
        Field::new("North Field", Decimal::from(25), SoilType::Loamy)
    }

    #[test]
    fn test_new_field_is_available_and_empty() {
        let field = north_field();
        assert_eq!(field.status, FieldStatus::Available);
        assert!(field.crop_ids().is_empty());
        assert_eq!(field.size_acres, Decimal::from(25));
        assert_eq!(field.soil_type, SoilType::Loamy);
    }

    #[test]
    fn test_adding_crop_marks_planted() {
        let mut field = north_field();
        let crop_id = Uuid::new_v4();
        field.add_crop_id(crop_id);
        assert_eq!(field.status, FieldStatus::Planted);
        assert_eq!(field.crop_ids(), &[crop_id]);
    }

    #[test]
    fn test_removing_last_crop_reverts_to_available() {
        let mut field = north_field();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        field.add_crop_id(first);
        field.add_crop_id(second);

        field.remove_crop_id(first);
        assert_eq!(field.status, FieldStatus::Planted);
        assert_eq!(field.crop_ids(), &[second]);

        field.remove_crop_id(second);
        assert_eq!(field.status, FieldStatus::Available);
        assert!(field.crop_ids().is_empty());
    }

    #[test]
    fn test_duplicate_crop_ids_are_kept() {
        let mut field = north_field();
        let crop_id = Uuid::new_v4();
        field.add_crop_id(crop_id);
        field.add_crop_id(crop_id);
        assert_eq!(field.crop_ids().len(), 2);

        field.remove_crop_id(crop_id);
        assert_eq!(field.crop_ids(), &[crop_id]);
        assert_eq!(field.status, FieldStatus::Planted);
    }

    #[test]
    fn test_adding_crop_overrides_fallow() {
        let mut field = north_field();
        field.status = FieldStatus::Fallow;
        field.add_crop_id(Uuid::new_v4());
        assert_eq!(field.status, FieldStatus::Planted);
    }

    #[test]
    fn test_direct_status_bypasses_crop_list() {
        let mut field = north_field();
        field.add_crop_id(Uuid::new_v4());
        field.status = FieldStatus::UnderPreparation;
        assert_eq!(field.status, FieldStatus::UnderPreparation);
        assert_eq!(field.crop_ids().len(), 1);
    }

    #[test]
    fn test_removing_unknown_crop_from_empty_field_resets_status() {
        let mut field = north_field();
        field.status = FieldStatus::Fallow;
        field.remove_crop_id(Uuid::new_v4());
        assert_eq!(field.status, FieldStatus::Available);
    }

    #[test]
    fn test_soil_parsing() {
        assert_eq!(SoilType::from_str("loamy").unwrap(), SoilType::Loamy);
        assert_eq!(SoilType::from_str("CHALK").unwrap(), SoilType::Chalk);
        let err = SoilType::from_str("gravel").unwrap_err();
        assert_eq!(err.kind, "soil type");
        assert_eq!(
            FieldStatus::from_str("under-preparation").unwrap(),
            FieldStatus::UnderPreparation
        );
    }
}
