//! Livestock models

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{impl_enum_text, short_id, EntityId};

/// Kinds of animals kept on the farm
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    Cattle,
    Pig,
    Sheep,
    Goat,
    Chicken,
    Duck,
    Turkey,
    Horse,
    Other,
}

impl AnimalType {
    pub const ALL: [AnimalType; 9] = [
        AnimalType::Cattle,
        AnimalType::Pig,
        AnimalType::Sheep,
        AnimalType::Goat,
        AnimalType::Chicken,
        AnimalType::Duck,
        AnimalType::Turkey,
        AnimalType::Horse,
        AnimalType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Cattle => "CATTLE",
            AnimalType::Pig => "PIG",
            AnimalType::Sheep => "SHEEP",
            AnimalType::Goat => "GOAT",
            AnimalType::Chicken => "CHICKEN",
            AnimalType::Duck => "DUCK",
            AnimalType::Turkey => "TURKEY",
            AnimalType::Horse => "HORSE",
            AnimalType::Other => "OTHER",
        }
    }
}

impl_enum_text!(AnimalType, "animal type");

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl_enum_text!(Gender, "gender");

/// Health state of an animal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Healthy,
    Sick,
    Recovering,
    Quarantined,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::Healthy,
        HealthStatus::Sick,
        HealthStatus::Recovering,
        HealthStatus::Quarantined,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "HEALTHY",
            HealthStatus::Sick => "SICK",
            HealthStatus::Recovering => "RECOVERING",
            HealthStatus::Quarantined => "QUARANTINED",
        }
    }
}

impl_enum_text!(HealthStatus, "health status");

/// An animal on the farm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Livestock {
    id: EntityId,
    /// Name or ear tag
    pub name: String,
    pub animal_type: AnimalType,
    pub breed: String,
    pub birth_date: Option<NaiveDate>,
    pub acquisition_date: NaiveDate,
    pub gender: Gender,
    pub weight: Decimal,
    pub health_status: HealthStatus,
    pub location: Option<String>,
    pub notes: Option<String>,
}

impl Livestock {
    /// Register a healthy animal acquired today
    pub fn new(
        name: impl Into<String>,
        animal_type: AnimalType,
        breed: impl Into<String>,
        gender: Gender,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            animal_type,
            breed: breed.into(),
            birth_date: None,
            acquisition_date: Utc::now().date_naive(),
            gender,
            weight: Decimal::ZERO,
            health_status: HealthStatus::Healthy,
            location: None,
            notes: None,
        }
    }

    /// Assigned at construction, never changed
    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl std::fmt::Display for Livestock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Livestock{{id='{}', name='{}', type={}, breed='{}', gender={}, health={}}}",
            short_id(&self.id),
            self.name,
            self.animal_type,
            self.breed,
            self.gender,
            self.health_status
        )
    }
}
