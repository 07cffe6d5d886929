//! Farm profile model

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{short_id, EntityId};

/// The farm being managed. At most one exists per record store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    id: EntityId,
    pub name: String,
    pub owner_name: String,
    pub address: Option<String>,
    pub total_acreage: Decimal,
    pub established_date: NaiveDate,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
}

impl Farm {
    /// Create a farm established today
    pub fn new(name: impl Into<String>, owner_name: impl Into<String>, total_acreage: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            owner_name: owner_name.into(),
            address: None,
            total_acreage,
            established_date: Utc::now().date_naive(),
            contact_phone: None,
            contact_email: None,
            notes: None,
        }
    }

    /// Assigned at construction, never changed
    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl std::fmt::Display for Farm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Farm{{id='{}', name='{}', owner='{}', acreage={:.2}, established={}}}",
            short_id(&self.id),
            self.name,
            self.owner_name,
            self.total_acreage,
            self.established_date
        )
    }
}
