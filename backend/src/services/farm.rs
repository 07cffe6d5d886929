//! In-memory farm record store and the business rules that keep it
//! consistent

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{
    AnimalType, Crop, CropStatus, EntityId, Farm, Field, FieldStatus, Harvest, HealthStatus,
    InventoryItem, ItemCategory, Livestock,
};
use crate::services::FarmStatistics;

/// Farm record service.
///
/// Owns every entity collection and is the only place cross-entity rules
/// are applied. Lookups of unknown ids are never errors: they return `None`
/// or `false`, or do nothing.
///
/// Removals do not cascade. Removing a crop leaves its id in any field that
/// lists it, and removing a field leaves crops pointing at it.
///
/// Mutation takes `&mut self`; callers sharing one service between threads
/// must put it behind their own lock.
#[derive(Debug, Clone, Default)]
pub struct FarmService {
    farm: Option<Farm>,
    crops: HashMap<EntityId, Crop>,
    livestock: HashMap<EntityId, Livestock>,
    fields: HashMap<EntityId, Field>,
    harvests: HashMap<EntityId, Harvest>,
    inventory: HashMap<EntityId, InventoryItem>,
}

impl FarmService {
    /// Create an empty record store
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Farm
    // ========================================================================

    /// Store the farm profile, replacing any previous one
    pub fn set_farm(&mut self, farm: Farm) {
        tracing::debug!(farm_id = %farm.id(), replaced = self.farm.is_some(), "Setting farm");
        self.farm = Some(farm);
    }

    pub fn farm(&self) -> Option<&Farm> {
        self.farm.as_ref()
    }

    pub fn farm_mut(&mut self) -> Option<&mut Farm> {
        self.farm.as_mut()
    }

    // ========================================================================
    // Crops
    // ========================================================================

    pub fn add_crop(&mut self, crop: Crop) -> &Crop {
        let id = crop.id();
        tracing::debug!(crop_id = %id, name = crop.name.as_str(), "Adding crop");
        self.crops.insert(id, crop);
        &self.crops[&id]
    }

    pub fn get_crop(&self, id: EntityId) -> Option<&Crop> {
        self.crops.get(&id)
    }

    pub fn get_crop_mut(&mut self, id: EntityId) -> Option<&mut Crop> {
        self.crops.get_mut(&id)
    }

    pub fn all_crops(&self) -> Vec<Crop> {
        self.crops.values().cloned().collect()
    }

    pub fn crops_by_status(&self, status: CropStatus) -> Vec<Crop> {
        self.crops
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect()
    }

    /// Remove a crop. Fields that list it keep the orphaned id.
    pub fn remove_crop(&mut self, id: EntityId) -> bool {
        let removed = self.crops.remove(&id).is_some();
        tracing::debug!(crop_id = %id, removed, "Removing crop");
        removed
    }

    /// Set a crop's status. Any transition is accepted.
    pub fn update_crop_status(&mut self, id: EntityId, status: CropStatus) -> Option<&Crop> {
        match self.crops.get_mut(&id) {
            Some(crop) => {
                tracing::debug!(crop_id = %id, from = %crop.status, to = %status, "Updating crop status");
                crop.status = status;
                Some(&*crop)
            }
            None => {
                tracing::debug!(crop_id = %id, "Crop not found, status unchanged");
                None
            }
        }
    }

    // ========================================================================
    // Livestock
    // ========================================================================

    pub fn add_livestock(&mut self, animal: Livestock) -> &Livestock {
        let id = animal.id();
        tracing::debug!(livestock_id = %id, name = animal.name.as_str(), "Adding livestock");
        self.livestock.insert(id, animal);
        &self.livestock[&id]
    }

    pub fn get_livestock(&self, id: EntityId) -> Option<&Livestock> {
        self.livestock.get(&id)
    }

    pub fn get_livestock_mut(&mut self, id: EntityId) -> Option<&mut Livestock> {
        self.livestock.get_mut(&id)
    }

    pub fn all_livestock(&self) -> Vec<Livestock> {
        self.livestock.values().cloned().collect()
    }

    pub fn livestock_by_type(&self, animal_type: AnimalType) -> Vec<Livestock> {
        self.livestock
            .values()
            .filter(|l| l.animal_type == animal_type)
            .cloned()
            .collect()
    }

    pub fn livestock_by_health_status(&self, status: HealthStatus) -> Vec<Livestock> {
        self.livestock
            .values()
            .filter(|l| l.health_status == status)
            .cloned()
            .collect()
    }

    pub fn remove_livestock(&mut self, id: EntityId) -> bool {
        let removed = self.livestock.remove(&id).is_some();
        tracing::debug!(livestock_id = %id, removed, "Removing livestock");
        removed
    }

    pub fn update_livestock_health(
        &mut self,
        id: EntityId,
        status: HealthStatus,
    ) -> Option<&Livestock> {
        match self.livestock.get_mut(&id) {
            Some(animal) => {
                tracing::debug!(livestock_id = %id, to = %status, "Updating livestock health");
                animal.health_status = status;
                Some(&*animal)
            }
            None => {
                tracing::debug!(livestock_id = %id, "Livestock not found, health unchanged");
                None
            }
        }
    }

    // ========================================================================
    // Fields
    // ========================================================================

    pub fn add_field(&mut self, field: Field) -> &Field {
        let id = field.id();
        tracing::debug!(field_id = %id, name = field.name.as_str(), "Adding field");
        self.fields.insert(id, field);
        &self.fields[&id]
    }

    pub fn get_field(&self, id: EntityId) -> Option<&Field> {
        self.fields.get(&id)
    }

    pub fn get_field_mut(&mut self, id: EntityId) -> Option<&mut Field> {
        self.fields.get_mut(&id)
    }

    pub fn all_fields(&self) -> Vec<Field> {
        self.fields.values().cloned().collect()
    }

    pub fn available_fields(&self) -> Vec<Field> {
        self.fields
            .values()
            .filter(|f| f.status == FieldStatus::Available)
            .cloned()
            .collect()
    }

    /// Remove a field. Crops planted in it keep their field reference.
    pub fn remove_field(&mut self, id: EntityId) -> bool {
        let removed = self.fields.remove(&id).is_some();
        tracing::debug!(field_id = %id, removed, "Removing field");
        removed
    }

    /// Plant a crop in a field, linking both sides.
    ///
    /// Does nothing unless both ids exist. The field's current status is
    /// not checked, so a field can hold several crops. Returns whether the
    /// link was made.
    pub fn plant_crop_in_field(&mut self, field_id: EntityId, crop_id: EntityId) -> bool {
        let (Some(field), Some(crop)) = (self.fields.get_mut(&field_id), self.crops.get_mut(&crop_id))
        else {
            tracing::debug!(%field_id, %crop_id, "Field or crop not found, nothing planted");
            return false;
        };

        field.add_crop_id(crop_id);
        crop.field_id = Some(field_id);
        tracing::info!(%field_id, %crop_id, crops_in_field = field.crop_ids().len(), "Crop planted in field");
        true
    }

    // ========================================================================
    // Harvests
    // ========================================================================

    /// Record a harvest and mark its crop as harvested.
    ///
    /// The crop's previous status is ignored. If the crop id is unknown the
    /// harvest is still stored.
    pub fn add_harvest(&mut self, harvest: Harvest) -> &Harvest {
        let id = harvest.id();
        let crop_id = harvest.crop_id;

        match self.crops.get_mut(&crop_id) {
            Some(crop) => {
                tracing::info!(harvest_id = %id, %crop_id, previous = %crop.status, "Harvest recorded, crop marked harvested");
                crop.status = CropStatus::Harvested;
            }
            None => {
                tracing::debug!(harvest_id = %id, %crop_id, "Harvest recorded for unknown crop");
            }
        }

        self.harvests.insert(id, harvest);
        &self.harvests[&id]
    }

    pub fn get_harvest(&self, id: EntityId) -> Option<&Harvest> {
        self.harvests.get(&id)
    }

    pub fn get_harvest_mut(&mut self, id: EntityId) -> Option<&mut Harvest> {
        self.harvests.get_mut(&id)
    }

    pub fn all_harvests(&self) -> Vec<Harvest> {
        self.harvests.values().cloned().collect()
    }

    pub fn harvests_by_crop(&self, crop_id: EntityId) -> Vec<Harvest> {
        self.harvests
            .values()
            .filter(|h| h.crop_id == crop_id)
            .cloned()
            .collect()
    }

    /// Remove a harvest record. The crop keeps its status.
    pub fn remove_harvest(&mut self, id: EntityId) -> bool {
        let removed = self.harvests.remove(&id).is_some();
        tracing::debug!(harvest_id = %id, removed, "Removing harvest");
        removed
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    pub fn add_inventory_item(&mut self, item: InventoryItem) -> &InventoryItem {
        let id = item.id();
        tracing::debug!(item_id = %id, name = item.name.as_str(), "Adding inventory item");
        self.inventory.insert(id, item);
        &self.inventory[&id]
    }

    pub fn get_inventory_item(&self, id: EntityId) -> Option<&InventoryItem> {
        self.inventory.get(&id)
    }

    pub fn get_inventory_item_mut(&mut self, id: EntityId) -> Option<&mut InventoryItem> {
        self.inventory.get_mut(&id)
    }

    pub fn all_inventory(&self) -> Vec<InventoryItem> {
        self.inventory.values().cloned().collect()
    }

    pub fn inventory_by_category(&self, category: ItemCategory) -> Vec<InventoryItem> {
        self.inventory
            .values()
            .filter(|i| i.category == category)
            .cloned()
            .collect()
    }

    /// Items at or below their minimum stock level right now
    pub fn low_stock_items(&self) -> Vec<InventoryItem> {
        self.inventory
            .values()
            .filter(|i| i.is_low_stock())
            .cloned()
            .collect()
    }

    pub fn remove_inventory_item(&mut self, id: EntityId) -> bool {
        let removed = self.inventory.remove(&id).is_some();
        tracing::debug!(item_id = %id, removed, "Removing inventory item");
        removed
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Compute rollup statistics from the current records. Acreage totals
    /// saturate at the `Decimal` bounds.
    pub fn statistics(&self) -> FarmStatistics {
        let total_field_acreage = self
            .fields
            .values()
            .fold(Decimal::ZERO, |total, f| total.saturating_add(f.size_acres));
        let actively_planted_acreage = self
            .crops
            .values()
            .filter(|c| c.status.is_active())
            .fold(Decimal::ZERO, |total, c| total.saturating_add(c.area_acres));
        let low_stock_item_count = self.inventory.values().filter(|i| i.is_low_stock()).count();

        FarmStatistics {
            total_crops: self.crops.len(),
            total_livestock: self.livestock.len(),
            total_fields: self.fields.len(),
            total_harvests: self.harvests.len(),
            total_inventory_items: self.inventory.len(),
            total_field_acreage,
            actively_planted_acreage,
            low_stock_item_count,
        }
    }
}
