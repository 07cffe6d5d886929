//! Text-menu front-end over the farm record service
//!
//! Reads one answer per line from any `BufRead` and writes prompts and
//! listings to any `Write`, so the same loop drives a terminal or a test
//! script. End of input is treated like choosing Exit.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;
use shared::validation::{parse_decimal, parse_selection, validate_non_empty, validate_non_negative};
use shared::{variant_list, ParseEnumError};

use crate::config::ConsoleConfig;
use crate::error::{AppError, AppResult};
use crate::models::{
    AnimalType, Crop, CropStatus, Farm, Field, Gender, Harvest, HealthStatus, InventoryItem,
    ItemCategory, Livestock, QualityGrade, SoilType,
};
use crate::services::FarmService;

const BANNER: &str = "\
╔════════════════════════════════════════════════════════════╗
║         FARM RECORDS                                       ║
║         Manage your farm efficiently!                      ║
╚════════════════════════════════════════════════════════════╝
";

const MAIN_MENU: &str = "
╔═══════════════════════════════════════╗
║            MAIN MENU                  ║
╠═══════════════════════════════════════╣
║  1. Crop Management                   ║
║  2. Livestock Management              ║
║  3. Field Management                  ║
║  4. Inventory Management              ║
║  5. Harvest Records                   ║
║  6. View Farm Statistics              ║
║  7. View Farm Info                    ║
║  0. Exit                              ║
╚═══════════════════════════════════════╝";

/// Interactive console session bound to one record service
pub struct Console<'a, R, W> {
    service: &'a mut FarmService,
    input: R,
    output: W,
    config: ConsoleConfig,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(service: &'a mut FarmService, input: R, output: W, config: ConsoleConfig) -> Self {
        Self {
            service,
            input,
            output,
            config,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> AppResult<()> {
        match self.run_menus() {
            Err(AppError::InputClosed) => {
                tracing::info!("Input closed, leaving console");
                writeln!(self.output)?;
                Ok(())
            }
            other => other,
        }
    }

    fn run_menus(&mut self) -> AppResult<()> {
        if self.config.show_banner {
            writeln!(self.output, "{}", BANNER)?;
        }
        if self.config.setup_farm && self.service.farm().is_none() {
            self.setup_farm()?;
        }

        loop {
            writeln!(self.output, "{}", MAIN_MENU)?;
            match self.read_int("Enter your choice: ")? {
                1 => self.crop_menu()?,
                2 => self.livestock_menu()?,
                3 => self.field_menu()?,
                4 => self.inventory_menu()?,
                5 => self.harvest_menu()?,
                6 => writeln!(self.output, "\n{}", self.service.statistics())?,
                7 => self.view_farm_info()?,
                0 => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        writeln!(self.output, "\nThank you for using Farm Records. Goodbye!")?;
        Ok(())
    }

    fn setup_farm(&mut self) -> AppResult<()> {
        writeln!(self.output, "Let's set up your farm first!\n")?;
        let name = self.read_required("Enter farm name: ")?;
        let owner = self.read_required("Enter owner name: ")?;
        let acreage = self.read_amount("Enter total farm acreage: ")?;

        let farm = Farm::new(name, owner, acreage);
        writeln!(self.output, "\nFarm created successfully!\n{}\n", farm)?;
        self.service.set_farm(farm);
        Ok(())
    }

    fn view_farm_info(&mut self) -> AppResult<()> {
        match self.service.farm() {
            Some(farm) => writeln!(self.output, "\n--- FARM INFORMATION ---\n{}", farm)?,
            None => writeln!(self.output, "No farm configured.")?,
        }
        Ok(())
    }

    // ========================================================================
    // Crops
    // ========================================================================

    fn crop_menu(&mut self) -> AppResult<()> {
        loop {
            writeln!(
                self.output,
                "\n--- CROP MANAGEMENT ---\n\
                 1. Add New Crop\n\
                 2. View All Crops\n\
                 3. Update Crop Status\n\
                 4. Remove Crop\n\
                 0. Back to Main Menu"
            )?;
            match self.read_int("Enter your choice: ")? {
                1 => self.add_crop()?,
                2 => {
                    let crops = self.sorted_crops();
                    self.print_list("ALL CROPS", &crops, "No crops registered.")?;
                }
                3 => self.update_crop_status()?,
                4 => self.remove_crop()?,
                0 => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_crop(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- ADD NEW CROP ---")?;
        let name = self.read_required("Crop name: ")?;
        let variety = self.read_line("Variety: ")?;
        let area = self.read_amount("Area (acres): ")?;

        let mut crop = Crop::new(name, variety, area);
        let yield_input = self.read_line("Expected yield per acre (optional, press Enter to skip): ")?;
        if let Ok(yield_per_acre) = parse_decimal(&yield_input) {
            crop.expected_yield_per_acre = yield_per_acre;
        }

        let crop = self.service.add_crop(crop);
        writeln!(self.output, "Crop added successfully!\n{}", crop)?;
        Ok(())
    }

    fn update_crop_status(&mut self) -> AppResult<()> {
        let crops = self.sorted_crops();
        let Some(index) = self.pick("ALL CROPS", &crops, "No crops registered.", "Select crop number to update: ")?
        else {
            return Ok(());
        };

        let options = format!("Status options: {}", variant_list(&CropStatus::ALL));
        if let Some(status) = self.read_enum::<CropStatus>(&options, "Enter new status: ")? {
            self.service.update_crop_status(crops[index].id(), status);
            writeln!(self.output, "Status updated successfully!")?;
        }
        Ok(())
    }

    fn remove_crop(&mut self) -> AppResult<()> {
        let crops = self.sorted_crops();
        if let Some(index) = self.pick("ALL CROPS", &crops, "No crops registered.", "Select crop number to remove: ")? {
            self.service.remove_crop(crops[index].id());
            writeln!(self.output, "Crop removed successfully!")?;
        }
        Ok(())
    }

    fn sorted_crops(&self) -> Vec<Crop> {
        let mut crops = self.service.all_crops();
        crops.sort_by(|a, b| a.name.cmp(&b.name));
        crops
    }

    // ========================================================================
    // Livestock
    // ========================================================================

    fn livestock_menu(&mut self) -> AppResult<()> {
        loop {
            writeln!(
                self.output,
                "\n--- LIVESTOCK MANAGEMENT ---\n\
                 1. Add New Animal\n\
                 2. View All Livestock\n\
                 3. View by Type\n\
                 4. Update Health Status\n\
                 5. Remove Animal\n\
                 6. View by Health Status\n\
                 0. Back to Main Menu"
            )?;
            match self.read_int("Enter your choice: ")? {
                1 => self.add_livestock()?,
                2 => {
                    let animals = self.sorted_livestock();
                    self.print_list("ALL LIVESTOCK", &animals, "No livestock registered.")?;
                }
                3 => self.view_livestock_by_type()?,
                4 => self.update_livestock_health()?,
                5 => self.remove_livestock()?,
                6 => self.view_livestock_by_health()?,
                0 => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_livestock(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- ADD NEW ANIMAL ---")?;
        let name = self.read_required("Animal name/tag: ")?;
        let animal_type = self.read_enum_or(
            &format!("Animal types: {}", variant_list(&AnimalType::ALL)),
            "Animal type: ",
            AnimalType::Other,
        )?;
        let breed = self.read_line("Breed: ")?;
        let gender = self.read_enum_or(
            &format!("Gender: {}", variant_list(&Gender::ALL)),
            "Gender: ",
            Gender::Female,
        )?;

        let animal = self
            .service
            .add_livestock(Livestock::new(name, animal_type, breed, gender));
        writeln!(self.output, "Animal added successfully!\n{}", animal)?;
        Ok(())
    }

    fn view_livestock_by_type(&mut self) -> AppResult<()> {
        let options = format!("Animal types: {}", variant_list(&AnimalType::ALL));
        if let Some(animal_type) = self.read_enum::<AnimalType>(&options, "Enter type to filter: ")? {
            let animals = self.service.livestock_by_type(animal_type);
            self.print_items(&animal_type.to_string(), &animals, "No animals of this type.")?;
        }
        Ok(())
    }

    fn view_livestock_by_health(&mut self) -> AppResult<()> {
        let options = format!("Health status: {}", variant_list(&HealthStatus::ALL));
        if let Some(status) = self.read_enum::<HealthStatus>(&options, "Enter health status to filter: ")? {
            let animals = self.service.livestock_by_health_status(status);
            self.print_items(&status.to_string(), &animals, "No animals with this health status.")?;
        }
        Ok(())
    }

    fn update_livestock_health(&mut self) -> AppResult<()> {
        let animals = self.sorted_livestock();
        let Some(index) = self.pick(
            "ALL LIVESTOCK",
            &animals,
            "No livestock registered.",
            "Select animal number to update: ",
        )?
        else {
            return Ok(());
        };

        let options = format!("Health status: {}", variant_list(&HealthStatus::ALL));
        if let Some(status) = self.read_enum::<HealthStatus>(&options, "Enter new health status: ")? {
            self.service.update_livestock_health(animals[index].id(), status);
            writeln!(self.output, "Health status updated successfully!")?;
        }
        Ok(())
    }

    fn remove_livestock(&mut self) -> AppResult<()> {
        let animals = self.sorted_livestock();
        if let Some(index) = self.pick(
            "ALL LIVESTOCK",
            &animals,
            "No livestock registered.",
            "Select animal number to remove: ",
        )? {
            self.service.remove_livestock(animals[index].id());
            writeln!(self.output, "Animal removed successfully!")?;
        }
        Ok(())
    }

    fn sorted_livestock(&self) -> Vec<Livestock> {
        let mut animals = self.service.all_livestock();
        animals.sort_by(|a, b| a.name.cmp(&b.name));
        animals
    }

    // ========================================================================
    // Fields
    // ========================================================================

    fn field_menu(&mut self) -> AppResult<()> {
        loop {
            writeln!(
                self.output,
                "\n--- FIELD MANAGEMENT ---\n\
                 1. Add New Field\n\
                 2. View All Fields\n\
                 3. View Available Fields\n\
                 4. Plant Crop in Field\n\
                 5. Remove Field\n\
                 0. Back to Main Menu"
            )?;
            match self.read_int("Enter your choice: ")? {
                1 => self.add_field()?,
                2 => {
                    let fields = self.sorted_fields();
                    self.print_list("ALL FIELDS", &fields, "No fields registered.")?;
                }
                3 => {
                    let fields = self.service.available_fields();
                    self.print_items("AVAILABLE FIELDS", &fields, "No available fields.")?;
                }
                4 => self.plant_crop_in_field()?,
                5 => self.remove_field()?,
                0 => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_field(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- ADD NEW FIELD ---")?;
        let name = self.read_required("Field name: ")?;
        let size = self.read_amount("Size (acres): ")?;
        let soil_type = self.read_enum_or(
            &format!("Soil types: {}", variant_list(&SoilType::ALL)),
            "Soil type: ",
            SoilType::Loamy,
        )?;

        let field = self.service.add_field(Field::new(name, size, soil_type));
        writeln!(self.output, "Field added successfully!\n{}", field)?;
        Ok(())
    }

    fn plant_crop_in_field(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- PLANT CROP IN FIELD ---")?;
        let mut fields = self.service.available_fields();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        let mut crops = self.service.crops_by_status(CropStatus::Planted);
        crops.sort_by(|a, b| a.name.cmp(&b.name));

        if fields.is_empty() {
            writeln!(self.output, "No available fields.")?;
            return Ok(());
        }
        if crops.is_empty() {
            writeln!(self.output, "No crops available for planting.")?;
            return Ok(());
        }

        let Some(field_index) = self.pick("Available Fields", &fields, "", "Select field: ")? else {
            return Ok(());
        };
        let Some(crop_index) = self.pick("Available Crops", &crops, "", "Select crop: ")? else {
            return Ok(());
        };

        self.service
            .plant_crop_in_field(fields[field_index].id(), crops[crop_index].id());
        writeln!(self.output, "Crop planted in field successfully!")?;
        Ok(())
    }

    fn remove_field(&mut self) -> AppResult<()> {
        let fields = self.sorted_fields();
        if let Some(index) = self.pick("ALL FIELDS", &fields, "No fields registered.", "Select field number to remove: ")? {
            self.service.remove_field(fields[index].id());
            writeln!(self.output, "Field removed successfully!")?;
        }
        Ok(())
    }

    fn sorted_fields(&self) -> Vec<Field> {
        let mut fields = self.service.all_fields();
        fields.sort_by(|a, b| a.name.cmp(&b.name));
        fields
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    fn inventory_menu(&mut self) -> AppResult<()> {
        loop {
            writeln!(
                self.output,
                "\n--- INVENTORY MANAGEMENT ---\n\
                 1. Add New Item\n\
                 2. View All Inventory\n\
                 3. View Low Stock Items\n\
                 4. Update Item Quantity\n\
                 5. Remove Item\n\
                 6. View by Category\n\
                 0. Back to Main Menu"
            )?;
            match self.read_int("Enter your choice: ")? {
                1 => self.add_inventory_item()?,
                2 => {
                    let items = self.sorted_inventory();
                    self.print_list("ALL INVENTORY", &items, "No inventory items.")?;
                }
                3 => {
                    let items = self.service.low_stock_items();
                    self.print_items(
                        "LOW STOCK ITEMS",
                        &items,
                        "No low stock items. Everything is well stocked!",
                    )?;
                }
                4 => self.update_item_quantity()?,
                5 => self.remove_inventory_item()?,
                6 => self.view_inventory_by_category()?,
                0 => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_inventory_item(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- ADD INVENTORY ITEM ---")?;
        let name = self.read_required("Item name: ")?;
        let category = self.read_enum_or(
            &format!("Categories: {}", variant_list(&ItemCategory::ALL)),
            "Category: ",
            ItemCategory::Other,
        )?;
        let quantity = self.read_amount("Quantity: ")?;
        let unit = self.read_line("Unit (e.g., kg, liters, bags): ")?;

        let mut item = InventoryItem::new(name, category, quantity, unit);
        item.minimum_stock = self.read_amount("Minimum stock level (for low stock alert): ")?;

        let item = self.service.add_inventory_item(item);
        writeln!(self.output, "Item added successfully!\n{}", item)?;
        Ok(())
    }

    fn update_item_quantity(&mut self) -> AppResult<()> {
        let items = self.sorted_inventory();
        let Some(index) = self.pick(
            "ALL INVENTORY",
            &items,
            "No inventory items.",
            "Select item number to update: ",
        )?
        else {
            return Ok(());
        };

        let item = &items[index];
        writeln!(self.output, "Current quantity: {:.2} {}", item.quantity, item.unit)?;
        let change = self.read_decimal("Enter quantity to add (negative to remove): ")?;

        if let Some(stored) = self.service.get_inventory_item_mut(item.id()) {
            stored.add_quantity(change);
            tracing::debug!(item_id = %stored.id(), %change, quantity = %stored.quantity, "Adjusted inventory quantity");
            writeln!(self.output, "New quantity: {:.2} {}", stored.quantity, stored.unit)?;
        }
        Ok(())
    }

    fn view_inventory_by_category(&mut self) -> AppResult<()> {
        let options = format!("Categories: {}", variant_list(&ItemCategory::ALL));
        if let Some(category) = self.read_enum::<ItemCategory>(&options, "Enter category to filter: ")? {
            let items = self.service.inventory_by_category(category);
            self.print_items(&category.to_string(), &items, "No items in this category.")?;
        }
        Ok(())
    }

    fn remove_inventory_item(&mut self) -> AppResult<()> {
        let items = self.sorted_inventory();
        if let Some(index) = self.pick("ALL INVENTORY", &items, "No inventory items.", "Select item number to remove: ")? {
            self.service.remove_inventory_item(items[index].id());
            writeln!(self.output, "Item removed successfully!")?;
        }
        Ok(())
    }

    fn sorted_inventory(&self) -> Vec<InventoryItem> {
        let mut items = self.service.all_inventory();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    // ========================================================================
    // Harvests
    // ========================================================================

    fn harvest_menu(&mut self) -> AppResult<()> {
        loop {
            writeln!(
                self.output,
                "\n--- HARVEST RECORDS ---\n\
                 1. Record New Harvest\n\
                 2. View All Harvests\n\
                 0. Back to Main Menu"
            )?;
            match self.read_int("Enter your choice: ")? {
                1 => self.record_harvest()?,
                2 => {
                    let mut harvests = self.service.all_harvests();
                    harvests.sort_by_key(|h| h.harvest_date);
                    self.print_items("ALL HARVESTS", &harvests, "No harvest records.")?;
                }
                0 => return Ok(()),
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn record_harvest(&mut self) -> AppResult<()> {
        writeln!(self.output, "\n--- RECORD HARVEST ---")?;
        let mut crops = self.service.crops_by_status(CropStatus::ReadyForHarvest);
        crops.sort_by(|a, b| a.name.cmp(&b.name));
        let mut growing = self.service.crops_by_status(CropStatus::Growing);
        growing.sort_by(|a, b| a.name.cmp(&b.name));
        crops.extend(growing);

        let Some(index) = self.pick(
            "Crops available for harvest",
            &crops,
            "No crops ready for harvest.",
            "Select crop: ",
        )?
        else {
            return Ok(());
        };

        let quantity = self.read_amount("Harvest quantity: ")?;
        let unit = self.read_line("Unit (e.g., kg, bushels, tons): ")?;
        let mut harvest = Harvest::new(crops[index].id(), quantity, unit);

        writeln!(self.output, "Quality grades: {}", variant_list(&QualityGrade::ALL))?;
        let grade_input = self.read_line("Quality grade: ")?;
        match QualityGrade::from_str(&grade_input) {
            Ok(grade) => harvest.quality = grade,
            Err(_) => writeln!(self.output, "Invalid grade, defaulting to {}.", harvest.quality)?,
        }

        let harvest = self.service.add_harvest(harvest);
        writeln!(self.output, "Harvest recorded successfully!\n{}", harvest)?;
        Ok(())
    }

    // ========================================================================
    // Input and listing helpers
    // ========================================================================

    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Menu choice; anything that is not a number reads as -1
    fn read_int(&mut self, prompt: &str) -> AppResult<i64> {
        Ok(self.read_line(prompt)?.parse().unwrap_or(-1))
    }

    /// Decimal amount; anything that is not a number reads as zero
    fn read_decimal(&mut self, prompt: &str) -> AppResult<Decimal> {
        Ok(parse_decimal(&self.read_line(prompt)?).unwrap_or(Decimal::ZERO))
    }

    /// Decimal amount that must not be negative, asked again until it is
    fn read_amount(&mut self, prompt: &str) -> AppResult<Decimal> {
        loop {
            let value = self.read_decimal(prompt)?;
            match validate_non_negative(value) {
                Ok(()) => return Ok(value),
                Err(message) => self.reject(prompt, message)?,
            }
        }
    }

    /// Non-blank text, asked again until it is
    fn read_required(&mut self, prompt: &str) -> AppResult<String> {
        loop {
            let value = self.read_line(prompt)?;
            match validate_non_empty(&value) {
                Ok(()) => return Ok(value),
                Err(message) => self.reject(prompt, message)?,
            }
        }
    }

    fn reject(&mut self, prompt: &str, message: &str) -> AppResult<()> {
        let err = AppError::validation(prompt.trim_end_matches([':', ' ']), message);
        tracing::debug!(code = err.code(), error = %err, "Rejected console input");
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Enumeration value, or `None` after telling the user it was invalid
    fn read_enum<T>(&mut self, options: &str, prompt: &str) -> AppResult<Option<T>>
    where
        T: FromStr<Err = ParseEnumError>,
    {
        writeln!(self.output, "{}", options)?;
        let input = self.read_line(prompt)?;
        match T::from_str(&input) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                writeln!(self.output, "Invalid {}.", e.kind)?;
                Ok(None)
            }
        }
    }

    /// Enumeration value, falling back to `default` on invalid input
    fn read_enum_or<T>(&mut self, options: &str, prompt: &str, default: T) -> AppResult<T>
    where
        T: FromStr<Err = ParseEnumError> + Display,
    {
        writeln!(self.output, "{}", options)?;
        let input = self.read_line(prompt)?;
        match T::from_str(&input) {
            Ok(value) => Ok(value),
            Err(e) => {
                writeln!(self.output, "Invalid {}, defaulting to {}.", e.kind, default)?;
                Ok(default)
            }
        }
    }

    fn print_list<T: Display>(&mut self, title: &str, items: &[T], empty: &str) -> AppResult<()> {
        writeln!(self.output, "\n--- {} ---", title)?;
        if items.is_empty() {
            writeln!(self.output, "{}", empty)?;
        }
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }

    fn print_items<T: Display>(&mut self, title: &str, items: &[T], empty: &str) -> AppResult<()> {
        writeln!(self.output, "\n--- {} ---", title)?;
        if items.is_empty() {
            writeln!(self.output, "{}", empty)?;
        }
        for item in items {
            writeln!(self.output, "{}", item)?;
        }
        Ok(())
    }

    /// List `items` numbered and ask for one. `None` when the list is empty
    /// or the selection is out of range.
    fn pick<T: Display>(
        &mut self,
        title: &str,
        items: &[T],
        empty: &str,
        prompt: &str,
    ) -> AppResult<Option<usize>> {
        self.print_list(title, items, empty)?;
        if items.is_empty() {
            return Ok(None);
        }
        let input = self.read_line(prompt)?;
        match parse_selection(&input, items.len()) {
            Ok(index) => Ok(Some(index)),
            Err(message) => {
                writeln!(self.output, "{}.", message)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldStatus;
    use std::io::Cursor;

    fn run_script(service: &mut FarmService, script: &str) -> String {
        let mut output = Vec::new();
        let config = ConsoleConfig {
            show_banner: false,
            setup_farm: true,
        };
        Console::new(service, Cursor::new(script.as_bytes()), &mut output, config)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_setup_farm_then_exit() {
        let mut service = FarmService::new();
        let output = run_script(&mut service, "Green Valley\nJohn Doe\n100\n0\n");

        let farm = service.farm().unwrap();
        assert_eq!(farm.name, "Green Valley");
        assert_eq!(farm.owner_name, "John Doe");
        assert_eq!(farm.total_acreage, Decimal::from(100));
        assert!(output.contains("Farm created successfully!"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_blank_name_and_negative_acreage_are_asked_again() {
        let mut service = FarmService::new();
        let output = run_script(&mut service, "\nGreen Valley\nJohn\n-5\n40\n0\n");

        assert!(output.contains("Value cannot be empty"));
        assert!(output.contains("Value cannot be negative"));
        assert_eq!(service.farm().unwrap().total_acreage, Decimal::from(40));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let mut service = FarmService::new();
        let output = run_script(&mut service, "Green Valley\n");
        assert!(service.farm().is_none());
        assert!(!output.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_main_menu_choice() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let output = run_script(&mut service, "abc\n9\n0\n");
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    }

    #[test]
    fn test_add_field_and_crop_then_plant() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::from(50)));
        let script = "\
3\n1\nNorth\n25\nloamy\n0\n\
1\n1\nWheat\nWinter Wheat\n10\n45\n0\n\
3\n4\n1\n1\n0\n\
6\n0\n";
        let output = run_script(&mut service, script);

        let fields = service.all_fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].status, FieldStatus::Planted);
        assert_eq!(fields[0].soil_type, SoilType::Loamy);

        let crops = service.all_crops();
        assert_eq!(crops.len(), 1);
        assert_eq!(crops[0].field_id, Some(fields[0].id()));
        assert_eq!(crops[0].expected_total_yield(), Decimal::from(450));

        assert!(output.contains("Crop planted in field successfully!"));
        assert!(output.contains("Total Fields: 1 (25.00 acres)"));
        assert!(output.contains("Actively Planted: 10.00 acres"));
    }

    #[test]
    fn test_statistics_with_huge_fields_does_not_crash() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let script = "3\n1\nNorth\n5e28\nclay\n1\nSouth\n5e28\nclay\n0\n6\n0\n";
        let output = run_script(&mut service, script);

        assert!(output.contains("Total Fields: 2"));
        assert_eq!(service.statistics().total_field_acreage, Decimal::MAX);
    }

    #[test]
    fn test_invalid_soil_defaults_to_loamy() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let output = run_script(&mut service, "3\n1\nSouth\n30\ngravel\n0\n0\n");

        assert!(output.contains("Invalid soil type, defaulting to LOAMY."));
        assert_eq!(service.all_fields()[0].soil_type, SoilType::Loamy);
    }

    #[test]
    fn test_record_harvest_for_growing_crop() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let crop_id = service
            .add_crop(Crop::new("Corn", "Sweet Corn", Decimal::from(15)))
            .id();
        service.update_crop_status(crop_id, CropStatus::Growing);

        let output = run_script(&mut service, "5\n1\n1\n500\nbushels\npremium\n2\n0\n0\n");

        assert!(output.contains("Harvest recorded successfully!"));
        assert_eq!(service.get_crop(crop_id).unwrap().status, CropStatus::Harvested);
        let harvests = service.harvests_by_crop(crop_id);
        assert_eq!(harvests.len(), 1);
        assert_eq!(harvests[0].quality, QualityGrade::Premium);
        assert_eq!(harvests[0].quantity, Decimal::from(500));
    }

    #[test]
    fn test_harvest_choices_sorted_by_name_within_status() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let mut ids = Vec::new();
        for (name, status) in [
            ("Wheat", CropStatus::ReadyForHarvest),
            ("Barley", CropStatus::Growing),
            ("Oats", CropStatus::ReadyForHarvest),
            ("Alfalfa", CropStatus::Growing),
        ] {
            let id = service.add_crop(Crop::new(name, "Common", Decimal::from(5))).id();
            service.update_crop_status(id, status);
            ids.push(id);
        }

        let output = run_script(&mut service, "5\n1\n2\n100\nkg\ngrade_a\n0\n0\n");

        let position = |name: &str| output.find(&format!("name='{}'", name)).unwrap();
        assert!(position("Oats") < position("Wheat"));
        assert!(position("Wheat") < position("Alfalfa"));
        assert!(position("Alfalfa") < position("Barley"));
        assert_eq!(service.get_crop(ids[0]).unwrap().status, CropStatus::Harvested);
        assert_eq!(service.get_crop(ids[2]).unwrap().status, CropStatus::ReadyForHarvest);
    }

    #[test]
    fn test_record_harvest_without_candidates() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        service.add_crop(Crop::new("Wheat", "Winter Wheat", Decimal::from(10)));

        let output = run_script(&mut service, "5\n1\n0\n0\n");
        assert!(output.contains("No crops ready for harvest."));
        assert!(service.all_harvests().is_empty());
    }

    #[test]
    fn test_inventory_adjustment_is_unguarded() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let script = "4\n1\nFeed\nfeed\n50\nkg\n20\n4\n1\n-70\n3\n0\n0\n";
        let output = run_script(&mut service, script);

        let items = service.all_inventory();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, ItemCategory::Feed);
        assert_eq!(items[0].quantity, Decimal::from(-20));
        assert!(items[0].is_low_stock());
        assert!(output.contains("New quantity: -20.00 kg"));
        assert!(output.contains("[LOW STOCK]"));
    }

    #[test]
    fn test_update_livestock_health_and_filter() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let script = "2\n1\nBessie\ncattle\nHolstein\nfemale\n4\n1\nsick\n6\nsick\n0\n0\n";
        let output = run_script(&mut service, script);

        let animals = service.livestock_by_health_status(HealthStatus::Sick);
        assert_eq!(animals.len(), 1);
        assert_eq!(animals[0].name, "Bessie");
        assert!(output.contains("Health status updated successfully!"));
        assert!(output.contains("--- SICK ---"));
    }

    #[test]
    fn test_out_of_range_selection() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        service.add_crop(Crop::new("Wheat", "Winter Wheat", Decimal::from(10)));

        let output = run_script(&mut service, "1\n4\n7\n0\n0\n");
        assert!(output.contains("Invalid selection."));
        assert_eq!(service.all_crops().len(), 1);
    }

    #[test]
    fn test_remove_crop_leaves_field_reference() {
        let mut service = FarmService::new();
        service.set_farm(Farm::new("Farm", "Owner", Decimal::ONE));
        let field_id = service
            .add_field(Field::new("North", Decimal::from(25), SoilType::Loamy))
            .id();
        let crop_id = service
            .add_crop(Crop::new("Wheat", "Winter Wheat", Decimal::from(10)))
            .id();
        service.plant_crop_in_field(field_id, crop_id);

        run_script(&mut service, "1\n4\n1\n0\n0\n");

        assert!(service.get_crop(crop_id).is_none());
        assert_eq!(service.get_field(field_id).unwrap().crop_ids(), &[crop_id]);
    }
}
