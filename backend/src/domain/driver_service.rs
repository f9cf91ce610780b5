use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use shared::{AttendanceSummary, Driver, DriverCard};
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::commands::driver::{
    DeleteDriverCommand, DeleteDriverResult, DriverFields, SaveDriverCommand, SaveDriverResult,
};
use crate::domain::commands::SaveOutcome;
use crate::domain::id_generator::{generate_entity_id, DRIVER_ID_PREFIX};
use crate::domain::listing;
use crate::storage::memory::MemoryConnection;
use crate::storage::traits::DriverStorage;
use crate::storage::DriverRepository;

/// Service for managing delivery drivers
#[derive(Clone)]
pub struct DriverService {
    driver_repository: DriverRepository,
    clock: Arc<dyn Clock>,
}

impl DriverService {
    pub fn new(connection: Arc<MemoryConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            driver_repository: DriverRepository::new(connection),
            clock,
        }
    }

    pub fn list_drivers(&self) -> Result<Vec<Driver>> {
        self.driver_repository.list_drivers()
    }

    pub fn get_driver(&self, driver_id: &str) -> Result<Option<Driver>> {
        self.driver_repository.get_driver(driver_id)
    }

    pub fn driver_cards(&self) -> Result<Vec<DriverCard>> {
        let drivers = self.driver_repository.list_drivers()?;
        Ok(listing::driver_cards(&drivers))
    }

    pub fn save_driver(&self, command: SaveDriverCommand) -> Result<SaveDriverResult> {
        match command.driver_id {
            Some(driver_id) => self.update_driver(&driver_id, command.fields),
            None => self.create_driver(command.fields),
        }
    }

    fn create_driver(&self, fields: DriverFields) -> Result<SaveDriverResult> {
        let existing = self.driver_repository.list_drivers()?;
        let id = generate_entity_id(DRIVER_ID_PREFIX, self.clock.timestamp_millis(), |candidate| {
            existing.iter().any(|driver| driver.id == candidate)
        });

        let driver = Driver {
            id,
            name: fields.name,
            phone: fields.phone,
            vehicle_no: fields.vehicle_no,
            assigned_area: fields.assigned_area,
            is_active: true,
            attendance: AttendanceSummary::default(),
            attendance_log: Vec::new(),
        };
        self.driver_repository
            .store_driver(&driver)
            .with_context(|| format!("Failed to store driver {}", driver.id))?;

        info!("Created driver: {} with ID: {}", driver.name, driver.id);
        Ok(SaveDriverResult {
            success_message: format!("Driver '{}' added", driver.name),
            driver,
            outcome: SaveOutcome::Created,
        })
    }

    /// Overwrite the form fields only. The active flag, attendance summary and
    /// attendance log carry over verbatim.
    fn update_driver(&self, driver_id: &str, fields: DriverFields) -> Result<SaveDriverResult> {
        let mut driver = self
            .driver_repository
            .get_driver(driver_id)?
            .ok_or_else(|| anyhow!("Driver not found: {}", driver_id))?;

        driver.name = fields.name;
        driver.phone = fields.phone;
        driver.vehicle_no = fields.vehicle_no;
        driver.assigned_area = fields.assigned_area;

        self.driver_repository
            .update_driver(&driver)
            .with_context(|| format!("Failed to update driver {}", driver.id))?;

        info!("Updated driver: {} with ID: {}", driver.name, driver.id);
        Ok(SaveDriverResult {
            success_message: format!("Driver '{}' updated", driver.name),
            driver,
            outcome: SaveOutcome::Updated,
        })
    }

    /// Remove a driver. Orders assigned to them keep the now dangling id.
    pub fn delete_driver(&self, command: DeleteDriverCommand) -> Result<DeleteDriverResult> {
        info!("Deleting driver: {}", command.driver_id);

        let deleted = self.driver_repository.delete_driver(&command.driver_id)?;
        let success_message = if deleted {
            format!("Driver {} deleted", command.driver_id)
        } else {
            warn!("Driver not found for deletion: {}", command.driver_id);
            format!("Driver {} was already removed", command.driver_id)
        };

        Ok(DeleteDriverResult { deleted, success_message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{test_today, TestHelper};
    use crate::storage::traits::OrderStorage;
    use shared::{AttendanceRecord, AttendanceStatus, DisplayConfig, Zone};

    fn fields(name: &str) -> DriverFields {
        DriverFields {
            name: name.to_string(),
            phone: "9111122223".to_string(),
            vehicle_no: "TS10 AB 4321".to_string(),
            assigned_area: Zone::Manikonda,
        }
    }

    #[test]
    fn test_create_driver_defaults() {
        let helper = TestHelper::new();
        let result = helper
            .backend
            .driver_service
            .save_driver(SaveDriverCommand { driver_id: None, fields: fields("Suresh") })
            .unwrap();

        assert_eq!(result.outcome, SaveOutcome::Created);
        assert!(result.driver.id.starts_with('D'));
        assert!(result.driver.is_active);
        assert_eq!(result.driver.attendance, AttendanceSummary::default());
        assert!(result.driver.attendance_log.is_empty());
        assert_eq!(helper.backend.driver_service.list_drivers().unwrap().len(), 4);
    }

    #[test]
    fn test_edit_driver_preserves_attendance_and_active_flag() {
        let helper = TestHelper::new();
        let mut d003 = helper.driver_repo.get_driver("D003").unwrap().unwrap();
        d003.is_active = false;
        d003.attendance_log.push(AttendanceRecord {
            date: test_today(),
            status: AttendanceStatus::Present,
        });
        helper.driver_repo.update_driver(&d003).unwrap();

        helper
            .backend
            .driver_service
            .save_driver(SaveDriverCommand {
                driver_id: Some("D003".to_string()),
                fields: fields("Krishna M."),
            })
            .unwrap();

        let drivers = helper.backend.driver_service.list_drivers().unwrap();
        assert_eq!(drivers.len(), 3);
        assert_eq!(drivers[2].id, "D003");
        assert_eq!(drivers[2].name, "Krishna M.");
        assert_eq!(drivers[2].assigned_area, Zone::Manikonda);
        assert!(!drivers[2].is_active);
        assert_eq!(drivers[2].attendance, AttendanceSummary { present: 20, total_days: 24 });
        assert_eq!(drivers[2].attendance_log.len(), 1);
    }

    #[test]
    fn test_delete_driver_leaves_dangling_order_reference() {
        let helper = TestHelper::new();

        let result = helper
            .backend
            .driver_service
            .delete_driver(DeleteDriverCommand { driver_id: "D002".to_string() })
            .unwrap();
        assert!(result.deleted);

        let order = helper.order_repo.get_order("ORD-002").unwrap().unwrap();
        assert_eq!(order.driver_id.as_deref(), Some("D002"));

        let rows = helper
            .backend
            .order_service
            .order_rows(&Default::default(), &DisplayConfig::default())
            .unwrap();
        assert_eq!(rows[1].driver_label, "Unknown Driver");
    }

    #[test]
    fn test_driver_cards() {
        let helper = TestHelper::new();
        let cards = helper.backend.driver_service.driver_cards().unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].attendance_label, "24/24 Days");
    }
}
