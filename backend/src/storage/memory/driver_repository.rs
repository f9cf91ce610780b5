use anyhow::Result;
use log::info;
use shared::Driver;
use std::sync::Arc;

use super::connection::{
    append_unique, find_by_id, read_collection, remove_by_id, replace_in_place, write_collection,
    MemoryConnection,
};
use crate::storage::traits::DriverStorage;

const COLLECTION: &str = "Driver";

/// In-memory driver repository
#[derive(Clone)]
pub struct DriverRepository {
    connection: Arc<MemoryConnection>,
}

impl DriverRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl DriverStorage for DriverRepository {
    fn list_drivers(&self) -> Result<Vec<Driver>> {
        read_collection(self.connection.drivers(), COLLECTION, |drivers| drivers.to_vec())
    }

    fn get_driver(&self, driver_id: &str) -> Result<Option<Driver>> {
        read_collection(self.connection.drivers(), COLLECTION, |drivers| find_by_id(drivers, driver_id))
    }

    fn store_driver(&self, driver: &Driver) -> Result<()> {
        write_collection(self.connection.drivers(), COLLECTION, |drivers| {
            append_unique(drivers, driver, COLLECTION)
        })??;
        info!("Stored driver {} ({})", driver.id, driver.name);
        Ok(())
    }

    fn update_driver(&self, driver: &Driver) -> Result<()> {
        write_collection(self.connection.drivers(), COLLECTION, |drivers| {
            replace_in_place(drivers, driver, COLLECTION)
        })??;
        info!("Updated driver {} ({})", driver.id, driver.name);
        Ok(())
    }

    fn delete_driver(&self, driver_id: &str) -> Result<bool> {
        write_collection(self.connection.drivers(), COLLECTION, |drivers| remove_by_id(drivers, driver_id))
    }
}
