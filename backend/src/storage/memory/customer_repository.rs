use anyhow::Result;
use log::info;
use shared::Customer;
use std::sync::Arc;

use super::connection::{
    append_unique, find_by_id, read_collection, remove_by_id, replace_in_place, write_collection,
    MemoryConnection,
};
use crate::storage::traits::CustomerStorage;

const COLLECTION: &str = "Customer";

/// In-memory customer repository
#[derive(Clone)]
pub struct CustomerRepository {
    connection: Arc<MemoryConnection>,
}

impl CustomerRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl CustomerStorage for CustomerRepository {
    fn list_customers(&self) -> Result<Vec<Customer>> {
        read_collection(self.connection.customers(), COLLECTION, |customers| customers.to_vec())
    }

    fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>> {
        read_collection(self.connection.customers(), COLLECTION, |customers| {
            find_by_id(customers, customer_id)
        })
    }

    fn store_customer(&self, customer: &Customer) -> Result<()> {
        write_collection(self.connection.customers(), COLLECTION, |customers| {
            append_unique(customers, customer, COLLECTION)
        })??;
        info!("Stored customer {} ({})", customer.id, customer.name);
        Ok(())
    }

    fn update_customer(&self, customer: &Customer) -> Result<()> {
        write_collection(self.connection.customers(), COLLECTION, |customers| {
            replace_in_place(customers, customer, COLLECTION)
        })??;
        info!("Updated customer {} ({})", customer.id, customer.name);
        Ok(())
    }

    fn delete_customer(&self, customer_id: &str) -> Result<bool> {
        write_collection(self.connection.customers(), COLLECTION, |customers| {
            remove_by_id(customers, customer_id)
        })
    }
}
