use anyhow::Result;
use shared::{DriverSalary, Transaction};
use std::sync::Arc;

use super::connection::{read_collection, MemoryConnection};
use crate::storage::traits::FinanceStorage;

/// Read-only access to transaction and salary fixtures
#[derive(Clone)]
pub struct FinanceRepository {
    connection: Arc<MemoryConnection>,
}

impl FinanceRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl FinanceStorage for FinanceRepository {
    fn list_transactions(&self) -> Result<Vec<Transaction>> {
        read_collection(self.connection.transactions(), "Transaction", |txns| txns.to_vec())
    }

    fn list_salaries(&self) -> Result<Vec<DriverSalary>> {
        read_collection(self.connection.salaries(), "Salary", |salaries| salaries.to_vec())
    }
}
