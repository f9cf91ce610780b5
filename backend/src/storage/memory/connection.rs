use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use log::{debug, info};
use shared::{Customer, Driver, DriverSalary, Order, Plan, Transaction};
use std::sync::RwLock;

use crate::storage::fixtures;

/// Entities that are addressed by a unique, immutable identifier
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Plan {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Customer {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Driver {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

/// In-memory holder for every collection the dashboard works with.
///
/// Nothing is ever written to disk; state lives as long as the connection.
pub struct MemoryConnection {
    plans: RwLock<Vec<Plan>>,
    customers: RwLock<Vec<Customer>>,
    drivers: RwLock<Vec<Driver>>,
    orders: RwLock<Vec<Order>>,
    transactions: RwLock<Vec<Transaction>>,
    salaries: RwLock<Vec<DriverSalary>>,
}

impl MemoryConnection {
    /// Create a connection with every collection empty
    pub fn empty() -> Self {
        Self {
            plans: RwLock::new(Vec::new()),
            customers: RwLock::new(Vec::new()),
            drivers: RwLock::new(Vec::new()),
            orders: RwLock::new(Vec::new()),
            transactions: RwLock::new(Vec::new()),
            salaries: RwLock::new(Vec::new()),
        }
    }

    /// Create a connection seeded from the static fixtures.
    /// Orders are stamped with `today`.
    pub fn seeded(today: NaiveDate) -> Self {
        let connection = Self {
            plans: RwLock::new(fixtures::plans()),
            customers: RwLock::new(fixtures::customers()),
            drivers: RwLock::new(fixtures::drivers()),
            orders: RwLock::new(fixtures::orders(today)),
            transactions: RwLock::new(fixtures::transactions()),
            salaries: RwLock::new(fixtures::salaries()),
        };
        info!("Seeded in-memory store from fixtures (orders dated {})", today);
        connection
    }

    pub fn plans(&self) -> &RwLock<Vec<Plan>> {
        &self.plans
    }

    pub fn customers(&self) -> &RwLock<Vec<Customer>> {
        &self.customers
    }

    pub fn drivers(&self) -> &RwLock<Vec<Driver>> {
        &self.drivers
    }

    pub fn orders(&self) -> &RwLock<Vec<Order>> {
        &self.orders
    }

    pub fn transactions(&self) -> &RwLock<Vec<Transaction>> {
        &self.transactions
    }

    pub fn salaries(&self) -> &RwLock<Vec<DriverSalary>> {
        &self.salaries
    }
}

/// Run `f` against a read guard of a collection
pub fn read_collection<T, R>(
    lock: &RwLock<Vec<T>>,
    collection: &str,
    f: impl FnOnce(&[T]) -> R,
) -> Result<R> {
    let guard = lock
        .read()
        .map_err(|_| anyhow!("{} store lock poisoned", collection))?;
    Ok(f(&guard))
}

/// Run `f` against a write guard of a collection
pub fn write_collection<T, R>(
    lock: &RwLock<Vec<T>>,
    collection: &str,
    f: impl FnOnce(&mut Vec<T>) -> R,
) -> Result<R> {
    let mut guard = lock
        .write()
        .map_err(|_| anyhow!("{} store lock poisoned", collection))?;
    Ok(f(&mut guard))
}

pub fn find_by_id<T: Identified + Clone>(items: &[T], id: &str) -> Option<T> {
    items.iter().find(|item| item.id() == id).cloned()
}

/// Append `item`, failing if its identifier is already present
pub fn append_unique<T: Identified + Clone>(items: &mut Vec<T>, item: &T, collection: &str) -> Result<()> {
    if items.iter().any(|existing| existing.id() == item.id()) {
        return Err(anyhow!("Duplicate {} id: {}", collection, item.id()));
    }
    items.push(item.clone());
    debug!("Appended {} {} ({} total)", collection, item.id(), items.len());
    Ok(())
}

/// Replace the element with the same identifier, keeping its position
pub fn replace_in_place<T: Identified + Clone>(items: &mut [T], item: &T, collection: &str) -> Result<()> {
    let slot = items
        .iter_mut()
        .find(|existing| existing.id() == item.id())
        .ok_or_else(|| anyhow!("{} not found: {}", collection, item.id()))?;
    *slot = item.clone();
    debug!("Replaced {} {}", collection, item.id());
    Ok(())
}

/// Remove the element with `id`, preserving the relative order of the rest.
/// Returns whether anything was removed.
pub fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(plans: &[Plan]) -> Vec<&str> {
        plans.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_seeded_connection_has_fixture_counts() {
        let today = NaiveDate::from_ymd_opt(2023, 11, 15).unwrap();
        let conn = MemoryConnection::seeded(today);

        assert_eq!(read_collection(conn.plans(), "plan", |p| p.len()).unwrap(), 3);
        assert_eq!(read_collection(conn.customers(), "customer", |c| c.len()).unwrap(), 4);
        assert_eq!(read_collection(conn.drivers(), "driver", |d| d.len()).unwrap(), 3);
        assert_eq!(read_collection(conn.orders(), "order", |o| o.len()).unwrap(), 3);
        assert_eq!(read_collection(conn.transactions(), "transaction", |t| t.len()).unwrap(), 3);
        assert_eq!(read_collection(conn.salaries(), "salary", |s| s.len()).unwrap(), 2);
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut plans = fixtures::plans();
        let duplicate = plans[0].clone();

        assert!(append_unique(&mut plans, &duplicate, "plan").is_err());
        assert_eq!(plans.len(), 3);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut plans = fixtures::plans();
        let mut edited = plans[1].clone();
        edited.name = "Renamed".to_string();

        replace_in_place(&mut plans, &edited, "plan").unwrap();

        assert_eq!(ids(&plans), vec!["P001", "P002", "P003"]);
        assert_eq!(plans[1].name, "Renamed");
    }

    #[test]
    fn test_replace_missing_id_fails() {
        let mut plans = fixtures::plans();
        let mut ghost = plans[0].clone();
        ghost.id = "P999".to_string();

        assert!(replace_in_place(&mut plans, &ghost, "plan").is_err());
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut plans = fixtures::plans();

        assert!(remove_by_id(&mut plans, "P002"));
        assert_eq!(ids(&plans), vec!["P001", "P003"]);
        assert!(!remove_by_id(&mut plans, "P002"));
    }
}
