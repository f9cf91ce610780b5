//! # Storage Traits
//!
//! Storage abstractions the domain services are written against. The only
//! implementation is the in-memory store in `memory`, but services never touch
//! the collections directly.

use anyhow::Result;
use shared::{Customer, Driver, DriverSalary, Order, Plan, Transaction};

/// Plan collection operations
pub trait PlanStorage: Send + Sync {
    /// List plans in insertion order
    fn list_plans(&self) -> Result<Vec<Plan>>;

    fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>>;

    /// Append a new plan; fails if the id is already taken
    fn store_plan(&self, plan: &Plan) -> Result<()>;

    /// Replace the plan with the same id in place
    fn update_plan(&self, plan: &Plan) -> Result<()>;

    /// Returns true if a plan was removed
    fn delete_plan(&self, plan_id: &str) -> Result<bool>;
}

/// Customer collection operations
pub trait CustomerStorage: Send + Sync {
    fn list_customers(&self) -> Result<Vec<Customer>>;

    fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>>;

    fn store_customer(&self, customer: &Customer) -> Result<()>;

    fn update_customer(&self, customer: &Customer) -> Result<()>;

    fn delete_customer(&self, customer_id: &str) -> Result<bool>;
}

/// Driver collection operations
pub trait DriverStorage: Send + Sync {
    fn list_drivers(&self) -> Result<Vec<Driver>>;

    fn get_driver(&self, driver_id: &str) -> Result<Option<Driver>>;

    fn store_driver(&self, driver: &Driver) -> Result<()>;

    fn update_driver(&self, driver: &Driver) -> Result<()>;

    fn delete_driver(&self, driver_id: &str) -> Result<bool>;
}

/// Order collection operations. Orders are seeded only; there is no create or delete.
pub trait OrderStorage: Send + Sync {
    fn list_orders(&self) -> Result<Vec<Order>>;

    fn get_order(&self, order_id: &str) -> Result<Option<Order>>;

    fn update_order(&self, order: &Order) -> Result<()>;
}

/// Read-only finance records
pub trait FinanceStorage: Send + Sync {
    fn list_transactions(&self) -> Result<Vec<Transaction>>;

    fn list_salaries(&self) -> Result<Vec<DriverSalary>>;
}
