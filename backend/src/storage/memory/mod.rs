//! # In-Memory Storage
//!
//! Repositories over a shared `MemoryConnection`. Each repository implements
//! the matching trait from `storage::traits`.

pub mod connection;
pub mod customer_repository;
pub mod driver_repository;
pub mod finance_repository;
pub mod order_repository;
pub mod plan_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::{Identified, MemoryConnection};
pub use customer_repository::CustomerRepository;
pub use driver_repository::DriverRepository;
pub use finance_repository::FinanceRepository;
pub use order_repository::OrderRepository;
pub use plan_repository::PlanRepository;
