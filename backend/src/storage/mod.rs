//! # Storage Module
//!
//! Holds every collection of the dashboard in memory, seeded from fixtures at
//! startup. There is no persistence: all state vanishes when the process exits.
//!
//! - `traits`: storage interfaces used by the domain layer
//! - `memory`: `RwLock`-guarded collections and one repository per entity
//! - `fixtures`: the static seed data

pub mod fixtures;
pub mod memory;
pub mod traits;

pub use memory::{
    CustomerRepository, DriverRepository, FinanceRepository, MemoryConnection, OrderRepository,
    PlanRepository,
};
