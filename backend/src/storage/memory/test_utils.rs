//! Test utilities shared by the storage and domain test modules
//!
//! Every helper starts from the default fixture set over a clock frozen at
//! 2023-11-15, so ids, order dates and attendance counts are deterministic.

use chrono::NaiveDate;
use std::sync::Arc;

use super::connection::MemoryConnection;
use super::{CustomerRepository, DriverRepository, FinanceRepository, OrderRepository, PlanRepository};
use crate::domain::clock::{Clock, FixedClock};
use crate::Backend;

/// Millisecond timestamp the fixed test clock reports
pub const TEST_TIMESTAMP_MILLIS: i64 = 1_700_000_000_000;

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 11, 15).unwrap()
}

pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(test_today(), TEST_TIMESTAMP_MILLIS))
}

/// Seeded connection plus its clock
pub struct TestEnvironment {
    pub connection: Arc<MemoryConnection>,
    pub clock: Arc<FixedClock>,
}

impl TestEnvironment {
    pub fn seeded() -> Self {
        let clock = fixed_clock();
        let connection = Arc::new(MemoryConnection::seeded(clock.today()));
        Self { connection, clock }
    }

    pub fn empty() -> Self {
        Self {
            connection: Arc::new(MemoryConnection::empty()),
            clock: fixed_clock(),
        }
    }
}

/// Test helper exposing repositories and a fully wired backend over one environment
pub struct TestHelper {
    pub env: TestEnvironment,
    pub backend: Backend,
    pub plan_repo: PlanRepository,
    pub customer_repo: CustomerRepository,
    pub driver_repo: DriverRepository,
    pub order_repo: OrderRepository,
    pub finance_repo: FinanceRepository,
}

impl TestHelper {
    /// Helper over the default fixture set
    pub fn new() -> Self {
        Self::from_env(TestEnvironment::seeded())
    }

    /// Helper over empty collections
    pub fn empty() -> Self {
        Self::from_env(TestEnvironment::empty())
    }

    fn from_env(env: TestEnvironment) -> Self {
        let clock: Arc<dyn Clock> = env.clock.clone();
        let backend = Backend::with_connection(env.connection.clone(), clock);
        Self {
            plan_repo: PlanRepository::new(env.connection.clone()),
            customer_repo: CustomerRepository::new(env.connection.clone()),
            driver_repo: DriverRepository::new(env.connection.clone()),
            order_repo: OrderRepository::new(env.connection.clone()),
            finance_repo: FinanceRepository::new(env.connection.clone()),
            backend,
            env,
        }
    }

    /// Helper whose clock reports `today` instead of the default test date
    pub fn at_date(today: NaiveDate) -> Self {
        let env = TestEnvironment {
            connection: Arc::new(MemoryConnection::seeded(today)),
            clock: Arc::new(FixedClock::new(today, TEST_TIMESTAMP_MILLIS)),
        };
        Self::from_env(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::traits::{CustomerStorage, OrderStorage};

    #[test]
    fn test_helper_starts_from_fixtures() {
        let helper = TestHelper::new();
        assert_eq!(helper.customer_repo.list_customers().unwrap().len(), 4);
        assert!(helper
            .order_repo
            .list_orders()
            .unwrap()
            .iter()
            .all(|order| order.date == test_today()));
    }

    #[test]
    fn test_empty_helper_has_no_records() {
        let helper = TestHelper::empty();
        assert!(helper.customer_repo.list_customers().unwrap().is_empty());
    }
}
