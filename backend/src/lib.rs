//! # Meal Admin Backend
//!
//! UI-agnostic core of the meal subscription admin dashboard. The egui shell
//! holds one `Backend` and calls its services directly:
//! - Synchronous operations only, no async runtime
//! - All collections live in memory, seeded from fixtures at startup
//! - The string-keyed form boundary lives in `io::forms`

use std::sync::Arc;

use log::info;
use shared::DisplayConfig;

pub mod domain;
pub mod io;
pub mod storage;

pub use storage::MemoryConnection;

use domain::clock::{Clock, SystemClock};
use domain::settings::SystemSettings;

/// Main backend struct that orchestrates all services
#[derive(Clone)]
pub struct Backend {
    pub config: DisplayConfig,
    pub settings: SystemSettings,
    pub clock: Arc<dyn Clock>,
    pub plan_service: domain::PlanService,
    pub customer_service: domain::CustomerService,
    pub driver_service: domain::DriverService,
    pub attendance_service: domain::AttendanceService,
    pub order_service: domain::OrderService,
    pub dashboard_service: domain::DashboardService,
    pub finance_service: domain::FinanceService,
}

impl Backend {
    /// Backend over the wall clock, seeded with today's fixtures
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Backend seeded from fixtures with orders dated by `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let connection = Arc::new(MemoryConnection::seeded(clock.today()));
        Self::with_connection(connection, clock)
    }

    /// Wire every service over an existing connection
    pub fn with_connection(connection: Arc<MemoryConnection>, clock: Arc<dyn Clock>) -> Self {
        let backend = Self {
            config: DisplayConfig::default(),
            settings: SystemSettings::default(),
            plan_service: domain::PlanService::new(connection.clone(), clock.clone()),
            customer_service: domain::CustomerService::new(connection.clone(), clock.clone()),
            driver_service: domain::DriverService::new(connection.clone(), clock.clone()),
            attendance_service: domain::AttendanceService::new(connection.clone(), clock.clone()),
            order_service: domain::OrderService::new(connection.clone()),
            dashboard_service: domain::DashboardService::new(connection.clone()),
            finance_service: domain::FinanceService::new(connection),
            clock,
        };
        info!("Backend ready for {}", backend.config.business_name);
        backend
    }

    /// Current date according to the backend's clock
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
