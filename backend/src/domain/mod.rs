//! # Domain Layer
//!
//! Business logic of the admin dashboard, written against the storage traits.
//!
//! ## Responsibilities
//! - Create, edit and delete plans, customers and drivers
//! - Record driver attendance and keep the monthly present count current
//! - Filter orders, change their status and (re)assign drivers
//! - Produce display rows and dashboard figures with loose references resolved
//!
//! Services are cheap to clone and share one `MemoryConnection`. Every
//! mutation is logged at `info`.

pub mod attendance_service;
pub mod clock;
pub mod commands;
pub mod customer_service;
pub mod dashboard_service;
pub mod driver_service;
pub mod finance_service;
pub mod id_generator;
pub mod listing;
pub mod order_service;
pub mod plan_service;
pub mod settings;

pub use attendance_service::AttendanceService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use customer_service::CustomerService;
pub use dashboard_service::DashboardService;
pub use driver_service::DriverService;
pub use finance_service::FinanceService;
pub use order_service::OrderService;
pub use plan_service::PlanService;
pub use settings::{SystemSettings, WorkingDays};
