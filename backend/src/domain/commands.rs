//! Domain-level command and query types.
//!
//! Services take these strongly-typed structs. The string-keyed form data the
//! editor dialog produces is parsed into them by `io::forms` before it reaches
//! the domain.

/// Whether a save appended a new record or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

pub mod plan {
    use super::SaveOutcome;
    use shared::{BillingType, Plan};

    /// Editable plan fields
    #[derive(Debug, Clone, PartialEq)]
    pub struct PlanFields {
        pub name: String,
        pub billing_type: BillingType,
        pub price: i64,
        pub meals_per_week: i64,
        pub description: String,
    }

    /// Save a plan. `plan_id: None` creates a new plan.
    #[derive(Debug, Clone)]
    pub struct SavePlanCommand {
        pub plan_id: Option<String>,
        pub fields: PlanFields,
    }

    #[derive(Debug, Clone)]
    pub struct DeletePlanCommand {
        pub plan_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct SavePlanResult {
        pub plan: Plan,
        pub outcome: SaveOutcome,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeletePlanResult {
        pub deleted: bool,
        pub success_message: String,
    }
}

pub mod customer {
    use super::SaveOutcome;
    use chrono::NaiveDate;
    use shared::{Customer, SubscriptionStatus, Zone};

    /// Editable customer fields
    #[derive(Debug, Clone, PartialEq)]
    pub struct CustomerFields {
        pub name: String,
        pub phone: String,
        pub area: Zone,
        pub address: String,
        pub plan_id: String,
        pub status: SubscriptionStatus,
        pub next_billing_date: Option<NaiveDate>,
        pub due_amount: i64,
        pub notes: Option<String>,
    }

    /// Save a customer. `customer_id: None` creates a new customer.
    #[derive(Debug, Clone)]
    pub struct SaveCustomerCommand {
        pub customer_id: Option<String>,
        pub fields: CustomerFields,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteCustomerCommand {
        pub customer_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct SaveCustomerResult {
        pub customer: Customer,
        pub outcome: SaveOutcome,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteCustomerResult {
        pub deleted: bool,
        pub success_message: String,
    }
}

pub mod driver {
    use super::SaveOutcome;
    use shared::{Driver, Zone};

    /// Editable driver fields. Attendance is never part of the edit form.
    #[derive(Debug, Clone, PartialEq)]
    pub struct DriverFields {
        pub name: String,
        pub phone: String,
        pub vehicle_no: String,
        pub assigned_area: Zone,
    }

    /// Save a driver. `driver_id: None` creates a new driver.
    #[derive(Debug, Clone)]
    pub struct SaveDriverCommand {
        pub driver_id: Option<String>,
        pub fields: DriverFields,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteDriverCommand {
        pub driver_id: String,
    }

    #[derive(Debug, Clone)]
    pub struct SaveDriverResult {
        pub driver: Driver,
        pub outcome: SaveOutcome,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteDriverResult {
        pub deleted: bool,
        pub success_message: String,
    }
}

pub mod order {
    use shared::{DeliveryStatus, Order, Zone};

    /// Area selector of the orders view
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum AreaFilter {
        #[default]
        All,
        Zone(Zone),
    }

    impl AreaFilter {
        pub fn label(&self) -> &'static str {
            match self {
                AreaFilter::All => "All Areas",
                AreaFilter::Zone(zone) => zone.as_str(),
            }
        }
    }

    /// Search text and area filter, combined with AND
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct OrderListQuery {
        pub search: String,
        pub area: AreaFilter,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateOrderStatusCommand {
        pub order_id: String,
        pub status: DeliveryStatus,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateOrderStatusResult {
        pub order: Order,
        pub previous_status: DeliveryStatus,
        pub success_message: String,
    }

    /// Set or clear the driver of an order
    #[derive(Debug, Clone)]
    pub struct AssignDriverCommand {
        pub order_id: String,
        pub driver_id: Option<String>,
    }

    #[derive(Debug, Clone)]
    pub struct AssignDriverResult {
        pub order: Order,
        pub success_message: String,
    }

    #[derive(Debug, Clone)]
    pub struct AutoAssignResult {
        /// (order id, driver id) pairs that were assigned
        pub assignments: Vec<(String, String)>,
        /// Unassigned orders with no active driver covering their area
        pub still_unassigned: Vec<String>,
        pub success_message: String,
    }
}

pub mod attendance {
    use chrono::NaiveDate;
    use shared::{AttendanceStatus, Driver};

    #[derive(Debug, Clone)]
    pub struct RecordAttendanceCommand {
        pub driver_id: String,
        pub date: NaiveDate,
        pub status: AttendanceStatus,
    }

    /// Whether the write created the day's record or overwrote it
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AttendanceWrite {
        Inserted,
        Overwritten,
    }

    #[derive(Debug, Clone)]
    pub struct RecordAttendanceResult {
        pub driver: Driver,
        pub write: AttendanceWrite,
    }
}
