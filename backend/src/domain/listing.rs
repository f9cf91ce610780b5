//! # Listing
//!
//! Pure functions turning collection slices into display rows.
//!
//! ## Responsibilities
//! - Resolve loose cross-collection references (plan of a customer, driver of
//!   an order) with a fixed fallback label instead of an error
//! - Apply the order search/area filter
//! - Build driver cards and the daily attendance roster
//!
//! Nothing here touches storage; the services feed these functions with the
//! collections they just read.

use chrono::NaiveDate;
use log::warn;
use shared::{
    AttendanceRow, Customer, CustomerRow, DeliveryStatus, DisplayConfig, Driver, DriverCard, Order,
    OrderRow, Plan,
};

use crate::domain::commands::order::{AreaFilter, OrderListQuery};

/// Plan name for `plan_id`, or the configured fallback when it dangles
pub fn resolve_plan_name(plans: &[Plan], plan_id: &str, config: &DisplayConfig) -> String {
    match plans.iter().find(|plan| plan.id == plan_id) {
        Some(plan) => plan.name.clone(),
        None => {
            warn!("Customer references missing plan {}", plan_id);
            config.unknown_plan_label.clone()
        }
    }
}

/// "Paid" when nothing is owed, otherwise the formatted amount
pub fn due_label(due_amount: i64, config: &DisplayConfig) -> String {
    if due_amount > 0 {
        config.format_currency(due_amount)
    } else {
        config.paid_label.clone()
    }
}

pub fn customer_rows(customers: &[Customer], plans: &[Plan], config: &DisplayConfig) -> Vec<CustomerRow> {
    customers
        .iter()
        .map(|customer| CustomerRow {
            id: customer.id.clone(),
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            plan_name: resolve_plan_name(plans, &customer.plan_id, config),
            area: customer.area,
            status: customer.status,
            due_label: due_label(customer.due_amount, config),
            has_due: customer.due_amount > 0,
        })
        .collect()
}

/// Case-insensitive substring match on customer name or order id
fn matches_search(order: &Order, needle: &str) -> bool {
    needle.is_empty()
        || order.customer_name.to_lowercase().contains(needle)
        || order.id.to_lowercase().contains(needle)
}

fn matches_area(order: &Order, area: AreaFilter) -> bool {
    match area {
        AreaFilter::All => true,
        AreaFilter::Zone(zone) => order.area == zone,
    }
}

/// Orders matching both the search text and the area filter, in collection order
pub fn filter_orders(orders: &[Order], query: &OrderListQuery) -> Vec<Order> {
    let needle = query.search.trim().to_lowercase();
    orders
        .iter()
        .filter(|order| matches_search(order, &needle) && matches_area(order, query.area))
        .cloned()
        .collect()
}

/// Display label and avatar initial for an order's driver reference
pub fn resolve_driver(drivers: &[Driver], driver_id: Option<&str>, config: &DisplayConfig) -> (String, char) {
    let Some(driver_id) = driver_id else {
        return (config.unassigned_label.clone(), '?');
    };

    match drivers.iter().find(|driver| driver.id == driver_id) {
        Some(driver) => (driver.name.clone(), initial_of(&driver.name)),
        None => {
            warn!("Order references missing driver {}", driver_id);
            (config.unknown_driver_label.clone(), '?')
        }
    }
}

fn initial_of(name: &str) -> char {
    name.chars().next().unwrap_or('?')
}

pub fn order_rows(orders: &[Order], drivers: &[Driver], config: &DisplayConfig) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|order| {
            let (driver_label, driver_initial) = resolve_driver(drivers, order.driver_id.as_deref(), config);
            OrderRow {
                id: order.id.clone(),
                customer_name: order.customer_name.clone(),
                plan_name: order.plan_name.clone(),
                note: order.note.clone(),
                address: order.address.clone(),
                area: order.area,
                driver_id: order.driver_id.clone(),
                driver_label,
                driver_initial,
                status: order.status,
                can_change_status: order.status != DeliveryStatus::Delivered,
            }
        })
        .collect()
}

pub fn driver_cards(drivers: &[Driver]) -> Vec<DriverCard> {
    drivers
        .iter()
        .map(|driver| {
            let summary = &driver.attendance;
            let attendance_fraction = if summary.total_days == 0 {
                0.0
            } else {
                summary.present as f32 / summary.total_days as f32
            };
            DriverCard {
                id: driver.id.clone(),
                name: driver.name.clone(),
                initial: initial_of(&driver.name),
                vehicle_no: driver.vehicle_no.clone(),
                phone: driver.phone.clone(),
                assigned_area: driver.assigned_area,
                is_active: driver.is_active,
                attendance_label: format!("{}/{} Days", summary.present, summary.total_days),
                attendance_fraction,
            }
        })
        .collect()
}

/// Active drivers with whatever status they have recorded for `date`
pub fn attendance_roster(drivers: &[Driver], date: NaiveDate) -> Vec<AttendanceRow> {
    drivers
        .iter()
        .filter(|driver| driver.is_active)
        .map(|driver| AttendanceRow {
            driver_id: driver.id.clone(),
            name: driver.name.clone(),
            phone: driver.phone.clone(),
            assigned_area: driver.assigned_area,
            status: driver.attendance_on(date),
        })
        .collect()
}
