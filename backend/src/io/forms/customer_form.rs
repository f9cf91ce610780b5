//! Customer editor fields.

use shared::{Customer, SubscriptionStatus, Zone};

use super::form_data::{FormData, FormError, DATE_FORMAT};
use crate::domain::commands::customer::CustomerFields;

pub const NAME: &str = "name";
pub const PHONE: &str = "phone";
pub const ADDRESS: &str = "address";
pub const AREA: &str = "area";
pub const PLAN_ID: &str = "plan_id";
pub const STATUS: &str = "status";
pub const DUE_AMOUNT: &str = "due_amount";
pub const NEXT_BILLING_DATE: &str = "next_billing_date";
pub const NOTES: &str = "notes";

/// The plan id is a select over current plans but is stored as given, so a
/// blank or stale id is accepted and renders with the fallback plan label.
pub fn parse(form: &FormData) -> Result<CustomerFields, FormError> {
    Ok(CustomerFields {
        name: form.required_text(NAME)?,
        phone: form.required_text(PHONE)?,
        area: form.zone(AREA)?,
        address: form.required_text(ADDRESS)?,
        plan_id: form.text(PLAN_ID),
        status: form.choice(STATUS)?,
        next_billing_date: form.optional_date(NEXT_BILLING_DATE)?,
        due_amount: form.integer(DUE_AMOUNT)?,
        notes: form.optional_text(NOTES),
    })
}

pub fn prefill(customer: &Customer) -> FormData {
    let next_billing_date = customer
        .next_billing_date
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_default();

    FormData::new()
        .with(NAME, customer.name.as_str())
        .with(PHONE, customer.phone.as_str())
        .with(ADDRESS, customer.address.as_str())
        .with(AREA, customer.area.as_str())
        .with(PLAN_ID, customer.plan_id.as_str())
        .with(STATUS, customer.status.as_str())
        .with(DUE_AMOUNT, customer.due_amount.to_string())
        .with(NEXT_BILLING_DATE, next_billing_date)
        .with(NOTES, customer.notes.clone().unwrap_or_default())
}

/// Form for a new customer. `first_plan_id` preselects the plan dropdown.
pub fn blank(first_plan_id: Option<&str>) -> FormData {
    FormData::new()
        .with(AREA, Zone::ALL[0].as_str())
        .with(PLAN_ID, first_plan_id.unwrap_or_default())
        .with(STATUS, SubscriptionStatus::Active.as_str())
        .with(DUE_AMOUNT, "0")
}
