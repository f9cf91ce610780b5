//! Plan editor fields: name, billing type, price, meals per week, description.

use shared::{BillingType, Plan};

use super::form_data::{FormData, FormError};
use crate::domain::commands::plan::PlanFields;

pub const NAME: &str = "name";
pub const BILLING_TYPE: &str = "billing_type";
pub const PRICE: &str = "price";
pub const MEALS_PER_WEEK: &str = "meals_per_week";
pub const DESCRIPTION: &str = "description";

pub fn parse(form: &FormData) -> Result<PlanFields, FormError> {
    Ok(PlanFields {
        name: form.required_text(NAME)?,
        billing_type: form.choice(BILLING_TYPE)?,
        price: form.integer(PRICE)?,
        meals_per_week: form.integer(MEALS_PER_WEEK)?,
        description: form.text(DESCRIPTION),
    })
}

pub fn prefill(plan: &Plan) -> FormData {
    FormData::new()
        .with(NAME, plan.name.as_str())
        .with(BILLING_TYPE, plan.billing_type.as_str())
        .with(PRICE, plan.price.to_string())
        .with(MEALS_PER_WEEK, plan.meals_per_week.to_string())
        .with(DESCRIPTION, plan.description.as_str())
}

/// Form for a new plan; selects start at their first option
pub fn blank() -> FormData {
    FormData::new().with(BILLING_TYPE, BillingType::Monthly.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fixtures;

    #[test]
    fn test_prefill_then_parse_keeps_fields() {
        let plan = fixtures::plans().remove(2);
        let fields = parse(&prefill(&plan)).unwrap();

        assert_eq!(fields.name, "Millet Health Box");
        assert_eq!(fields.billing_type, BillingType::Weekly);
        assert_eq!(fields.price, 1200);
        assert_eq!(fields.meals_per_week, 5);
    }

    #[test]
    fn test_blank_form_needs_a_name() {
        assert_eq!(
            parse(&blank()),
            Err(FormError::MissingField { field: NAME.to_string() })
        );

        let fields = parse(&blank().with(NAME, "Festival Box")).unwrap();
        assert_eq!(fields.price, 0);
        assert_eq!(fields.meals_per_week, 0);
        assert_eq!(fields.description, "");
    }

    #[test]
    fn test_negative_price_passes_through() {
        let form = blank().with(NAME, "Refund").with(PRICE, "-100");
        assert_eq!(parse(&form).unwrap().price, -100);
    }
}
