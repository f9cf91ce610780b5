use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

/// Date format of every date field on the wire between view and form
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a submitted form could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    MissingField { field: String },
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidNumber { field: String, value: String },
    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: String, value: String },
    #[error("'{value}' is not a delivery zone")]
    UnknownZone { field: String, value: String },
    #[error("'{value}' is not a valid option for {field}")]
    UnknownOption { field: String, value: String },
}

/// Submitted field values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Mutable handle for a text widget; inserts an empty value if the field is absent
    pub fn field_mut(&mut self, field: &str) -> &mut String {
        self.fields.entry(field.to_string()).or_default()
    }

    /// Builder-style `set`
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Trimmed value, or None when absent or blank
    fn non_blank(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|value| !value.is_empty())
    }

    pub fn required_text(&self, field: &str) -> Result<String, FormError> {
        self.non_blank(field)
            .map(str::to_string)
            .ok_or_else(|| FormError::MissingField { field: field.to_string() })
    }

    /// Free text that may be empty
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(|value| value.trim().to_string()).unwrap_or_default()
    }

    pub fn optional_text(&self, field: &str) -> Option<String> {
        self.non_blank(field).map(str::to_string)
    }

    /// Whole number; absent or blank reads as 0. Negative values are accepted.
    pub fn integer(&self, field: &str) -> Result<i64, FormError> {
        match self.non_blank(field) {
            None => Ok(0),
            Some(value) => value.parse::<i64>().map_err(|_| FormError::InvalidNumber {
                field: field.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// ISO date; absent or blank reads as None
    pub fn optional_date(&self, field: &str) -> Result<Option<NaiveDate>, FormError> {
        match self.non_blank(field) {
            None => Ok(None),
            Some(value) => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(Some)
                .map_err(|_| FormError::InvalidDate {
                    field: field.to_string(),
                    value: value.to_string(),
                }),
        }
    }

    /// Select value parsed through the enum's display label
    pub fn choice<T: FromStr>(&self, field: &str) -> Result<T, FormError> {
        let value = self.required_text(field)?;
        value.parse::<T>().map_err(|_| FormError::UnknownOption {
            field: field.to_string(),
            value,
        })
    }

    /// Zone select; same as `choice` with a zone-specific error
    pub fn zone(&self, field: &str) -> Result<shared::Zone, FormError> {
        let value = self.required_text(field)?;
        value.parse().map_err(|_| FormError::UnknownZone {
            field: field.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{BillingType, Zone};

    #[test]
    fn test_integer_defaults_blank_to_zero() {
        let form = FormData::new().with("price", "  ");
        assert_eq!(form.integer("price"), Ok(0));
        assert_eq!(form.integer("meals_per_week"), Ok(0));
    }

    #[test]
    fn test_integer_accepts_negative_and_rejects_text() {
        let form = FormData::new().with("due_amount", "-150").with("price", "12.5");
        assert_eq!(form.integer("due_amount"), Ok(-150));
        assert_eq!(
            form.integer("price"),
            Err(FormError::InvalidNumber {
                field: "price".to_string(),
                value: "12.5".to_string()
            })
        );
    }

    #[test]
    fn test_required_text_trims_and_rejects_blank() {
        let form = FormData::new().with("name", "  Ravi ").with("phone", "");
        assert_eq!(form.required_text("name").unwrap(), "Ravi");
        assert!(matches!(form.required_text("phone"), Err(FormError::MissingField { .. })));
        assert!(matches!(form.required_text("address"), Err(FormError::MissingField { .. })));
    }

    #[test]
    fn test_optional_date() {
        let form = FormData::new()
            .with("next_billing_date", "2023-12-01")
            .with("bad", "01/12/2023");
        assert_eq!(
            form.optional_date("next_billing_date").unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 1)
        );
        assert_eq!(form.optional_date("missing").unwrap(), None);
        assert!(matches!(form.optional_date("bad"), Err(FormError::InvalidDate { .. })));
    }

    #[test]
    fn test_choice_and_zone() {
        let form = FormData::new()
            .with("billing_type", "Weekly")
            .with("area", "Banjara Hills")
            .with("other", "Hyderabad");
        assert_eq!(form.choice::<BillingType>("billing_type").unwrap(), BillingType::Weekly);
        assert_eq!(form.zone("area").unwrap(), Zone::BanjaraHills);
        assert!(matches!(form.zone("other"), Err(FormError::UnknownZone { .. })));
        assert!(matches!(
            form.choice::<BillingType>("other"),
            Err(FormError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_field_mut_inserts_empty() {
        let mut form = FormData::new();
        form.field_mut("notes").push_str("Extra curd");
        assert_eq!(form.get("notes"), Some("Extra curd"));
    }
}
