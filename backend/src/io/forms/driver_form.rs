//! Driver editor fields. Attendance and the active flag are not on the form.

use shared::{Driver, Zone};

use super::form_data::{FormData, FormError};
use crate::domain::commands::driver::DriverFields;

pub const NAME: &str = "name";
pub const PHONE: &str = "phone";
pub const VEHICLE_NO: &str = "vehicle_no";
pub const ASSIGNED_AREA: &str = "assigned_area";

pub fn parse(form: &FormData) -> Result<DriverFields, FormError> {
    Ok(DriverFields {
        name: form.required_text(NAME)?,
        phone: form.required_text(PHONE)?,
        vehicle_no: form.required_text(VEHICLE_NO)?,
        assigned_area: form.zone(ASSIGNED_AREA)?,
    })
}

pub fn prefill(driver: &Driver) -> FormData {
    FormData::new()
        .with(NAME, driver.name.as_str())
        .with(PHONE, driver.phone.as_str())
        .with(VEHICLE_NO, driver.vehicle_no.as_str())
        .with(ASSIGNED_AREA, driver.assigned_area.as_str())
}

pub fn blank() -> FormData {
    FormData::new().with(ASSIGNED_AREA, Zone::ALL[0].as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::fixtures;

    #[test]
    fn test_prefill_round_trips_driver_fields() {
        let driver = fixtures::drivers().remove(1);
        let fields = parse(&prefill(&driver)).unwrap();
        assert_eq!(fields.vehicle_no, "TS08 GH 5678");
        assert_eq!(fields.assigned_area, Zone::Gachibowli);
    }

    #[test]
    fn test_vehicle_number_is_required() {
        let form = blank().with(NAME, "Suresh").with(PHONE, "9000011111");
        assert_eq!(
            parse(&form),
            Err(FormError::MissingField { field: VEHICLE_NO.to_string() })
        );
    }
}
