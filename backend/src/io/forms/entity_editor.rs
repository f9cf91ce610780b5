use anyhow::{anyhow, Result};
use log::{debug, info};
use std::fmt;

use super::form_data::FormData;
use super::{customer_form, driver_form, plan_form};
use crate::domain::commands::customer::SaveCustomerCommand;
use crate::domain::commands::driver::SaveDriverCommand;
use crate::domain::commands::plan::SavePlanCommand;
use crate::domain::commands::SaveOutcome;
use crate::Backend;

/// Entity kinds editable through the shared dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Plan,
    Driver,
}

impl EntityKind {
    /// Lowercase label used in titles and prompts
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Plan => "plan",
            EntityKind::Driver => "driver",
        }
    }

    /// Title of the editor dialog, e.g. "Add New customer" or "Edit plan"
    pub fn dialog_title(&self, editing: bool) -> String {
        if editing {
            format!("Edit {}", self.label())
        } else {
            format!("Add New {}", self.label())
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a save did, independent of entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedEntity {
    pub kind: EntityKind,
    pub id: String,
    pub outcome: SaveOutcome,
    pub success_message: String,
}

/// Parse `form` for `kind` and save it. `editing_id: None` creates a new
/// record; otherwise the record with that id is replaced in place.
pub fn save_entity(
    backend: &Backend,
    kind: EntityKind,
    form: &FormData,
    editing_id: Option<&str>,
) -> Result<SavedEntity> {
    debug!("Saving {} form (editing: {:?})", kind, editing_id);
    let editing_id = editing_id.map(str::to_string);

    let saved = match kind {
        EntityKind::Customer => {
            let fields = customer_form::parse(form)?;
            let result = backend.customer_service.save_customer(SaveCustomerCommand {
                customer_id: editing_id,
                fields,
            })?;
            SavedEntity {
                kind,
                id: result.customer.id,
                outcome: result.outcome,
                success_message: result.success_message,
            }
        }
        EntityKind::Plan => {
            let fields = plan_form::parse(form)?;
            let result = backend.plan_service.save_plan(SavePlanCommand {
                plan_id: editing_id,
                fields,
            })?;
            SavedEntity {
                kind,
                id: result.plan.id,
                outcome: result.outcome,
                success_message: result.success_message,
            }
        }
        EntityKind::Driver => {
            let fields = driver_form::parse(form)?;
            let result = backend.driver_service.save_driver(SaveDriverCommand {
                driver_id: editing_id,
                fields,
            })?;
            SavedEntity {
                kind,
                id: result.driver.id,
                outcome: result.outcome,
                success_message: result.success_message,
            }
        }
    };

    info!("Saved {} {} ({:?})", saved.kind, saved.id, saved.outcome);
    Ok(saved)
}

/// Form values of an existing entity, for the edit dialog
pub fn prefill(backend: &Backend, kind: EntityKind, id: &str) -> Result<FormData> {
    let not_found = || anyhow!("{} not found: {}", kind, id);
    let form = match kind {
        EntityKind::Customer => {
            customer_form::prefill(&backend.customer_service.get_customer(id)?.ok_or_else(not_found)?)
        }
        EntityKind::Plan => plan_form::prefill(&backend.plan_service.get_plan(id)?.ok_or_else(not_found)?),
        EntityKind::Driver => {
            driver_form::prefill(&backend.driver_service.get_driver(id)?.ok_or_else(not_found)?)
        }
    };
    Ok(form)
}

/// Empty form for a new entity with selects on their first option
pub fn blank(backend: &Backend, kind: EntityKind) -> Result<FormData> {
    let form = match kind {
        EntityKind::Customer => {
            let plans = backend.plan_service.list_plans()?;
            customer_form::blank(plans.first().map(|plan| plan.id.as_str()))
        }
        EntityKind::Plan => plan_form::blank(),
        EntityKind::Driver => driver_form::blank(),
    };
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::forms::FormError;
    use crate::storage::memory::test_utils::TestHelper;
    use crate::storage::traits::{CustomerStorage, DriverStorage, PlanStorage};

    fn customer_ids(helper: &TestHelper) -> Vec<String> {
        helper.customer_repo.list_customers().unwrap().into_iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_dialog_titles() {
        assert_eq!(EntityKind::Customer.dialog_title(false), "Add New customer");
        assert_eq!(EntityKind::Driver.dialog_title(true), "Edit driver");
    }

    #[test]
    fn test_save_new_entity_of_each_kind_appends_once() {
        let helper = TestHelper::new();
        let backend = &helper.backend;

        let new_customer = blank(backend, EntityKind::Customer)
            .unwrap()
            .with(customer_form::NAME, "Kavya")
            .with(customer_form::PHONE, "9000000001")
            .with(customer_form::ADDRESS, "Road 3");
        let new_plan = blank(backend, EntityKind::Plan).unwrap().with(plan_form::NAME, "Festival Box");
        let new_driver = blank(backend, EntityKind::Driver)
            .unwrap()
            .with(driver_form::NAME, "Suresh")
            .with(driver_form::PHONE, "9000011111")
            .with(driver_form::VEHICLE_NO, "TS01 AA 0001");

        let before = customer_ids(&helper);
        let saved = save_entity(backend, EntityKind::Customer, &new_customer, None).unwrap();
        assert_eq!(saved.outcome, SaveOutcome::Created);
        assert!(!before.contains(&saved.id));
        assert_eq!(customer_ids(&helper).len(), before.len() + 1);

        let saved_plan = save_entity(backend, EntityKind::Plan, &new_plan, None).unwrap();
        assert_eq!(helper.plan_repo.list_plans().unwrap().len(), 4);
        assert!(saved_plan.id.starts_with('P'));

        let saved_driver = save_entity(backend, EntityKind::Driver, &new_driver, None).unwrap();
        let drivers = helper.driver_repo.list_drivers().unwrap();
        assert_eq!(drivers.len(), 4);
        assert_eq!(drivers[3].id, saved_driver.id);
    }

    #[test]
    fn test_edit_through_prefill_replaces_in_place() {
        let helper = TestHelper::new();
        let backend = &helper.backend;
        let before = customer_ids(&helper);

        let form = prefill(backend, EntityKind::Customer, "C1003")
            .unwrap()
            .with(customer_form::STATUS, "Active")
            .with(customer_form::DUE_AMOUNT, "250");
        let saved = save_entity(backend, EntityKind::Customer, &form, Some("C1003")).unwrap();

        assert_eq!(saved.outcome, SaveOutcome::Updated);
        assert_eq!(saved.id, "C1003");
        assert_eq!(customer_ids(&helper), before);
        let stored = helper.customer_repo.get_customer("C1003").unwrap().unwrap();
        assert_eq!(stored.due_amount, 250);
        assert_eq!(stored.name, "Venkatesh Iyer");
    }

    #[test]
    fn test_driver_edit_keeps_attendance() {
        let helper = TestHelper::new();
        let backend = &helper.backend;
        let form = prefill(backend, EntityKind::Driver, "D001")
            .unwrap()
            .with(driver_form::VEHICLE_NO, "TS07 HK 9999");

        save_entity(backend, EntityKind::Driver, &form, Some("D001")).unwrap();

        let driver = helper.driver_repo.get_driver("D001").unwrap().unwrap();
        assert_eq!(driver.vehicle_no, "TS07 HK 9999");
        assert_eq!(driver.attendance.present, 22);
        assert_eq!(driver.attendance.total_days, 24);
    }

    #[test]
    fn test_form_errors_leave_collections_untouched() {
        let helper = TestHelper::new();
        let form = blank(&helper.backend, EntityKind::Plan)
            .unwrap()
            .with(plan_form::NAME, "Broken")
            .with(plan_form::PRICE, "abc");

        let err = save_entity(&helper.backend, EntityKind::Plan, &form, None).unwrap_err();
        assert!(matches!(err.downcast_ref::<FormError>(), Some(FormError::InvalidNumber { .. })));
        assert_eq!(helper.plan_repo.list_plans().unwrap().len(), 3);
    }

    #[test]
    fn test_prefill_unknown_id_fails() {
        let helper = TestHelper::new();
        assert!(prefill(&helper.backend, EntityKind::Plan, "P404").is_err());
    }
}
