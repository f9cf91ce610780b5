use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::commands::plan::{
    DeletePlanCommand, DeletePlanResult, PlanFields, SavePlanCommand, SavePlanResult,
};
use crate::domain::commands::SaveOutcome;
use crate::domain::id_generator::{generate_entity_id, PLAN_ID_PREFIX};
use crate::storage::memory::MemoryConnection;
use crate::storage::traits::PlanStorage;
use crate::storage::PlanRepository;
use shared::Plan;

/// Service for managing subscription plans
#[derive(Clone)]
pub struct PlanService {
    plan_repository: PlanRepository,
    clock: Arc<dyn Clock>,
}

impl PlanService {
    pub fn new(connection: Arc<MemoryConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            plan_repository: PlanRepository::new(connection),
            clock,
        }
    }

    /// List plans in collection order
    pub fn list_plans(&self) -> Result<Vec<Plan>> {
        self.plan_repository.list_plans()
    }

    pub fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>> {
        self.plan_repository.get_plan(plan_id)
    }

    /// Create a plan when `plan_id` is None, otherwise overwrite the editable
    /// fields of the existing plan in place
    pub fn save_plan(&self, command: SavePlanCommand) -> Result<SavePlanResult> {
        match command.plan_id {
            Some(plan_id) => self.update_plan(&plan_id, command.fields),
            None => self.create_plan(command.fields),
        }
    }

    fn create_plan(&self, fields: PlanFields) -> Result<SavePlanResult> {
        let existing = self.plan_repository.list_plans()?;
        let id = generate_entity_id(PLAN_ID_PREFIX, self.clock.timestamp_millis(), |candidate| {
            existing.iter().any(|plan| plan.id == candidate)
        });

        let plan = Plan {
            id,
            name: fields.name,
            billing_type: fields.billing_type,
            price: fields.price,
            meals_per_week: fields.meals_per_week,
            description: fields.description,
            is_active: true,
        };
        self.plan_repository
            .store_plan(&plan)
            .with_context(|| format!("Failed to store plan {}", plan.id))?;

        info!("Created plan: {} with ID: {}", plan.name, plan.id);
        Ok(SavePlanResult {
            success_message: format!("Plan '{}' created", plan.name),
            plan,
            outcome: SaveOutcome::Created,
        })
    }

    fn update_plan(&self, plan_id: &str, fields: PlanFields) -> Result<SavePlanResult> {
        let mut plan = self
            .plan_repository
            .get_plan(plan_id)?
            .ok_or_else(|| anyhow!("Plan not found: {}", plan_id))?;

        plan.name = fields.name;
        plan.billing_type = fields.billing_type;
        plan.price = fields.price;
        plan.meals_per_week = fields.meals_per_week;
        plan.description = fields.description;

        self.plan_repository
            .update_plan(&plan)
            .with_context(|| format!("Failed to update plan {}", plan.id))?;

        info!("Updated plan: {} with ID: {}", plan.name, plan.id);
        Ok(SavePlanResult {
            success_message: format!("Plan '{}' updated", plan.name),
            plan,
            outcome: SaveOutcome::Updated,
        })
    }

    /// Remove a plan. Customers still referencing it are left untouched.
    pub fn delete_plan(&self, command: DeletePlanCommand) -> Result<DeletePlanResult> {
        info!("Deleting plan: {}", command.plan_id);

        let deleted = self.plan_repository.delete_plan(&command.plan_id)?;
        let success_message = if deleted {
            format!("Plan {} deleted", command.plan_id)
        } else {
            warn!("Plan not found for deletion: {}", command.plan_id);
            format!("Plan {} was already removed", command.plan_id)
        };

        Ok(DeletePlanResult { deleted, success_message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::{TestHelper, TEST_TIMESTAMP_MILLIS};
    use shared::BillingType;

    fn fields(name: &str) -> PlanFields {
        PlanFields {
            name: name.to_string(),
            billing_type: BillingType::Custom,
            price: 999,
            meals_per_week: 3,
            description: "Trial box".to_string(),
        }
    }

    fn plan_ids(service: &PlanService) -> Vec<String> {
        service.list_plans().unwrap().into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_create_plan_appends_with_fresh_id() {
        let helper = TestHelper::new();
        let service = &helper.backend.plan_service;
        let before = plan_ids(service);

        let result = service
            .save_plan(SavePlanCommand { plan_id: None, fields: fields("Trial") })
            .unwrap();

        let after = plan_ids(service);
        assert_eq!(result.outcome, SaveOutcome::Created);
        assert_eq!(result.plan.id, format!("P{}", TEST_TIMESTAMP_MILLIS));
        assert!(result.plan.is_active);
        assert_eq!(after.len(), before.len() + 1);
        assert!(!before.contains(&result.plan.id));
        assert_eq!(after.last(), Some(&result.plan.id));
    }

    #[test]
    fn test_two_creates_at_same_instant_get_distinct_ids() {
        let helper = TestHelper::new();
        let service = &helper.backend.plan_service;

        let first = service.save_plan(SavePlanCommand { plan_id: None, fields: fields("A") }).unwrap();
        let second = service.save_plan(SavePlanCommand { plan_id: None, fields: fields("B") }).unwrap();

        assert_ne!(first.plan.id, second.plan.id);
        assert_eq!(plan_ids(service).len(), 5);
    }

    #[test]
    fn test_update_plan_replaces_in_place() {
        let helper = TestHelper::new();
        let service = &helper.backend.plan_service;
        let mut inactive = service.get_plan("P002").unwrap().unwrap();
        inactive.is_active = false;
        helper.plan_repo.update_plan(&inactive).unwrap();

        let result = service
            .save_plan(SavePlanCommand {
                plan_id: Some("P002".to_string()),
                fields: fields("Premium Renamed"),
            })
            .unwrap();

        assert_eq!(result.outcome, SaveOutcome::Updated);
        assert_eq!(plan_ids(service), vec!["P001", "P002", "P003"]);
        let stored = service.get_plan("P002").unwrap().unwrap();
        assert_eq!(stored.name, "Premium Renamed");
        assert_eq!(stored.price, 999);
        // Not part of the edit form, so it keeps its prior value
        assert!(!stored.is_active);
    }

    #[test]
    fn test_update_unknown_plan_fails() {
        let helper = TestHelper::new();
        let result = helper.backend.plan_service.save_plan(SavePlanCommand {
            plan_id: Some("P404".to_string()),
            fields: fields("Ghost"),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_plan_does_not_cascade_to_customers() {
        let helper = TestHelper::new();

        let result = helper
            .backend
            .plan_service
            .delete_plan(DeletePlanCommand { plan_id: "P001".to_string() })
            .unwrap();

        assert!(result.deleted);
        assert_eq!(plan_ids(&helper.backend.plan_service), vec!["P002", "P003"]);
        let customers = helper.backend.customer_service.list_customers().unwrap();
        assert_eq!(customers[0].plan_id, "P001");
    }

    #[test]
    fn test_delete_missing_plan_reports_not_deleted() {
        let helper = TestHelper::new();
        let result = helper
            .backend
            .plan_service
            .delete_plan(DeletePlanCommand { plan_id: "P404".to_string() })
            .unwrap();
        assert!(!result.deleted);
        assert_eq!(plan_ids(&helper.backend.plan_service).len(), 3);
    }
}
