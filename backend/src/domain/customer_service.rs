use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use shared::{Customer, CustomerRow, DisplayConfig};
use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::commands::customer::{
    CustomerFields, DeleteCustomerCommand, DeleteCustomerResult, SaveCustomerCommand,
    SaveCustomerResult,
};
use crate::domain::commands::SaveOutcome;
use crate::domain::id_generator::{generate_entity_id, CUSTOMER_ID_PREFIX};
use crate::domain::listing;
use crate::storage::memory::MemoryConnection;
use crate::storage::traits::{CustomerStorage, PlanStorage};
use crate::storage::{CustomerRepository, PlanRepository};

/// Service for managing subscribed customers
#[derive(Clone)]
pub struct CustomerService {
    customer_repository: CustomerRepository,
    plan_repository: PlanRepository,
    clock: Arc<dyn Clock>,
}

impl CustomerService {
    pub fn new(connection: Arc<MemoryConnection>, clock: Arc<dyn Clock>) -> Self {
        Self {
            customer_repository: CustomerRepository::new(connection.clone()),
            plan_repository: PlanRepository::new(connection),
            clock,
        }
    }

    pub fn list_customers(&self) -> Result<Vec<Customer>> {
        self.customer_repository.list_customers()
    }

    pub fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>> {
        self.customer_repository.get_customer(customer_id)
    }

    /// Listing rows with plan names resolved against the current plan collection
    pub fn customer_rows(&self, config: &DisplayConfig) -> Result<Vec<CustomerRow>> {
        let customers = self.customer_repository.list_customers()?;
        let plans = self.plan_repository.list_plans()?;
        Ok(listing::customer_rows(&customers, &plans, config))
    }

    pub fn save_customer(&self, command: SaveCustomerCommand) -> Result<SaveCustomerResult> {
        match command.customer_id {
            Some(customer_id) => self.update_customer(&customer_id, command.fields),
            None => self.create_customer(command.fields),
        }
    }

    fn create_customer(&self, fields: CustomerFields) -> Result<SaveCustomerResult> {
        let existing = self.customer_repository.list_customers()?;
        let id = generate_entity_id(CUSTOMER_ID_PREFIX, self.clock.timestamp_millis(), |candidate| {
            existing.iter().any(|customer| customer.id == candidate)
        });

        let customer = Customer {
            id,
            name: fields.name,
            phone: fields.phone,
            area: fields.area,
            address: fields.address,
            plan_id: fields.plan_id,
            status: fields.status,
            next_billing_date: fields.next_billing_date,
            due_amount: fields.due_amount,
            notes: fields.notes,
        };
        self.customer_repository
            .store_customer(&customer)
            .with_context(|| format!("Failed to store customer {}", customer.id))?;

        info!("Created customer: {} with ID: {}", customer.name, customer.id);
        Ok(SaveCustomerResult {
            success_message: format!("Customer '{}' added", customer.name),
            customer,
            outcome: SaveOutcome::Created,
        })
    }

    fn update_customer(&self, customer_id: &str, fields: CustomerFields) -> Result<SaveCustomerResult> {
        let existing = self
            .customer_repository
            .get_customer(customer_id)?
            .ok_or_else(|| anyhow!("Customer not found: {}", customer_id))?;

        // Every customer field is on the edit form, so only the id carries over
        let customer = Customer {
            id: existing.id,
            name: fields.name,
            phone: fields.phone,
            area: fields.area,
            address: fields.address,
            plan_id: fields.plan_id,
            status: fields.status,
            next_billing_date: fields.next_billing_date,
            due_amount: fields.due_amount,
            notes: fields.notes,
        };
        self.customer_repository
            .update_customer(&customer)
            .with_context(|| format!("Failed to update customer {}", customer.id))?;

        info!("Updated customer: {} with ID: {}", customer.name, customer.id);
        Ok(SaveCustomerResult {
            success_message: format!("Customer '{}' updated", customer.name),
            customer,
            outcome: SaveOutcome::Updated,
        })
    }

    /// Remove a customer by id. Orders referencing the customer are kept.
    pub fn delete_customer(&self, command: DeleteCustomerCommand) -> Result<DeleteCustomerResult> {
        info!("Deleting customer: {}", command.customer_id);

        let deleted = self.customer_repository.delete_customer(&command.customer_id)?;
        let success_message = if deleted {
            format!("Customer {} deleted", command.customer_id)
        } else {
            warn!("Customer not found for deletion: {}", command.customer_id);
            format!("Customer {} was already removed", command.customer_id)
        };

        Ok(DeleteCustomerResult { deleted, success_message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::test_utils::TestHelper;
    use chrono::NaiveDate;
    use shared::{SubscriptionStatus, Zone};

    fn fields(name: &str) -> CustomerFields {
        CustomerFields {
            name: name.to_string(),
            phone: "9000000000".to_string(),
            area: Zone::Kondapur,
            address: "12 Lake View".to_string(),
            plan_id: "P003".to_string(),
            status: SubscriptionStatus::Active,
            next_billing_date: NaiveDate::from_ymd_opt(2023, 12, 1),
            due_amount: 0,
            notes: None,
        }
    }

    fn customer_ids(service: &CustomerService) -> Vec<String> {
        service.list_customers().unwrap().into_iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_delete_c1001_keeps_others_in_order() {
        let helper = TestHelper::new();
        let service = &helper.backend.customer_service;
        let before = service.list_customers().unwrap();

        let result = service
            .delete_customer(DeleteCustomerCommand { customer_id: "C1001".to_string() })
            .unwrap();

        assert!(result.deleted);
        let after = service.list_customers().unwrap();
        assert_eq!(after.len(), 3);
        assert_eq!(after.as_slice(), &before[1..]);
    }

    #[test]
    fn test_create_customer_appends_with_unique_id() {
        let helper = TestHelper::new();
        let service = &helper.backend.customer_service;
        let before = customer_ids(service);

        let result = service
            .save_customer(SaveCustomerCommand { customer_id: None, fields: fields("Kavya Sharma") })
            .unwrap();

        let after = customer_ids(service);
        assert_eq!(result.outcome, SaveOutcome::Created);
        assert!(result.customer.id.starts_with('C'));
        assert!(!before.contains(&result.customer.id));
        assert_eq!(after.len(), 5);
        assert_eq!(after[..4], before[..]);
    }

    #[test]
    fn test_edit_customer_replaces_in_place() {
        let helper = TestHelper::new();
        let service = &helper.backend.customer_service;
        let mut edited = fields("Lakshmi P.");
        edited.due_amount = 0;
        edited.status = SubscriptionStatus::Stopped;

        service
            .save_customer(SaveCustomerCommand {
                customer_id: Some("C1002".to_string()),
                fields: edited,
            })
            .unwrap();

        assert_eq!(customer_ids(service), vec!["C1001", "C1002", "C1003", "C1004"]);
        let stored = service.get_customer("C1002").unwrap().unwrap();
        assert_eq!(stored.name, "Lakshmi P.");
        assert_eq!(stored.status, SubscriptionStatus::Stopped);
        assert_eq!(stored.due_amount, 0);
    }

    #[test]
    fn test_rows_fall_back_when_plan_deleted() {
        let helper = TestHelper::new();
        helper.plan_repo.delete_plan("P003").unwrap();

        let rows = helper
            .backend
            .customer_service
            .customer_rows(&DisplayConfig::default())
            .unwrap();

        let ananya = rows.iter().find(|row| row.id == "C1004").unwrap();
        assert_eq!(ananya.plan_name, "Unknown Plan");
        assert_eq!(ananya.due_label, "₹1200");
    }

    #[test]
    fn test_delete_unknown_customer_leaves_collection() {
        let helper = TestHelper::new();
        let result = helper
            .backend
            .customer_service
            .delete_customer(DeleteCustomerCommand { customer_id: "C9".to_string() })
            .unwrap();
        assert!(!result.deleted);
        assert_eq!(customer_ids(&helper.backend.customer_service).len(), 4);
    }
}
