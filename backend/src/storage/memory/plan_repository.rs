use anyhow::Result;
use log::info;
use shared::Plan;
use std::sync::Arc;

use super::connection::{
    append_unique, find_by_id, read_collection, remove_by_id, replace_in_place, write_collection,
    MemoryConnection,
};
use crate::storage::traits::PlanStorage;

const COLLECTION: &str = "Plan";

/// In-memory plan repository
#[derive(Clone)]
pub struct PlanRepository {
    connection: Arc<MemoryConnection>,
}

impl PlanRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl PlanStorage for PlanRepository {
    fn list_plans(&self) -> Result<Vec<Plan>> {
        read_collection(self.connection.plans(), COLLECTION, |plans| plans.to_vec())
    }

    fn get_plan(&self, plan_id: &str) -> Result<Option<Plan>> {
        read_collection(self.connection.plans(), COLLECTION, |plans| find_by_id(plans, plan_id))
    }

    fn store_plan(&self, plan: &Plan) -> Result<()> {
        write_collection(self.connection.plans(), COLLECTION, |plans| {
            append_unique(plans, plan, COLLECTION)
        })??;
        info!("Stored plan {} ({})", plan.id, plan.name);
        Ok(())
    }

    fn update_plan(&self, plan: &Plan) -> Result<()> {
        write_collection(self.connection.plans(), COLLECTION, |plans| {
            replace_in_place(plans, plan, COLLECTION)
        })??;
        info!("Updated plan {} ({})", plan.id, plan.name);
        Ok(())
    }

    fn delete_plan(&self, plan_id: &str) -> Result<bool> {
        write_collection(self.connection.plans(), COLLECTION, |plans| remove_by_id(plans, plan_id))
    }
}
