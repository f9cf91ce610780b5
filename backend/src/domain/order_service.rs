use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use shared::{DisplayConfig, Order, OrderRow};
use std::sync::Arc;

use crate::domain::commands::order::{
    AssignDriverCommand, AssignDriverResult, AutoAssignResult, OrderListQuery,
    UpdateOrderStatusCommand, UpdateOrderStatusResult,
};
use crate::domain::listing;
use crate::storage::memory::MemoryConnection;
use crate::storage::traits::{DriverStorage, OrderStorage};
use crate::storage::{DriverRepository, OrderRepository};

/// Service for today's delivery orders
#[derive(Clone)]
pub struct OrderService {
    order_repository: OrderRepository,
    driver_repository: DriverRepository,
}

impl OrderService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self {
            order_repository: OrderRepository::new(connection.clone()),
            driver_repository: DriverRepository::new(connection),
        }
    }

    /// Orders matching the search text AND the area filter
    pub fn list_orders(&self, query: &OrderListQuery) -> Result<Vec<Order>> {
        let orders = self.order_repository.list_orders()?;
        let filtered = listing::filter_orders(&orders, query);
        debug!(
            "Order filter search='{}' area={}: {} of {}",
            query.search,
            query.area.label(),
            filtered.len(),
            orders.len()
        );
        Ok(filtered)
    }

    /// Filtered orders with driver references resolved for display
    pub fn order_rows(&self, query: &OrderListQuery, config: &DisplayConfig) -> Result<Vec<OrderRow>> {
        let orders = self.list_orders(query)?;
        let drivers = self.driver_repository.list_drivers()?;
        Ok(listing::order_rows(&orders, &drivers, config))
    }

    /// Overwrite the status of one order. There is no transition guard here;
    /// the view is what stops offering buttons once an order is delivered.
    pub fn update_order_status(&self, command: UpdateOrderStatusCommand) -> Result<UpdateOrderStatusResult> {
        let mut order = self
            .order_repository
            .get_order(&command.order_id)?
            .ok_or_else(|| anyhow!("Order not found: {}", command.order_id))?;

        let previous_status = order.status;
        order.status = command.status;
        self.order_repository.update_order(&order)?;

        info!("Order {} status: {} -> {}", order.id, previous_status, order.status);
        Ok(UpdateOrderStatusResult {
            success_message: format!("Order {} marked {}", order.id, order.status),
            order,
            previous_status,
        })
    }

    /// Set or clear the driver of an order. The driver id is not checked
    /// against the driver collection.
    pub fn assign_driver(&self, command: AssignDriverCommand) -> Result<AssignDriverResult> {
        let mut order = self
            .order_repository
            .get_order(&command.order_id)?
            .ok_or_else(|| anyhow!("Order not found: {}", command.order_id))?;

        order.driver_id = command.driver_id;
        self.order_repository.update_order(&order)?;

        let success_message = match &order.driver_id {
            Some(driver_id) => format!("Order {} assigned to {}", order.id, driver_id),
            None => format!("Order {} unassigned", order.id),
        };
        info!("{}", success_message);
        Ok(AssignDriverResult { order, success_message })
    }

    /// Give every unassigned order to the first active driver covering its area
    pub fn auto_assign_drivers(&self) -> Result<AutoAssignResult> {
        let orders = self.order_repository.list_orders()?;
        let drivers = self.driver_repository.list_drivers()?;

        let mut assignments = Vec::new();
        let mut still_unassigned = Vec::new();

        for mut order in orders.into_iter().filter(|order| order.driver_id.is_none()) {
            let candidate = drivers
                .iter()
                .find(|driver| driver.is_active && driver.assigned_area == order.area);

            match candidate {
                Some(driver) => {
                    order.driver_id = Some(driver.id.clone());
                    self.order_repository.update_order(&order)?;
                    assignments.push((order.id.clone(), driver.id.clone()));
                }
                None => {
                    warn!("No active driver covers {} for order {}", order.area, order.id);
                    still_unassigned.push(order.id);
                }
            }
        }

        info!(
            "Auto-assigned {} orders, {} left unassigned",
            assignments.len(),
            still_unassigned.len()
        );
        Ok(AutoAssignResult {
            success_message: format!("Assigned drivers to {} orders", assignments.len()),
            assignments,
            still_unassigned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::order::AreaFilter;
    use crate::storage::memory::test_utils::TestHelper;
    use shared::{DeliveryStatus, Zone};

    fn ids(orders: &[Order]) -> Vec<&str> {
        orders.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_mark_ord_003_delivered_changes_only_its_status() {
        let helper = TestHelper::new();
        let service = &helper.backend.order_service;
        let before = helper.order_repo.list_orders().unwrap();

        let result = service
            .update_order_status(UpdateOrderStatusCommand {
                order_id: "ORD-003".to_string(),
                status: DeliveryStatus::Delivered,
            })
            .unwrap();
        assert_eq!(result.previous_status, DeliveryStatus::Pending);

        let after = helper.order_repo.list_orders().unwrap();
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1], before[1]);

        let mut expected = before[2].clone();
        expected.status = DeliveryStatus::Delivered;
        assert_eq!(after[2], expected);
    }

    #[test]
    fn test_status_overwrite_has_no_guard() {
        let helper = TestHelper::new();
        let result = helper
            .backend
            .order_service
            .update_order_status(UpdateOrderStatusCommand {
                order_id: "ORD-001".to_string(),
                status: DeliveryStatus::Pending,
            })
            .unwrap();
        assert_eq!(result.previous_status, DeliveryStatus::Delivered);
        assert_eq!(result.order.status, DeliveryStatus::Pending);
    }

    #[test]
    fn test_list_orders_by_area_and_search() {
        let helper = TestHelper::new();
        let service = &helper.backend.order_service;

        let gachibowli = service
            .list_orders(&OrderListQuery {
                search: String::new(),
                area: AreaFilter::Zone(Zone::Gachibowli),
            })
            .unwrap();
        assert_eq!(ids(&gachibowli), vec!["ORD-002"]);

        let lakshmi = service
            .list_orders(&OrderListQuery {
                search: "lakshmi".to_string(),
                area: AreaFilter::Zone(Zone::Gachibowli),
            })
            .unwrap();
        assert_eq!(ids(&lakshmi), vec!["ORD-002"]);
    }

    #[test]
    fn test_unknown_order_is_an_error() {
        let helper = TestHelper::new();
        let result = helper.backend.order_service.update_order_status(UpdateOrderStatusCommand {
            order_id: "ORD-404".to_string(),
            status: DeliveryStatus::Skipped,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_assign_and_clear_driver() {
        let helper = TestHelper::new();
        let service = &helper.backend.order_service;

        let assigned = service
            .assign_driver(AssignDriverCommand {
                order_id: "ORD-003".to_string(),
                driver_id: Some("D003".to_string()),
            })
            .unwrap();
        assert_eq!(assigned.order.driver_id.as_deref(), Some("D003"));

        let cleared = service
            .assign_driver(AssignDriverCommand {
                order_id: "ORD-001".to_string(),
                driver_id: None,
            })
            .unwrap();
        assert_eq!(cleared.order.driver_id, None);
        assert_eq!(cleared.order.status, DeliveryStatus::Delivered);
    }

    #[test]
    fn test_auto_assign_matches_area_of_active_drivers() {
        let helper = TestHelper::new();
        let service = &helper.backend.order_service;

        // ORD-003 is in Jubilee Hills, which no fixture driver covers
        let first = service.auto_assign_drivers().unwrap();
        assert!(first.assignments.is_empty());
        assert_eq!(first.still_unassigned, vec!["ORD-003".to_string()]);

        let mut d003 = helper.driver_repo.get_driver("D003").unwrap().unwrap();
        d003.assigned_area = Zone::JubileeHills;
        helper.driver_repo.update_driver(&d003).unwrap();

        let second = service.auto_assign_drivers().unwrap();
        assert_eq!(second.assignments, vec![("ORD-003".to_string(), "D003".to_string())]);
        let order = helper.order_repo.get_order("ORD-003").unwrap().unwrap();
        assert_eq!(order.driver_id.as_deref(), Some("D003"));
    }

    #[test]
    fn test_auto_assign_skips_inactive_drivers() {
        let helper = TestHelper::new();
        let mut d003 = helper.driver_repo.get_driver("D003").unwrap().unwrap();
        d003.assigned_area = Zone::JubileeHills;
        d003.is_active = false;
        helper.driver_repo.update_driver(&d003).unwrap();

        let result = helper.backend.order_service.auto_assign_drivers().unwrap();
        assert!(result.assignments.is_empty());
    }

    #[test]
    fn test_order_rows_flag_delivered_as_final() {
        let helper = TestHelper::new();
        let rows = helper
            .backend
            .order_service
            .order_rows(&OrderListQuery::default(), &DisplayConfig::default())
            .unwrap();
        let flags: Vec<bool> = rows.iter().map(|row| row.can_change_status).collect();
        assert_eq!(flags, vec![false, true, true]);
    }
}
