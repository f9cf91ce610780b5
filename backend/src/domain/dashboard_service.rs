//! # Dashboard Service
//!
//! Overview figures for the landing view.
//!
//! Customer and delivery counts are computed from the live collections. The
//! revenue and pending-payment cards, and both chart series, are placeholder
//! fixture values; they are tagged `FigureSource::Fixture` so the view can
//! tell them apart and nothing pretends they were derived.

use anyhow::Result;
use log::debug;
use shared::{
    Customer, DashboardSummary, DeliveryStatus, FigureSource, Order, PlanShare, RevenuePoint,
    StatFigure, SubscriptionStatus,
};
use std::sync::Arc;

use crate::storage::fixtures;
use crate::storage::memory::MemoryConnection;
use crate::storage::traits::{CustomerStorage, OrderStorage};
use crate::storage::{CustomerRepository, OrderRepository};

#[derive(Clone)]
pub struct DashboardService {
    customer_repository: CustomerRepository,
    order_repository: OrderRepository,
}

impl DashboardService {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self {
            customer_repository: CustomerRepository::new(connection.clone()),
            order_repository: OrderRepository::new(connection),
        }
    }

    pub fn summary(&self) -> Result<DashboardSummary> {
        let customers = self.customer_repository.list_customers()?;
        let orders = self.order_repository.list_orders()?;
        let summary = summarize(&customers, &orders);
        debug!(
            "Dashboard: {} active of {} customers, {} pending of {} deliveries",
            summary.active_customers,
            summary.total_customers,
            summary.pending_deliveries,
            summary.todays_deliveries
        );
        Ok(summary)
    }

    /// Monthly revenue series for the area chart
    pub fn revenue_series(&self) -> Vec<RevenuePoint> {
        fixtures::revenue_series()
    }

    /// Plan share series for the distribution chart
    pub fn plan_distribution(&self) -> Vec<PlanShare> {
        fixtures::plan_distribution()
    }
}

fn fixture_figure(title: &str, (value, subtext): (&str, &str), alert: bool) -> StatFigure {
    StatFigure {
        title: title.to_string(),
        value: value.to_string(),
        subtext: subtext.to_string(),
        alert,
        source: FigureSource::Fixture,
    }
}

/// Build the four stat cards in display order
pub fn summarize(customers: &[Customer], orders: &[Order]) -> DashboardSummary {
    let active_customers = customers
        .iter()
        .filter(|customer| customer.status == SubscriptionStatus::Active)
        .count();
    let pending_deliveries = orders
        .iter()
        .filter(|order| order.status == DeliveryStatus::Pending)
        .count();

    let cards = vec![
        StatFigure {
            title: "Total Active Customers".to_string(),
            value: active_customers.to_string(),
            subtext: format!("Total: {}", customers.len()),
            alert: false,
            source: FigureSource::Live,
        },
        fixture_figure("Monthly Revenue (MRR)", fixtures::MONTHLY_REVENUE_FIGURE, false),
        StatFigure {
            title: "Today's Deliveries".to_string(),
            value: orders.len().to_string(),
            subtext: format!("{} Pending", pending_deliveries),
            alert: pending_deliveries > 0,
            source: FigureSource::Live,
        },
        fixture_figure("Pending Payments", fixtures::PENDING_PAYMENTS_FIGURE, true),
    ];

    DashboardSummary {
        active_customers,
        total_customers: customers.len(),
        todays_deliveries: orders.len(),
        pending_deliveries,
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::customer::DeleteCustomerCommand;
    use crate::domain::commands::order::UpdateOrderStatusCommand;
    use crate::storage::memory::test_utils::TestHelper;

    #[test]
    fn test_fixture_summary() {
        let helper = TestHelper::new();
        let summary = helper.backend.dashboard_service.summary().unwrap();

        assert_eq!(summary.active_customers, 3);
        assert_eq!(summary.total_customers, 4);
        assert_eq!(summary.todays_deliveries, 3);
        assert_eq!(summary.pending_deliveries, 1);

        let titles: Vec<&str> = summary.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Total Active Customers", "Monthly Revenue (MRR)", "Today's Deliveries", "Pending Payments"]
        );
        assert_eq!(summary.cards[0].subtext, "Total: 4");
        assert_eq!(summary.cards[2].subtext, "1 Pending");
        assert!(summary.cards[2].alert);
    }

    #[test]
    fn test_live_figures_follow_mutations_and_fixture_figures_do_not() {
        let helper = TestHelper::new();
        let backend = &helper.backend;
        let before = backend.dashboard_service.summary().unwrap();

        backend
            .customer_service
            .delete_customer(DeleteCustomerCommand { customer_id: "C1002".to_string() })
            .unwrap();
        backend
            .order_service
            .update_order_status(UpdateOrderStatusCommand {
                order_id: "ORD-003".to_string(),
                status: DeliveryStatus::Delivered,
            })
            .unwrap();

        let after = backend.dashboard_service.summary().unwrap();
        assert_eq!(after.active_customers, 2);
        assert_eq!(after.pending_deliveries, 0);
        assert!(!after.cards[2].alert);

        for (old, new) in before.cards.iter().zip(&after.cards) {
            if new.source == FigureSource::Fixture {
                assert_eq!(old, new);
            }
        }
        assert_eq!(after.cards[1].value, "₹1,45,000");
        assert_eq!(after.cards[3].value, "₹24,500");
    }

    #[test]
    fn test_chart_series() {
        let helper = TestHelper::new();
        let revenue = helper.backend.dashboard_service.revenue_series();
        assert_eq!(revenue.len(), 6);
        assert_eq!(revenue[0].month, "Jan");
        assert_eq!(revenue[5].revenue, 60000);

        let shares = helper.backend.dashboard_service.plan_distribution();
        assert_eq!(shares.iter().map(|s| s.value).sum::<u32>(), 100);
    }
}
