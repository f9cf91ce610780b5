use anyhow::Result;
use log::info;
use shared::Order;
use std::sync::Arc;

use super::connection::{find_by_id, read_collection, replace_in_place, write_collection, MemoryConnection};
use crate::storage::traits::OrderStorage;

const COLLECTION: &str = "Order";

/// In-memory order repository
#[derive(Clone)]
pub struct OrderRepository {
    connection: Arc<MemoryConnection>,
}

impl OrderRepository {
    pub fn new(connection: Arc<MemoryConnection>) -> Self {
        Self { connection }
    }
}

impl OrderStorage for OrderRepository {
    fn list_orders(&self) -> Result<Vec<Order>> {
        read_collection(self.connection.orders(), COLLECTION, |orders| orders.to_vec())
    }

    fn get_order(&self, order_id: &str) -> Result<Option<Order>> {
        read_collection(self.connection.orders(), COLLECTION, |orders| find_by_id(orders, order_id))
    }

    fn update_order(&self, order: &Order) -> Result<()> {
        write_collection(self.connection.orders(), COLLECTION, |orders| {
            replace_in_place(orders, order, COLLECTION)
        })??;
        info!("Updated order {} (status: {})", order.id, order.status);
        Ok(())
    }
}
