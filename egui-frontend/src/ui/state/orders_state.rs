//! # Orders State Module
//!
//! Search text and area filter of the orders view. The query itself is
//! evaluated by the backend on every frame.

use backend::domain::commands::order::{AreaFilter, OrderListQuery};

#[derive(Debug, Clone, Default)]
pub struct OrdersState {
    pub query: OrderListQuery,
}

impl OrdersState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_area(&mut self, area: AreaFilter) {
        self.query.area = area;
    }
}
