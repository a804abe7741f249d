//! # Order Ledger
//!
//! Append-only record of completed orders.
//!
//! ## Snapshot Pattern
//! Each order copies the cart lines and the computed total at the moment it is
//! recorded. Nothing is recomputed later and no order is ever updated or
//! removed.

use chrono::Utc;
use shop_core::{Item, Money, Order, OrderStatus, User};
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Backing rows for the ledger.
#[derive(Debug)]
pub(crate) struct OrderTable {
    rows: Vec<Order>,
    next_id: u64,
}

impl Default for OrderTable {
    fn default() -> Self {
        OrderTable {
            rows: Vec::new(),
            next_id: 1,
        }
    }
}

impl OrderTable {
    pub(crate) fn rows(&self) -> &[Order] {
        &self.rows
    }

    /// Drops every row and returns how many there were. `next_id` is kept.
    pub(crate) fn clear(&mut self) -> usize {
        let removed = self.rows.len();
        self.rows.clear();
        removed
    }
}

/// Ledger operations, borrowed from a locked store session.
pub struct OrderLedger<'a> {
    table: &'a mut OrderTable,
}

impl<'a> OrderLedger<'a> {
    pub(crate) fn new(table: &'a mut OrderTable) -> Self {
        OrderLedger { table }
    }

    /// Appends a completed order for `user` and returns it.
    pub fn record(&mut self, user: &User, items: &[Item], total: Money) -> StoreResult<Order> {
        let id = self.table.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or(StoreError::IdExhausted { entity: "Order" })?;

        let order = Order {
            id,
            user_id: user.id,
            total,
            items: items.to_vec(),
            status: OrderStatus::Completed,
            created_at: Utc::now(),
        };

        self.table.rows.push(order.clone());
        self.table.next_id = next_id;

        info!(
            order_id = id,
            user_id = user.id,
            total = %total,
            items = items.len(),
            "Order recorded"
        );
        Ok(order)
    }

    pub fn get(&self, id: u64) -> Option<&Order> {
        self.table.rows.iter().find(|o| o.id == id)
    }

    /// Orders placed by one user, oldest first.
    pub fn for_user(&self, user_id: u64) -> Vec<&Order> {
        self.table
            .rows
            .iter()
            .filter(|o| o.user_id == user_id)
            .collect()
    }

    /// All orders in insertion order.
    pub fn list(&self) -> &[Order] {
        &self.table.rows
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
