use crate::invoice::Invoice;
use crate::models::{Order, OrderStatus};
use crate::pricing::PricingEngine;
use crate::session::EditSession;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

/// Row of the orders table
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub final_total: Decimal,
    pub status: OrderStatus,
}

/// Orders loaded into the back office, plus their status transitions
pub struct OrderManager {
    engine: PricingEngine,
    orders: HashMap<String, Order>,
    // insertion order, so the table keeps a stable layout
    order_ids: Vec<String>,
}

impl OrderManager {
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            engine,
            orders: HashMap::new(),
            order_ids: Vec::new(),
        }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Add or replace an order, re-deriving its pricing
    pub fn insert(&mut self, order: Order) {
        let order = self.engine.price_order(order);
        if !self.orders.contains_key(&order.id) {
            self.order_ids.push(order.id.clone());
        }
        self.orders.insert(order.id.clone(), order);
    }

    pub fn get_order(&self, order_id: &str) -> Option<&Order> {
        self.orders.get(order_id)
    }

    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.order_ids.iter().filter_map(|id| self.orders.get(id))
    }

    /// Table rows in insertion order
    pub fn list(&self) -> Vec<OrderRow> {
        self.orders()
            .map(|order| OrderRow {
                id: order.id.clone(),
                customer_name: order.customer.name.clone(),
                phone: order.customer.phone.expose().clone(),
                final_total: order.pricing.summary.final_total,
                status: order.status,
            })
            .collect()
    }

    /// Open an edit session on a pending order
    pub fn open_edit(&self, order_id: &str) -> Result<EditSession, OrderError> {
        let order = self
            .get_order(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;

        if !order.is_editable() {
            return Err(OrderError::NotEditable {
                id: order_id.to_string(),
                status: order.status,
            });
        }

        Ok(EditSession::open(order.clone(), self.engine.clone()))
    }

    /// Store the result of an edit session, replacing the order with the same id
    pub fn commit_edit(&mut self, session: EditSession) -> Result<&Order, OrderError> {
        let edited = session.into_order();
        let current = self.get_order_mut(&edited.id)?;

        if !current.is_editable() {
            return Err(OrderError::NotEditable {
                id: edited.id.clone(),
                status: current.status,
            });
        }

        tracing::info!(
            order_id = %edited.id,
            final_total = %edited.pricing.summary.final_total,
            "order edit committed"
        );
        *current = edited;
        Ok(&*current)
    }

    pub fn delete(&mut self, order_id: &str) -> Result<Order, OrderError> {
        let removed = self
            .orders
            .remove(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        self.order_ids.retain(|id| id != order_id);

        tracing::info!(order_id, "order deleted");
        Ok(removed)
    }

    /// Transition: Pending → Confirmed, returning the invoice to print
    pub fn confirm(&mut self, order_id: &str) -> Result<Invoice, OrderError> {
        self.transition(order_id, OrderStatus::Confirmed, &[OrderStatus::Pending])?;

        let order = self
            .get_order(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))?;
        Ok(Invoice::for_order(order, &self.engine, Utc::now()))
    }

    /// Transition: Pending | Confirmed → Canceled
    pub fn cancel(&mut self, order_id: &str) -> Result<(), OrderError> {
        self.transition(
            order_id,
            OrderStatus::Canceled,
            &[OrderStatus::Pending, OrderStatus::Confirmed],
        )
    }

    /// Transition: Confirmed → Returned
    pub fn mark_returned(&mut self, order_id: &str) -> Result<(), OrderError> {
        self.transition(order_id, OrderStatus::Returned, &[OrderStatus::Confirmed])
    }

    fn transition(&mut self, order_id: &str, to: OrderStatus, allowed_from: &[OrderStatus]) -> Result<(), OrderError> {
        let order = self.get_order_mut(order_id)?;

        if !allowed_from.contains(&order.status) {
            return Err(OrderError::InvalidTransition { from: order.status, to });
        }

        tracing::info!(order_id, from = %order.status, to = %to, "order status changed");
        order.status = to;
        Ok(())
    }

    fn get_order_mut(&mut self, order_id: &str) -> Result<&mut Order, OrderError> {
        self.orders
            .get_mut(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }
}

impl Default for OrderManager {
    fn default() -> Self {
        Self::new(PricingEngine::default())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order {id} is {status} and can no longer be edited")]
    NotEditable { id: String, status: OrderStatus },
}
