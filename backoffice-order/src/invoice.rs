use crate::models::Order;
use crate::pricing::PricingEngine;
use backoffice_shared::format_amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Printed when an order is confirmed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub number: String,
    pub order_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub rows: Vec<InvoiceRow>,
    pub subtotal: Decimal,
    pub discount_percentage: Decimal,
    pub discount_amount: Decimal,
    pub delivery_charge: Decimal,
    pub total: Decimal,
    pub issued_at: DateTime<Utc>,
    #[serde(skip)]
    digits: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub position: usize,
    pub product: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

impl Invoice {
    /// Build the invoice from the engine's view of the order, so the printed
    /// totals always match what the edit form showed.
    pub fn for_order(order: &Order, engine: &PricingEngine, issued_at: DateTime<Utc>) -> Self {
        let summary = engine.recalculate(&order.cart_items, &order.pricing.parameters);

        let rows = order
            .cart_items
            .iter()
            .enumerate()
            .map(|(i, item)| InvoiceRow {
                position: i + 1,
                product: item.name.clone(),
                quantity: item.quantity,
                unit_price: item.unit_price,
                line_total: engine.line_total(item),
            })
            .collect();

        let number = if order.customer.invoice.is_empty() {
            format!("INV-{}", order.id)
        } else {
            order.customer.invoice.clone()
        };

        Self {
            number,
            order_id: order.id.clone(),
            customer_name: order.customer.name.clone(),
            email: order.customer.email.expose().clone(),
            phone: order.customer.phone.expose().clone(),
            address: order.customer.address.clone(),
            rows,
            subtotal: summary.subtotal,
            discount_percentage: order.pricing.parameters.discount_percentage,
            discount_amount: summary.discount_amount,
            delivery_charge: order.pricing.parameters.delivery_charge,
            total: summary.final_total,
            issued_at,
            digits: engine.config().minor_unit_digits.max(2),
        }
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let money = |value: Decimal| format_amount(value, self.digits);

        writeln!(f, "Order Invoice")?;
        writeln!(f, "Invoice: {}", self.number)?;
        writeln!(f, "Date: {}", self.issued_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f, "Customer: {}", self.customer_name)?;
        writeln!(f, "Email: {}", self.email)?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f)?;
        writeln!(f, "{:>3}  {:<24} {:>5} {:>10} {:>10}", "#", "Product", "Qty", "Price", "Total")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>3}  {:<24} {:>5} {:>10} {:>10}",
                row.position,
                row.product,
                row.quantity,
                money(row.unit_price),
                money(row.line_total)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Subtotal: {}", money(self.subtotal))?;
        if !self.discount_amount.is_zero() {
            writeln!(
                f,
                "Discount ({}%): -{}",
                self.discount_percentage.normalize(),
                money(self.discount_amount)
            )?;
        }
        writeln!(f, "Delivery: {}", money(self.delivery_charge))?;
        write!(f, "Total: {}", money(self.total))
    }
}
