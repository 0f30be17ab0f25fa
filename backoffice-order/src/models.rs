use backoffice_shared::Masked;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status as stored by the remote API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Canceled,
    Returned,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Canceled => "canceled",
            OrderStatus::Returned => "returned",
        };
        f.write_str(label)
    }
}

/// One product line in an order's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    #[serde(alias = "price")]
    pub unit_price: Decimal,
    #[serde(alias = "qty")]
    pub quantity: u32,
}

impl LineItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }
}

/// Operator-editable pricing inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingParameters {
    #[serde(default)]
    pub discount_percentage: Decimal,
    #[serde(default)]
    pub delivery_charge: Decimal,
}

/// Values derived from the cart and the parameters.
///
/// Only produced by `PricingEngine::recalculate`; never edited field by field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PricingSummary {
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    #[serde(default)]
    pub final_total: Decimal,
}

/// The `pricing` object of an order: parameters and summary side by side
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderPricing {
    #[serde(flatten)]
    pub parameters: PricingParameters,
    #[serde(flatten)]
    pub summary: PricingSummary,
}

/// Customer details carried along with an order. Opaque to pricing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(alias = "customerName")]
    pub name: String,
    #[serde(default)]
    pub email: Masked<String>,
    #[serde(default)]
    pub phone: Masked<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub invoice: String,
}

/// A customer order as loaded from the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: CustomerInfo,
    #[serde(default)]
    pub cart_items: Vec<LineItem>,
    #[serde(default)]
    pub pricing: OrderPricing,
    #[serde(default)]
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: impl Into<String>, customer: CustomerInfo) -> Self {
        Self {
            id: id.into(),
            customer,
            cart_items: Vec::new(),
            pricing: OrderPricing::default(),
            status: OrderStatus::Pending,
        }
    }

    pub fn is_editable(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    pub fn item_count(&self) -> u32 {
        self.cart_items.iter().map(|item| item.quantity).sum()
    }
}

/// Body of `PUT /orders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdateRequest {
    pub customer: CustomerInfo,
    pub cart_items: Vec<LineItem>,
    pub pricing: OrderPricing,
    pub status: OrderStatus,
}

impl From<Order> for OrderUpdateRequest {
    fn from(order: Order) -> Self {
        Self {
            customer: order.customer,
            cart_items: order.cart_items,
            pricing: order.pricing,
            status: order.status,
        }
    }
}
