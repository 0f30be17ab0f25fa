use crate::models::{LineItem, Order, PricingParameters, PricingSummary};
use backoffice_shared::{percent_of, round_half_up};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Decimal places kept in subtotal and discount (0 = whole currency units)
    #[serde(default)]
    pub minor_unit_digits: u32,

    /// Round each unit price before multiplying by quantity.
    /// When false the subtotal is summed un-rounded and rounded once.
    #[serde(default = "default_round_unit_price")]
    pub round_unit_price: bool,
}

fn default_round_unit_price() -> bool {
    true
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            minor_unit_digits: 0,
            round_unit_price: true,
        }
    }
}

/// Order pricing engine.
///
/// Keeps `subtotal`, `discount_amount` and `final_total` consistent with the
/// cart and the pricing parameters. All three are always derived together.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Derive the pricing summary for a cart.
    ///
    /// Never fails: an empty cart has a zero subtotal and the final total is
    /// not floored, so a discount above 100% or a negative delivery charge
    /// can produce a negative total.
    pub fn recalculate(&self, items: &[LineItem], params: &PricingParameters) -> PricingSummary {
        let digits = self.config.minor_unit_digits;

        let subtotal = if self.config.round_unit_price {
            items.iter().fold(Decimal::ZERO, |acc, item| {
                acc.saturating_add(self.line_total(item))
            })
        } else {
            let raw = items.iter().fold(Decimal::ZERO, |acc, item| {
                acc.saturating_add(item.unit_price.saturating_mul(Decimal::from(item.quantity)))
            });
            round_half_up(raw, digits)
        };

        let discount_amount = round_half_up(percent_of(subtotal, params.discount_percentage), digits);
        let final_total = subtotal
            .saturating_sub(discount_amount)
            .saturating_add(params.delivery_charge);

        PricingSummary {
            subtotal,
            discount_amount,
            final_total,
        }
    }

    /// Line total as it contributes to the subtotal
    pub fn line_total(&self, item: &LineItem) -> Decimal {
        let unit_price = if self.config.round_unit_price {
            round_half_up(item.unit_price, self.config.minor_unit_digits)
        } else {
            item.unit_price
        };
        unit_price.saturating_mul(Decimal::from(item.quantity))
    }

    /// Return `order` with its summary re-derived from its items and parameters
    pub fn price_order(&self, mut order: Order) -> Order {
        order.pricing.summary = self.recalculate(&order.cart_items, &order.pricing.parameters);
        order
    }
}
