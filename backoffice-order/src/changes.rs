use crate::models::{LineItem, PricingParameters};
use backoffice_shared::parse_amount;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Step applied by the quantity buttons of the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityDelta {
    Increment,
    Decrement,
}

impl FromStr for QuantityDelta {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+1" | "+" | "inc" => Ok(QuantityDelta::Increment),
            "-1" | "-" | "dec" => Ok(QuantityDelta::Decrement),
            other => Err(ChangeError::InvalidDelta(other.to_string())),
        }
    }
}

/// Editable pricing input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingParameter {
    DiscountPercentage,
    DeliveryCharge,
}

impl FromStr for PricingParameter {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discountPercentage" | "discount_percentage" => Ok(PricingParameter::DiscountPercentage),
            "deliveryCharge" | "delivery_charge" => Ok(PricingParameter::DeliveryCharge),
            other => Err(ChangeError::UnknownParameter(other.to_string())),
        }
    }
}

/// Pure edits over cart snapshots.
///
/// Every operation returns a new value and leaves its input untouched.
/// Ids that are not in the cart are ignored: the form only sends ids it
/// rendered from the same snapshot.
pub struct CartEditor;

impl CartEditor {
    /// Bump a line's quantity by one. Decrementing stops at 1; removal is
    /// a separate operation.
    pub fn change_quantity(items: &[LineItem], item_id: &str, delta: QuantityDelta) -> Vec<LineItem> {
        if !items.iter().any(|item| item.id == item_id) {
            tracing::debug!(item_id, "quantity change for unknown item ignored");
        }

        items
            .iter()
            .map(|item| {
                if item.id != item_id {
                    return item.clone();
                }
                let quantity = match delta {
                    QuantityDelta::Increment => item.quantity.saturating_add(1),
                    QuantityDelta::Decrement => item.quantity.saturating_sub(1).max(1),
                };
                LineItem {
                    quantity,
                    ..item.clone()
                }
            })
            .collect()
    }

    /// Drop the line with `item_id`
    pub fn remove_item(items: &[LineItem], item_id: &str) -> Vec<LineItem> {
        let remaining: Vec<LineItem> = items.iter().filter(|item| item.id != item_id).cloned().collect();

        if remaining.len() == items.len() {
            tracing::debug!(item_id, "removal of unknown item ignored");
        }
        remaining
    }

    /// Set a pricing parameter from raw form input.
    ///
    /// Input that is not a number becomes 0. Values are not clamped.
    pub fn update_parameter(params: &PricingParameters, key: PricingParameter, raw: &str) -> PricingParameters {
        let value = parse_amount(raw).unwrap_or_else(|| {
            tracing::debug!(?key, raw, "non-numeric pricing input normalized to 0");
            Decimal::ZERO
        });

        match key {
            PricingParameter::DiscountPercentage => PricingParameters {
                discount_percentage: value,
                ..*params
            },
            PricingParameter::DeliveryCharge => PricingParameters {
                delivery_charge: value,
                ..*params
            },
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChangeError {
    #[error("Unknown pricing parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid quantity step: {0}")]
    InvalidDelta(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn cart() -> Vec<LineItem> {
        vec![
            LineItem::new("water", "Coconut Water", dec!(5), 2),
            LineItem::new("oil", "Coconut Oil", dec!(10), 1),
        ]
    }

    #[test]
    fn test_increment() {
        let items = cart();
        let updated = CartEditor::change_quantity(&items, "water", QuantityDelta::Increment);

        assert_eq!(updated[0].quantity, 3);
        assert_eq!(updated[1].quantity, 1);
        // input snapshot untouched
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let items = cart();
        let updated = CartEditor::change_quantity(&items, "oil", QuantityDelta::Decrement);
        assert_eq!(updated[1].quantity, 1);

        let updated = CartEditor::change_quantity(&items, "water", QuantityDelta::Decrement);
        assert_eq!(updated[0].quantity, 1);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let items = cart();
        assert_eq!(CartEditor::change_quantity(&items, "milk", QuantityDelta::Increment), items);
        assert_eq!(CartEditor::remove_item(&items, "milk"), items);
    }

    #[test]
    fn test_remove_item() {
        let items = cart();
        let updated = CartEditor::remove_item(&items, "water");

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].id, "oil");
    }

    #[test]
    fn test_update_parameter() {
        let params = PricingParameters {
            discount_percentage: dec!(10),
            delivery_charge: dec!(5),
        };

        let updated = CartEditor::update_parameter(&params, PricingParameter::DeliveryCharge, "12.5");
        assert_eq!(updated.delivery_charge, dec!(12.5));
        assert_eq!(updated.discount_percentage, dec!(10));

        let updated = CartEditor::update_parameter(&params, PricingParameter::DiscountPercentage, "abc");
        assert_eq!(updated.discount_percentage, Decimal::ZERO);
        assert_eq!(updated.delivery_charge, dec!(5));
    }

    #[test]
    fn test_update_parameter_rejects_digit_separators() {
        let params = PricingParameters {
            discount_percentage: dec!(10),
            delivery_charge: dec!(5),
        };

        let updated = CartEditor::update_parameter(&params, PricingParameter::DeliveryCharge, "1_000");
        assert_eq!(updated.delivery_charge, Decimal::ZERO);
        assert_eq!(updated.discount_percentage, dec!(10));
    }

    #[test]
    fn test_update_parameter_does_not_clamp() {
        let params = PricingParameters::default();
        let updated = CartEditor::update_parameter(&params, PricingParameter::DiscountPercentage, "150");
        assert_eq!(updated.discount_percentage, dec!(150));
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("discountPercentage".parse(), Ok(PricingParameter::DiscountPercentage));
        assert_eq!("deliveryCharge".parse(), Ok(PricingParameter::DeliveryCharge));
        assert!("tax".parse::<PricingParameter>().is_err());
        assert_eq!("+1".parse(), Ok(QuantityDelta::Increment));
        assert_eq!("-1".parse(), Ok(QuantityDelta::Decrement));
        assert!("2".parse::<QuantityDelta>().is_err());
    }

    proptest! {
        #[test]
        fn test_quantity_never_below_one(start in 1u32..5, steps in proptest::collection::vec(any::<bool>(), 0..20)) {
            let mut items = vec![LineItem::new("a", "item", dec!(1), start)];
            for up in steps {
                let delta = if up { QuantityDelta::Increment } else { QuantityDelta::Decrement };
                items = CartEditor::change_quantity(&items, "a", delta);
                prop_assert!(items[0].quantity >= 1);
            }
        }
    }
}
