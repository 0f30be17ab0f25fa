use crate::changes::{CartEditor, PricingParameter, QuantityDelta};
use crate::models::{Order, OrderUpdateRequest};
use crate::pricing::PricingEngine;
use backoffice_shared::Masked;

/// Customer fields exposed by the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    Name,
    Email,
    Phone,
    Address,
    Invoice,
}

/// One user action in the edit form
#[derive(Debug, Clone, PartialEq)]
pub enum OrderEdit {
    ChangeQuantity { item_id: String, delta: QuantityDelta },
    RemoveItem { item_id: String },
    SetParameter { key: PricingParameter, raw: String },
    SetCustomerField { field: CustomerField, value: String },
}

/// Editing buffer for a single order.
///
/// Holds the current snapshot and replaces it on every edit; pricing is
/// re-derived after each change. Dropping the session discards the edits.
#[derive(Debug, Clone)]
pub struct EditSession {
    engine: PricingEngine,
    current: Order,
}

impl EditSession {
    /// Start editing `order`. The stored summary is re-derived immediately so
    /// a stale value from the store never reaches the form.
    pub fn open(order: Order, engine: PricingEngine) -> Self {
        let current = engine.price_order(order);
        Self { engine, current }
    }

    pub fn snapshot(&self) -> &Order {
        &self.current
    }

    pub fn apply(&mut self, edit: OrderEdit) {
        let mut next = self.current.clone();

        match edit {
            OrderEdit::ChangeQuantity { item_id, delta } => {
                next.cart_items = CartEditor::change_quantity(&next.cart_items, &item_id, delta);
            }
            OrderEdit::RemoveItem { item_id } => {
                next.cart_items = CartEditor::remove_item(&next.cart_items, &item_id);
            }
            OrderEdit::SetParameter { key, raw } => {
                next.pricing.parameters = CartEditor::update_parameter(&next.pricing.parameters, key, &raw);
            }
            OrderEdit::SetCustomerField { field, value } => {
                let customer = &mut next.customer;
                match field {
                    CustomerField::Name => customer.name = value,
                    CustomerField::Email => customer.email = Masked(value),
                    CustomerField::Phone => customer.phone = Masked(value),
                    CustomerField::Address => customer.address = value,
                    CustomerField::Invoice => customer.invoice = value,
                }
            }
        }

        self.current = self.engine.price_order(next);
    }

    /// Apply several edits in order
    pub fn apply_all<I>(&mut self, edits: I)
    where
        I: IntoIterator<Item = OrderEdit>,
    {
        for edit in edits {
            self.apply(edit);
        }
    }

    pub fn into_order(self) -> Order {
        self.current
    }

    /// Body for `PUT /orders/{id}`
    pub fn into_update_request(self) -> (String, OrderUpdateRequest) {
        let id = self.current.id.clone();
        (id, OrderUpdateRequest::from(self.current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CustomerInfo, LineItem, PricingParameters};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn order() -> Order {
        let mut order = Order::new(
            "1",
            CustomerInfo {
                name: "John Doe".to_string(),
                ..Default::default()
            },
        );
        order.cart_items = vec![
            LineItem::new("a", "Coconut Oil", dec!(99.6), 2),
            LineItem::new("b", "Coconut Water", dec!(10), 1),
        ];
        order.pricing.parameters = PricingParameters {
            discount_percentage: dec!(10),
            delivery_charge: dec!(5),
        };
        order
    }

    #[test]
    fn test_open_prices_order() {
        let session = EditSession::open(order(), PricingEngine::default());
        assert_eq!(session.snapshot().pricing.summary.subtotal, dec!(210));
        assert_eq!(session.snapshot().pricing.summary.final_total, dec!(194));
    }

    #[test]
    fn test_every_edit_reprices() {
        let mut session = EditSession::open(order(), PricingEngine::default());

        session.apply(OrderEdit::ChangeQuantity {
            item_id: "b".to_string(),
            delta: QuantityDelta::Increment,
        });
        assert_eq!(session.snapshot().pricing.summary.subtotal, dec!(220));
        assert_eq!(session.snapshot().pricing.summary.discount_amount, dec!(22));
        assert_eq!(session.snapshot().pricing.summary.final_total, dec!(203));

        session.apply(OrderEdit::SetParameter {
            key: PricingParameter::DeliveryCharge,
            raw: "abc".to_string(),
        });
        assert_eq!(session.snapshot().pricing.parameters.delivery_charge, Decimal::ZERO);
        assert_eq!(session.snapshot().pricing.summary.final_total, dec!(198));
    }

    #[test]
    fn test_removing_last_item_leaves_delivery() {
        let mut session = EditSession::open(order(), PricingEngine::default());
        session.apply_all([
            OrderEdit::RemoveItem { item_id: "a".to_string() },
            OrderEdit::RemoveItem { item_id: "b".to_string() },
        ]);

        let summary = session.snapshot().pricing.summary;
        assert!(session.snapshot().cart_items.is_empty());
        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.discount_amount, Decimal::ZERO);
        assert_eq!(summary.final_total, dec!(5));
    }

    #[test]
    fn test_customer_edit_keeps_pricing() {
        let mut session = EditSession::open(order(), PricingEngine::default());
        session.apply(OrderEdit::SetCustomerField {
            field: CustomerField::Phone,
            value: "0123456789".to_string(),
        });

        assert_eq!(session.snapshot().customer.phone.expose(), "0123456789");
        assert_eq!(session.snapshot().pricing.summary.final_total, dec!(194));
    }

    #[test]
    fn test_into_update_request() {
        let mut session = EditSession::open(order(), PricingEngine::default());
        session.apply(OrderEdit::RemoveItem { item_id: "b".to_string() });

        let (id, body) = session.into_update_request();
        assert_eq!(id, "1");
        assert_eq!(body.cart_items.len(), 1);
        assert_eq!(body.pricing.summary.subtotal, dec!(200));
        assert_eq!(body.pricing.summary.final_total, dec!(185));
    }
}
