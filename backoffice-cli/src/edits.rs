//! Command-line edit syntax.
//!
//! `qty:<item>:+1`, `qty:<item>:-1`, `remove:<item>`,
//! `discountPercentage=<value>`, `deliveryCharge=<value>`,
//! `name=<value>` (also `email`, `phone`, `address`, `invoice`) and `confirm`.

use backoffice_order::{CustomerField, OrderEdit, PricingParameter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Edit(OrderEdit),
    Confirm,
}

impl FromStr for Command {
    type Err = ParseEditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "confirm" {
            return Ok(Command::Confirm);
        }

        if let Some(rest) = s.strip_prefix("qty:") {
            let (item_id, step) = rest
                .rsplit_once(':')
                .ok_or_else(|| ParseEditError::Malformed(s.to_string()))?;
            let delta = step.parse().map_err(|_| ParseEditError::Malformed(s.to_string()))?;
            return Ok(Command::Edit(OrderEdit::ChangeQuantity {
                item_id: item_id.to_string(),
                delta,
            }));
        }

        if let Some(item_id) = s.strip_prefix("remove:") {
            return Ok(Command::Edit(OrderEdit::RemoveItem {
                item_id: item_id.to_string(),
            }));
        }

        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| ParseEditError::Malformed(s.to_string()))?;

        if let Ok(key) = key.parse::<PricingParameter>() {
            return Ok(Command::Edit(OrderEdit::SetParameter {
                key,
                raw: value.to_string(),
            }));
        }

        let field = match key {
            "name" => CustomerField::Name,
            "email" => CustomerField::Email,
            "phone" => CustomerField::Phone,
            "address" => CustomerField::Address,
            "invoice" => CustomerField::Invoice,
            other => return Err(ParseEditError::UnknownField(other.to_string())),
        };

        Ok(Command::Edit(OrderEdit::SetCustomerField {
            field,
            value: value.to_string(),
        }))
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseEditError {
    #[error("Cannot parse edit `{0}`")]
    Malformed(String),

    #[error("Unknown field `{0}`")]
    UnknownField(String),
}
