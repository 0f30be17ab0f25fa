use backoffice_shared::{parse_amount_or_zero, percent_of, round_half_up};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stock label shown in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ProductStatus {
    #[default]
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Limited")]
    Limited,
}

/// Catalog product as stored by the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    /// Hosted image URL
    pub img: String,
    pub name: String,
    #[serde(default)]
    pub short_desc: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub country: String,
    pub category: String,
    #[serde(default)]
    pub stock: u32,
    pub price: Decimal,
    /// Percentage off `price`
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub description: Vec<String>,
}

impl Product {
    /// Price after the product discount, never below zero, to the cent
    pub fn final_price(&self) -> Decimal {
        final_price(self.price, self.discount)
    }
}

/// `max(price - price * discount / 100, 0)` rounded to two places
pub fn final_price(price: Decimal, discount: Decimal) -> Decimal {
    let discounted = price.saturating_sub(percent_of(price, discount));
    round_half_up(discounted.max(Decimal::ZERO), 2)
}

/// Values collected by the add/edit product form, numeric fields still raw
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub img: String,
    pub name: String,
    pub short_desc: String,
    pub brand: String,
    pub country: String,
    pub category: String,
    pub stock: String,
    pub price: String,
    pub discount: String,
    pub status: ProductStatus,
    pub description: Vec<String>,
}

impl ProductDraft {
    /// Turn the form into a product under `id`.
    ///
    /// Numeric fields that do not parse count as zero; blank description
    /// lines are dropped.
    pub fn validate(self, id: impl Into<String>) -> Result<Product, ProductError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ProductError::MissingName);
        }
        if self.img.trim().is_empty() {
            return Err(ProductError::MissingImage);
        }

        let stock = parse_amount_or_zero(&self.stock)
            .max(Decimal::ZERO)
            .trunc()
            .to_u32()
            .unwrap_or(u32::MAX);

        let description = self
            .description
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        let category = if self.category.trim().is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category
        };

        Ok(Product {
            id: id.into(),
            img: self.img,
            name,
            short_desc: self.short_desc,
            brand: self.brand,
            country: self.country,
            category,
            stock,
            price: parse_amount_or_zero(&self.price).max(Decimal::ZERO),
            discount: parse_amount_or_zero(&self.discount),
            status: self.status,
            description,
        })
    }
}

pub const DEFAULT_CATEGORY: &str = "Food";

/// Product-related errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProductError {
    #[error("Product name is required")]
    MissingName,

    #[error("Please upload product image")]
    MissingImage,
}
