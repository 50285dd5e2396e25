use serde::Serialize;

use crate::domain::Price;

/// A synthetic product with two levels of nested objects below it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub product_id: String,
    pub name: String,
    /// Always a multiple of 10, written as a JSON float
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Price,
    pub in_stock: u8,
    pub categories: Vec<&'static str>,
    pub details: ProductDetails,
    /// One decimal place, written as a JSON float
    #[serde(with = "rust_decimal::serde::float")]
    pub rating: Price,
    pub last_updated: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    pub color: &'static str,
    pub material: &'static str,
    pub dimensions: Dimensions,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u8,
    pub height: u8,
    pub depth: u8,
}
