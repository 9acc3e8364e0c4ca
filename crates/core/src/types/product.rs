//! Catalog product records.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Target audience tag on a product.
///
/// The feed uses `"M"` and `"W"`; any other value is kept verbatim so it
/// survives a round trip through the persisted cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IdealFor {
    Men,
    Women,
    Other(String),
}

impl IdealFor {
    /// The feed code for this audience.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Men => "M",
            Self::Women => "W",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for IdealFor {
    fn from(code: String) -> Self {
        match code.as_str() {
            "M" => Self::Men,
            "W" => Self::Women,
            _ => Self::Other(code),
        }
    }
}

impl From<IdealFor> for String {
    fn from(ideal_for: IdealFor) -> Self {
        match ideal_for {
            IdealFor::Men => "M".to_string(),
            IdealFor::Women => "W".to_string(),
            IdealFor::Other(code) => code,
        }
    }
}

impl fmt::Display for IdealFor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A product in the static catalog.
///
/// Field names on the wire follow the catalog feed (`_id`, `img`,
/// `newPrice`, ...). The same shape is used for entries in the persisted
/// cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Image URL or path.
    #[serde(rename = "img")]
    pub image: String,
    pub new_price: Price,
    pub old_price: Price,
    /// Discount in percent.
    #[serde(with = "crate::types::number")]
    pub discount: Decimal,
    #[serde(with = "crate::types::number")]
    pub rating: Decimal,
    pub ideal_for: IdealFor,
}
