//! Serde adapter for numeric catalog fields.
//!
//! Catalog feeds carry prices, discounts, and ratings as JSON numbers, and
//! the persisted cart must keep that shape. `rust_decimal`'s default
//! serializer writes strings, so decimal fields opt into this module with
//! `#[serde(with = "crate::types::number")]`.
//!
//! Deserialization accepts numbers and numeric strings. Serialization writes
//! the exact decimal text as a JSON number, so fractional values survive a
//! save and load of the cart unchanged.

use rust_decimal::Decimal;
use serde::{Deserializer, Serializer};

/// Serialize a decimal as a JSON number.
///
/// # Errors
///
/// Returns the serializer's error if writing fails.
pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rust_decimal::serde::arbitrary_precision::serialize(value, serializer)
}

/// Deserialize a decimal from a JSON number or numeric string.
///
/// # Errors
///
/// Returns the deserializer's error if the value is not numeric.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
}
