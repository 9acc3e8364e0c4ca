//! Core types for the Kicks storefront.
//!
//! This module provides type-safe wrappers for catalog concepts.

pub mod id;
pub(crate) mod number;
pub mod price;
pub mod product;

pub use id::ProductId;
pub use price::Price;
pub use product::{IdealFor, Product};
