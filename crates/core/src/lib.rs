//! Kicks Core - Catalog, filter, and cart types.
//!
//! This crate provides the domain model shared by the storefront and its
//! tests:
//! - [`types`] - product records, ids, and prices
//! - [`catalog`] - the static product collection
//! - [`filter`] - category / price band / search filtering
//! - [`cart`] - the cart and its persistence contract
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! templating. Storage backends implementing [`CartStore`] live in the
//! storefront crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod types;

pub use cart::{AddOutcome, CART_KEY, Cart, CartStore, StoreError};
pub use catalog::{Catalog, CatalogError};
pub use filter::{CatalogFilter, Category, PriceRange, SearchQuery, filter};
pub use types::*;
