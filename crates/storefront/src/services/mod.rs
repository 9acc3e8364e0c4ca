//! Business logic services for storefront.
//!
//! # Services
//!
//! - `cart` - Cart mutations against the injected [`CartStore`](kicks_core::CartStore)

pub mod cart;
