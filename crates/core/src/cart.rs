//! Shopping cart model and persistence contract.
//!
//! The cart is an ordered list of whole product records, persisted as a JSON
//! array. Storage is abstracted behind [`CartStore`] so the storefront can
//! inject a file-backed store in production and an in-memory one in tests.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Product, ProductId};

/// Key under which the cart is persisted in a key-value store.
pub const CART_KEY: &str = "cart";

/// Errors raised while persisting the cart.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The cart could not be encoded.
    #[error("cart serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Result of an add-to-cart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was appended and the cart persisted.
    Added,
    /// The product was already present; nothing was written.
    AlreadyInCart,
}

/// The shopper's cart.
///
/// Holds at most one entry per product id when mutated through
/// [`Cart::add`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Decode a persisted cart.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the text is not an array of products.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Encode the cart for persistence.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Whether a product with this id is in the cart.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Append a product unless its id is already present.
    pub fn add(&mut self, product: Product) -> AddOutcome {
        if self.contains(&product.id) {
            return AddOutcome::AlreadyInCart;
        }
        self.items.push(product);
        AddOutcome::Added
    }

    /// Products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Product>> for Cart {
    fn from(items: Vec<Product>) -> Self {
        Self { items }
    }
}

/// Persistence service for the cart.
///
/// `load` never fails: absent or unreadable data is an empty cart.
pub trait CartStore: Send + Sync {
    /// Read the persisted cart.
    fn load(&self) -> Cart;

    /// Replace the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be encoded or written.
    fn save(&self, cart: &Cart) -> Result<(), StoreError>;

    /// Load, mutate, and save the cart as one step.
    ///
    /// No other `update` on the same store interleaves with this one. The
    /// cart is written only when `mutate` reports [`AddOutcome::Added`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the lock or the write fails.
    fn update(
        &self,
        mutate: &mut dyn FnMut(&mut Cart) -> AddOutcome,
    ) -> Result<AddOutcome, StoreError>;
}
