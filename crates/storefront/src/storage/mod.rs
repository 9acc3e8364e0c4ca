//! Key-value storage backends and the cart store built on them.
//!
//! A [`KeyValueStore`] holds text values under string keys, the same
//! contract as browser local storage. [`LocalCartStore`] keeps the cart as a
//! JSON array under [`CART_KEY`] in any such store and recovers from
//! missing or malformed data by treating it as an empty cart.

mod file;
mod memory;

use std::sync::Mutex;

use kicks_core::{AddOutcome, CART_KEY, Cart, CartStore, StoreError};

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Text values under string keys.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Cart persistence on top of a key-value backend.
#[derive(Debug, Default)]
pub struct LocalCartStore<S> {
    storage: S,
    /// Held across load, mutate, and save in `update`.
    update_lock: Mutex<()>,
}

impl<S: KeyValueStore> LocalCartStore<S> {
    /// Wrap a key-value backend.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            update_lock: Mutex::new(()),
        }
    }

    /// The underlying backend.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStore> CartStore for LocalCartStore<S> {
    fn load(&self) -> Cart {
        let text = match self.storage.get_item(CART_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart, treating as empty");
                return Cart::new();
            }
        };

        Cart::from_json(&text).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Persisted cart is malformed, treating as empty");
            Cart::new()
        })
    }

    fn save(&self, cart: &Cart) -> Result<(), StoreError> {
        let text = cart.to_json()?;
        self.storage.set_item(CART_KEY, &text)?;
        tracing::debug!(items = cart.len(), "Cart saved");
        Ok(())
    }

    fn update(
        &self,
        mutate: &mut dyn FnMut(&mut Cart) -> AddOutcome,
    ) -> Result<AddOutcome, StoreError> {
        let _guard = self.update_lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut cart = self.load();
        let outcome = mutate(&mut cart);
        if outcome == AddOutcome::Added {
            self.save(&cart)?;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use kicks_core::{IdealFor, Price, Product, ProductId};
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: "Canvas Low".to_string(),
            brand: "Converse".to_string(),
            image: "/static/img/canvas.webp".to_string(),
            new_price: Price::whole(2499),
            old_price: Price::whole(3299),
            discount: Decimal::from(24),
            rating: Decimal::new(45, 1),
            ideal_for: IdealFor::Women,
        }
    }

    /// Backend whose reads and writes always fail.
    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Poisoned)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Poisoned)
        }
    }

    #[test]
    fn test_absent_cart_loads_empty() {
        let store = LocalCartStore::new(MemoryStorage::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_malformed_cart_loads_empty() {
        for garbage in ["{oops", "null", "42", "{\"_id\":\"x\"}", "[{\"name\":1}]"] {
            let storage = MemoryStorage::new();
            storage.set_item(CART_KEY, garbage).unwrap();
            let store = LocalCartStore::new(storage);
            assert!(store.load().is_empty(), "{garbage} should load as empty");
        }
    }

    #[test]
    fn test_unreadable_backend_loads_empty() {
        let store = LocalCartStore::new(BrokenStorage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = LocalCartStore::new(BrokenStorage);
        assert!(store.save(&Cart::new()).is_err());
    }

    #[test]
    fn test_update_skips_write_when_unchanged() {
        let store = LocalCartStore::new(MemoryStorage::new());
        let outcome = store
            .update(&mut |_cart| AddOutcome::AlreadyInCart)
            .unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyInCart);
        assert!(store.storage().get_item(CART_KEY).unwrap().is_none());
    }

    #[test]
    fn test_concurrent_updates_keep_every_item() {
        for _ in 0..50 {
            let store = LocalCartStore::new(MemoryStorage::new());
            std::thread::scope(|scope| {
                for i in 0..8 {
                    let store = &store;
                    scope.spawn(move || {
                        store
                            .update(&mut |cart| cart.add(product(&format!("c-{i}"))))
                            .unwrap();
                    });
                }
            });
            assert_eq!(store.load().len(), 8);
        }
    }

    #[test]
    fn test_save_writes_json_array_under_cart_key() {
        let store = LocalCartStore::new(MemoryStorage::new());
        let cart = Cart::from(vec![product("c-1")]);
        store.save(&cart).unwrap();

        let raw = store.storage().get_item(CART_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["_id"], "c-1");
        assert_eq!(value[0]["newPrice"], 2499);
        assert_eq!(store.load(), cart);
    }
}
