//! Application state shared across handlers.

use std::sync::Arc;

use kicks_core::{Catalog, CartStore};

use crate::config::{StorageBackend, StorefrontConfig};
use crate::storage::{FileStorage, LocalCartStore, MemoryStorage};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog and the injected cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    cart_store: Arc<dyn CartStore>,
}

impl AppState {
    /// Create a new application state from a catalog and a cart store.
    #[must_use]
    pub fn new(catalog: Catalog, cart_store: Arc<dyn CartStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                cart_store,
            }),
        }
    }

    /// Create the state with the cart store selected by configuration.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig, catalog: Catalog) -> Self {
        let cart_store: Arc<dyn CartStore> = match config.storage {
            StorageBackend::File => {
                tracing::info!(dir = %config.storage_dir.display(), "Using file cart storage");
                Arc::new(LocalCartStore::new(FileStorage::new(config.storage_dir.clone())))
            }
            StorageBackend::Memory => {
                tracing::info!("Using in-memory cart storage");
                Arc::new(LocalCartStore::new(MemoryStorage::new()))
            }
        };
        Self::new(catalog, cart_store)
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart_store(&self) -> &dyn CartStore {
        self.inner.cart_store.as_ref()
    }
}
