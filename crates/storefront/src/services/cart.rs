//! Cart mutations.

use kicks_core::{AddOutcome, CartStore, Product, StoreError};
use tracing::instrument;

/// Add a product to the persisted cart.
///
/// Loads the current cart (empty when absent or unreadable), appends the
/// product, and writes the cart back, all under the store's update lock so
/// concurrent adds cannot overwrite each other. A product whose id is
/// already in the cart is left alone and nothing is written.
///
/// # Errors
///
/// Returns `StoreError` if the updated cart cannot be saved.
#[instrument(skip(store, product), fields(product_id = %product.id))]
pub fn add_to_cart(store: &dyn CartStore, product: &Product) -> Result<AddOutcome, StoreError> {
    let mut items = 0;
    let outcome = store.update(&mut |cart| {
        let outcome = cart.add(product.clone());
        items = cart.len();
        outcome
    })?;

    match outcome {
        AddOutcome::Added => tracing::info!(items, "Product added to cart"),
        AddOutcome::AlreadyInCart => tracing::debug!("Product already in cart"),
    }

    Ok(outcome)
}
