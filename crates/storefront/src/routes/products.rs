//! Product grid route handler.

use axum::extract::{Query, State};
use kicks_core::{Cart, CatalogFilter, Category, PriceRange};
use serde::Deserialize;
use tracing::instrument;

use crate::state::AppState;
use crate::views::{self, ProductGridTemplate};

/// Values of the catalog filter controls.
///
/// Missing or unrecognized selector values select everything.
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub category: Option<String>,
    pub price: Option<String>,
    pub q: Option<String>,
}

impl FilterParams {
    /// Parse the raw control values into a filter.
    #[must_use]
    pub fn to_filter(&self) -> CatalogFilter {
        CatalogFilter::new(
            Category::from_param(self.category.as_deref().unwrap_or_default()),
            PriceRange::from_param(self.price.as_deref().unwrap_or_default()),
            self.q.as_deref().unwrap_or_default(),
        )
    }
}

/// Filter the catalog and render the matching cards.
pub(crate) fn filtered_grid(
    state: &AppState,
    filter: &CatalogFilter,
    cart: &Cart,
) -> ProductGridTemplate {
    let products = filter.apply(state.catalog().products());
    tracing::debug!(
        category = filter.category.as_str(),
        price = filter.price_range.as_str(),
        query = filter.query.as_str(),
        matches = products.len(),
        "Catalog filtered"
    );
    views::render(&products, cart)
}

/// Product grid fragment (HTMX), re-rendered on every control change.
#[instrument(skip(state))]
pub async fn grid(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> ProductGridTemplate {
    let cart = state.cart_store().load();
    filtered_grid(&state, &params.to_filter(), &cart)
}
