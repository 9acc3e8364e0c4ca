//! Catalog page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tracing::instrument;

use super::products::{FilterParams, filtered_grid};
use crate::state::AppState;
use crate::views::ProductCard;

/// Catalog page template: filter controls plus the product grid.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogPageTemplate {
    pub category: &'static str,
    pub price: &'static str,
    pub query: String,
    pub cards: Vec<ProductCard>,
    pub cart_count: usize,
}

/// Display the catalog page.
///
/// The controls are pre-selected from the query string so the page also
/// works as a plain GET form without htmx.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> CatalogPageTemplate {
    let filter = params.to_filter();
    let cart = state.cart_store().load();
    let grid = filtered_grid(&state, &filter, &cart);

    CatalogPageTemplate {
        category: filter.category.as_str(),
        price: filter.price_range.as_str(),
        query: params.q.unwrap_or_default().trim().to_string(),
        cards: grid.cards,
        cart_count: cart.len(),
    }
}
