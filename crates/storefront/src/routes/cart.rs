//! Cart route handlers.
//!
//! Adding to the cart is an HTMX form post that swaps only the card's
//! action control. Requests without the `HX-Request` header are redirected
//! back to the catalog so the page keeps working without JavaScript.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use kicks_core::{AddOutcome, Price};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::cart::add_to_cart;
use crate::state::AppState;
use crate::views::{CartAction, ProductCard};

/// HTMX event fired after the cart changes.
pub const CART_UPDATED_EVENT: &str = "cart-updated";

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub price: String,
    pub old_price: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub cart_count: usize,
}

/// Action control plus confirmation notice (HTMX response to an add).
#[derive(Template, WebTemplate)]
#[template(path = "partials/add_to_cart.html")]
pub struct AddToCartTemplate {
    pub card: ProductCard,
    pub notice: String,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub cart_count: usize,
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers
        .get("hx-request")
        .is_some_and(|value| value.as_bytes() == b"true")
}

/// Display cart page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> CartShowTemplate {
    let cart = state.cart_store().load();
    let total = cart
        .items()
        .iter()
        .map(|p| p.new_price.amount())
        .sum();

    CartShowTemplate {
        items: cart
            .items()
            .iter()
            .map(|p| CartItemView {
                id: p.id.to_string(),
                name: p.name.clone(),
                brand: p.brand.clone(),
                image: p.image.clone(),
                price: p.new_price.to_string(),
                old_price: p.old_price.to_string(),
            })
            .collect(),
        total: Price::new(total).to_string(),
        cart_count: cart.len(),
    }
}

/// Add item to cart (HTMX).
///
/// Returns the card's control in its "Go to Cart" state together with an
/// out-of-band confirmation notice, and triggers `cart-updated` so the
/// count badge refreshes.
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let product = state
        .catalog()
        .get(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let outcome = add_to_cart(state.cart_store(), product)?;
    add_breadcrumb(
        "cart",
        "Add to cart",
        &[("product_id", product.id.as_str())],
    );

    if !is_htmx(&headers) {
        return Ok(Redirect::to("/").into_response());
    }

    let notice = match outcome {
        AddOutcome::Added => format!("{} added to cart!", product.name),
        AddOutcome::AlreadyInCart => format!("{} is already in your cart.", product.name),
    };

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED_EVENT)]),
        AddToCartTemplate {
            card: ProductCard::new(product, CartAction::GoToCart),
            notice,
        },
    )
        .into_response())
}

/// Cart count badge (HTMX).
pub async fn count(State(state): State<AppState>) -> CartCountTemplate {
    CartCountTemplate {
        cart_count: state.cart_store().load().len(),
    }
}
