//! Product card rendering.
//!
//! [`render`] turns a filtered product sequence into the product grid
//! fragment. Each card's action control is decided here from the current
//! cart: products already in the cart link to the cart page, everything else
//! gets an "Add To Cart" form that htmx swaps in place once submitted.

use askama::Template;
use askama_web::WebTemplate;
use kicks_core::{Cart, Product};

/// State of a card's action control.
///
/// Moves one way only: `AddToCart` becomes `GoToCart` after activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    AddToCart,
    GoToCart,
}

impl CartAction {
    /// Initial state for a product given the current cart.
    #[must_use]
    pub fn for_product(product: &Product, cart: &Cart) -> Self {
        if cart.contains(&product.id) {
            Self::GoToCart
        } else {
            Self::AddToCart
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AddToCart => "Add To Cart",
            Self::GoToCart => "Go to Cart",
        }
    }

    #[must_use]
    pub const fn is_in_cart(self) -> bool {
        matches!(self, Self::GoToCart)
    }
}

/// Display data for one product card.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub image: String,
    pub price: String,
    pub old_price: String,
    pub discount: String,
    pub rating: String,
    pub action: CartAction,
}

impl ProductCard {
    #[must_use]
    pub fn new(product: &Product, action: CartAction) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.image.clone(),
            price: product.new_price.to_string(),
            old_price: product.old_price.to_string(),
            discount: format!("({}% OFF)", product.discount.normalize()),
            rating: product.rating.normalize().to_string(),
            action,
        }
    }
}

/// Product grid fragment: the cards, or a single placeholder when empty.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub cards: Vec<ProductCard>,
}

/// Render products as cards, deriving each control from cart membership.
#[must_use]
pub fn render(products: &[&Product], cart: &Cart) -> ProductGridTemplate {
    let cards = products
        .iter()
        .map(|product| ProductCard::new(product, CartAction::for_product(product, cart)))
        .collect();
    ProductGridTemplate { cards }
}
