//! Integration tests for the Kicks storefront.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`, so no
//! server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kicks-integration-tests
//! ```

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use kicks_core::{Catalog, CartStore};
use kicks_storefront::AppState;
use kicks_storefront::storage::{LocalCartStore, MemoryStorage};
use tower::ServiceExt;

/// Catalog feed used by the end-to-end tests.
///
/// Prices sit on the band boundaries (1000, 1999, 2000).
pub const FIXTURE_CATALOG: &str = r#"[
  {"_id":"nike-air","name":"Nike Air","brand":"Nike","img":"/static/img/nike-air.webp",
   "newPrice":1000,"oldPrice":2000,"discount":50,"rating":4.5,"idealFor":"M"},
  {"_id":"cloud-w","name":"Cloud Walker","brand":"Puma","img":"/static/img/cloud-w.webp",
   "newPrice":1999,"oldPrice":2999,"discount":33,"rating":4.1,"idealFor":"W"},
  {"_id":"trail-m","name":"Trail Master","brand":"Woodland","img":"/static/img/trail-m.webp",
   "newPrice":2000,"oldPrice":3500,"discount":43,"rating":4.6,"idealFor":"M"},
  {"_id":"slide-u","name":"Pool Slide","brand":"Crocs","img":"/static/img/slide-u.webp",
   "newPrice":499,"oldPrice":999,"discount":50,"rating":3.9,"idealFor":"U"}
]"#;

/// A rendered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Number of product cards in the body.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.body.matches("data-product-id=").count()
    }

    /// Whether the card for `id` is rendered.
    #[must_use]
    pub fn has_card(&self, id: &str) -> bool {
        self.body.contains(&format!("data-product-id=\"{id}\""))
    }
}

/// Router plus handles on its injected dependencies.
pub struct TestContext {
    pub app: Router,
    pub cart_store: Arc<dyn CartStore>,
}

impl TestContext {
    /// Fixture catalog with an empty in-memory cart.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(LocalCartStore::new(MemoryStorage::new())))
    }

    /// Fixture catalog with the given cart store.
    ///
    /// # Panics
    ///
    /// Panics if the fixture catalog is invalid.
    #[must_use]
    pub fn with_store(cart_store: Arc<dyn CartStore>) -> Self {
        let catalog = Catalog::from_json(FIXTURE_CATALOG).expect("fixture catalog is valid");
        let app = kicks_storefront::app(AppState::new(catalog, Arc::clone(&cart_store)));
        Self { app, cart_store }
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::get(uri)
            .body(Body::empty())
            .expect("valid request");
        self.send(request).await
    }

    /// Submit the add-to-cart form, optionally as an htmx request.
    pub async fn add_to_cart(&self, product_id: &str, htmx: bool) -> TestResponse {
        let mut builder = Request::post("/cart/add")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        let request = builder
            .body(Body::from(format!("product_id={product_id}")))
            .expect("valid request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
