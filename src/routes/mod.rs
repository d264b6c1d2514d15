mod health;
mod products;

pub use products::unmatched_product_path;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::list_products))
        .route("/products/create", post(products::create_product))
        .route("/products/{id}", get(products::get_product))
        .route("/products/update/{id}", put(products::update_product))
        .route("/products/update/{id}/", put(products::update_product))
        .route("/products/delete/{id}", delete(products::delete_product))
        .route("/products/delete/{id}/", delete(products::delete_product))
        // Must follow every route: it only applies to routes already registered.
        .method_not_allowed_fallback(products::method_not_allowed)
}
