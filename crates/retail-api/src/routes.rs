//! API routes

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{branches, franchises, health, products};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/v1/franchises",
            post(franchises::create_franchise).get(franchises::list_franchises),
        )
        .route("/api/v1/franchises/{id}", get(franchises::get_franchise))
        .route("/api/v1/franchises/{id}/name", patch(franchises::rename_franchise))
        .route(
            "/api/v1/franchises/{id}/branches",
            post(branches::add_branch).get(branches::list_branches),
        )
        .route(
            "/api/v1/franchises/{id}/max-stock-products",
            get(products::max_stock_products),
        )
        .route("/api/v1/branches/{id}/name", patch(branches::rename_branch))
        .route(
            "/api/v1/branches/{id}/products",
            post(products::add_product).get(products::list_products),
        )
        .route("/api/v1/products/{id}", delete(products::delete_product))
        .route("/api/v1/products/{id}/stock", patch(products::update_product_stock))
        .route("/api/v1/products/{id}/name", patch(products::rename_product))
        .route("/health", get(health::health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
