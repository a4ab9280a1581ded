//! Catalog routes backed by the shared in-memory store

use axum::Router;
use domain_products::{handlers, ImageService, ProductService};

use crate::state::AppState;

/// Create products router
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(state.store.products());
    handlers::product_router(service)
}

/// Create images router
pub fn image_router(state: &AppState) -> Router {
    let service = ImageService::new(state.store.images());
    handlers::image_router(service)
}
