//! API routes module

pub mod products;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let mut router = products::router(state);

    if state.config.catalog.images_enabled {
        router = router.merge(products::image_router(state));
    }

    router
}
