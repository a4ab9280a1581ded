use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use super::shutdown::shutdown_signal;
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::io;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Arguments
/// * `router` - The configured Axum router
/// * `server_config` - Server configuration with host and port
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with common middleware and documentation.
///
/// This function sets up:
/// - The OpenAPI document at `/api-docs/openapi.json` and a Scalar UI at `/scalar`
/// - API routes merged at the root (the catalog paths are part of the wire contract)
/// - Common middleware (tracing, security headers, optional CORS, compression)
/// - Plain-text 404 fallback
///
/// Health endpoints should be merged by the app with `health_router()`.
///
/// CORS is enabled only when `CORS_ALLOWED_ORIGIN` is set (see
/// [`cors_layer_from_env`]).
///
/// # Errors
/// Returns an error if `CORS_ALLOWED_ORIGIN` is set but invalid.
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    Ok(build_router::<T>(apis, cors_layer_from_env()?))
}

/// Same as [`create_router`] with the CORS layer supplied by the caller.
pub fn build_router<T>(apis: Router, cors_layer: Option<CorsLayer>) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let openapi = T::openapi();

    let mut router = Router::new()
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let doc = openapi.clone();
                async move { Json(doc) }
            }),
        )
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .merge(apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers));

    if let Some(cors_layer) = cors_layer {
        router = router.layer(cors_layer);
    }

    // Compresses responses based on the Accept-Encoding header
    router.layer(CompressionLayer::new())
}
