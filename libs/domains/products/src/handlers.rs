//! HTTP handlers for the catalog
//!
//! Paths are flat and verb-agnostic: every route is registered with `any`,
//! and record ids travel in the `?id=` query string. Request bodies are not
//! size-limited, so decoding and lookups are the only ways a request fails.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use axum_helpers::{decode_json, JsonBody, QueryId};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::CatalogResult;
use crate::models::{Image, NewImage, NewProduct, Product, ProductList};
use crate::repository::{ImageRepository, ProductRepository};
use crate::service::{ImageService, ProductService};

/// OpenAPI documentation for the catalog
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        get_product,
        add_product,
        update_product,
        delete_product,
        add_image,
        get_image,
    ),
    components(schemas(Product, NewProduct, ProductList, Image, NewImage)),
    tags(
        (name = "Products", description = "Product CRUD"),
        (name = "Images", description = "Product images; registered only when images are enabled")
    )
)]
pub struct ApiDoc;

/// `?id=` query parameter as documented; extraction itself is lenient
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdQuery {
    /// Decimal id; absent or non-numeric values are read as 0
    pub id: Option<i64>,
}

/// Product routes
pub fn product_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/products", any(list_products))
        .route("/product", any(get_product))
        .route("/add-product", any(add_product))
        .route("/update-product", any(update_product))
        .route("/delete-product", any(delete_product))
        .layer(DefaultBodyLimit::disable())
        .with_state(shared_service)
}

/// Image routes
pub fn image_router<R: ImageRepository + 'static>(service: ImageService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/add-image", any(add_image))
        .route("/get-image", any(get_image))
        .layer(DefaultBodyLimit::disable())
        .with_state(shared_service)
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products in insertion order", body = ProductList)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> CatalogResult<Json<ProductList>> {
    let products = service.list_products().await?;
    Ok(Json(ProductList { products }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/product",
    tag = "Products",
    params(IdQuery),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this id", body = String, content_type = "text/plain")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryId(id): QueryId,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(id).await?;
    Ok(Json(product))
}

/// Add a product; the catalog assigns its id
#[utoipa::path(
    post,
    path = "/add-product",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Stored product with its assigned id", body = Product),
        (status = 400, description = "Body is not a product", body = String, content_type = "text/plain")
    )
)]
async fn add_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(input): JsonBody<NewProduct>,
) -> CatalogResult<Json<Product>> {
    let product = service.create_product(input).await?;
    Ok(Json(product))
}

/// Replace a product; the stored id is always the one in the query
///
/// The id is checked before the body is decoded, so an unknown id answers
/// 404 even when the body is malformed.
#[utoipa::path(
    put,
    path = "/update-product",
    tag = "Products",
    params(IdQuery),
    request_body = NewProduct,
    responses(
        (status = 200, description = "Updated product", body = Product),
        (status = 400, description = "Body is not a product", body = String, content_type = "text/plain"),
        (status = 404, description = "No product with this id", body = String, content_type = "text/plain")
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryId(id): QueryId,
    body: Bytes,
) -> CatalogResult<Json<Product>> {
    service.ensure_product_exists(id).await?;
    let input: NewProduct = decode_json(&body)?;
    let product = service.update_product(id, input).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/delete-product",
    tag = "Products",
    params(IdQuery),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with this id", body = String, content_type = "text/plain")
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    QueryId(id): QueryId,
) -> CatalogResult<StatusCode> {
    service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add an image; the catalog assigns its id
#[utoipa::path(
    post,
    path = "/add-image",
    tag = "Images",
    request_body = NewImage,
    responses(
        (status = 200, description = "Stored image with its assigned id", body = Image),
        (status = 400, description = "Body is not an image", body = String, content_type = "text/plain")
    )
)]
async fn add_image<R: ImageRepository>(
    State(service): State<Arc<ImageService<R>>>,
    JsonBody(input): JsonBody<NewImage>,
) -> CatalogResult<Json<Image>> {
    let image = service.create_image(input).await?;
    Ok(Json(image))
}

/// Get the first image of a product
///
/// `id` is matched against `productId`, not the image id. The response
/// `Content-Type` is the image's own `contentType`.
#[utoipa::path(
    get,
    path = "/get-image",
    tag = "Images",
    params(IdQuery),
    responses(
        (status = 200, description = "Image metadata, served with the image's content type", body = Image),
        (status = 404, description = "No image for this product", body = String, content_type = "text/plain")
    )
)]
async fn get_image<R: ImageRepository>(
    State(service): State<Arc<ImageService<R>>>,
    QueryId(product_id): QueryId,
) -> CatalogResult<Response> {
    let image = service.get_image_for_product(product_id).await?;

    let mut response = Json(&image).into_response();
    match HeaderValue::from_str(&image.content_type) {
        Ok(content_type) => {
            response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        }
        Err(_) => {
            tracing::warn!(
                image_id = image.id,
                content_type = %image.content_type,
                "Image content type is not a valid header value, keeping application/json"
            );
        }
    }

    Ok(response)
}
