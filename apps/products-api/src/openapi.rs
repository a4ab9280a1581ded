//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service metadata shared by the combined document
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "In-memory product catalog with optional product images",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceInfo;

/// Combined OpenAPI documentation for Products API
///
/// Catalog paths live at the root, so the domain document is merged rather
/// than nested under a prefix.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceInfo::openapi();
        doc.merge(domain_products::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_paths_are_at_root() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Products API");
        for path in ["/products", "/product", "/add-product", "/get-image"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
