use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::models::{Image, NewImage, NewProduct, Product};

/// Repository trait for Product storage
///
/// Implementations must keep `id` unique among the records they currently
/// hold and return records in insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i64) -> CatalogResult<Option<Product>>;

    /// Append a product, assigning its id
    async fn create(&self, input: NewProduct) -> CatalogResult<Product>;

    /// Replace the product with `id`; `None` if it does not exist
    async fn update(&self, id: i64, input: NewProduct) -> CatalogResult<Option<Product>>;

    /// Delete a product by ID, returning whether it existed
    async fn delete(&self, id: i64) -> CatalogResult<bool>;
}

/// Repository trait for Image storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// Append an image, assigning its id
    async fn create(&self, input: NewImage) -> CatalogResult<Image>;

    /// First image referencing `product_id`
    async fn get_by_product_id(&self, product_id: i64) -> CatalogResult<Option<Image>>;
}
