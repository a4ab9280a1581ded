//! Catalog services - thin business layer over the repositories

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Image, NewImage, NewProduct, Product};
use crate::repository::{ImageRepository, ProductRepository};

/// Product service providing the CRUD operations
///
/// Turns absent records into `CatalogError::ProductNotFound`.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Fail with `ProductNotFound` unless a product with `id` exists
    #[instrument(skip(self))]
    pub async fn ensure_product_exists(&self, id: i64) -> CatalogResult<()> {
        self.get_product(id).await.map(|_| ())
    }

    /// Append a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: NewProduct) -> CatalogResult<Product> {
        self.repository.create(input).await
    }

    /// Replace an existing product, keeping its id
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: i64, input: NewProduct) -> CatalogResult<Product> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(CatalogError::ProductNotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> CatalogResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CatalogError::ProductNotFound(id))
        }
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Image service: append and lookup by product
pub struct ImageService<R: ImageRepository> {
    repository: Arc<R>,
}

impl<R: ImageRepository> ImageService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Append a new image. The referenced product is not checked.
    #[instrument(skip(self, input), fields(product_id = input.product_id))]
    pub async fn create_image(&self, input: NewImage) -> CatalogResult<Image> {
        self.repository.create(input).await
    }

    /// First image whose `product_id` matches
    #[instrument(skip(self))]
    pub async fn get_image_for_product(&self, product_id: i64) -> CatalogResult<Image> {
        self.repository
            .get_by_product_id(product_id)
            .await?
            .ok_or(CatalogError::ImageNotFound(product_id))
    }
}

impl<R: ImageRepository> Clone for ImageService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockImageRepository, MockProductRepository};
    use mockall::predicate::eq;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(2))
            .returning(|id| Ok(Some(product(id, "Product 2"))));

        let service = ProductService::new(mock_repo);
        let found = service.get_product(2).await.unwrap();

        assert_eq!(found.name, "Product 2");
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(5).await.unwrap_err();

        assert!(matches!(err, CatalogError::ProductNotFound(5)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .with(eq(8), mockall::predicate::always())
            .returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service
            .update_product(8, NewProduct::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::ProductNotFound(8)));
    }

    #[tokio::test]
    async fn test_update_returns_replacement_with_original_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .returning(|id, input| Ok(Some(Product::new(id, input))));

        let service = ProductService::new(mock_repo);
        let updated = service
            .update_product(
                1,
                NewProduct {
                    name: "R".to_string(),
                    description: "replacement".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "R");
        assert_eq!(updated.description, "replacement");
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(3)).returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);

        assert!(matches!(
            service.delete_product(3).await,
            Err(CatalogError::ProductNotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_delete_existing_succeeds() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);

        assert!(service.delete_product(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_product_exists() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok((id == 1).then(|| product(1, "Product 1"))));

        let service = ProductService::new(mock_repo);

        assert!(service.ensure_product_exists(1).await.is_ok());
        assert!(service.ensure_product_exists(2).await.is_err());
    }

    #[tokio::test]
    async fn test_image_lookup_missing_is_not_found() {
        let mut mock_repo = MockImageRepository::new();
        mock_repo
            .expect_get_by_product_id()
            .with(eq(4))
            .returning(|_| Ok(None));

        let service = ImageService::new(mock_repo);
        let err = service.get_image_for_product(4).await.unwrap_err();

        assert!(matches!(err, CatalogError::ImageNotFound(4)));
    }

    #[tokio::test]
    async fn test_create_image_delegates_to_repository() {
        let mut mock_repo = MockImageRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Ok(Image::new(3, input)));

        let service = ImageService::new(mock_repo);
        let image = service
            .create_image(NewImage {
                product_id: 99,
                name: "orphan".to_string(),
                content_type: "image/gif".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(image.id, 3);
        assert_eq!(image.product_id, 99);
    }
}
