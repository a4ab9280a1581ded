//! In-memory repositories and the store that owns them.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::collection::Collection;
use crate::error::CatalogResult;
use crate::models::{seed_images, seed_products, IdPolicy, Image, NewImage, NewProduct, Product};
use crate::repository::{ImageRepository, ProductRepository};

/// In-memory implementation of ProductRepository
///
/// Clones share the same collection. Reads take the shared lock, writes the
/// exclusive one, each for a single operation.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Collection<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new(policy: IdPolicy) -> Self {
        Self::with_records(Vec::new(), policy)
    }

    pub fn with_records(records: Vec<Product>, policy: IdPolicy) -> Self {
        Self {
            products: Arc::new(RwLock::new(Collection::seeded(records, policy))),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.records().to_vec())
    }

    async fn get_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn create(&self, input: NewProduct) -> CatalogResult<Product> {
        let mut products = self.products.write().await;
        let product = products
            .insert_with(|id| Product::new(id, input))
            .clone();

        tracing::info!(product_id = product.id, policy = %products.policy(), "Created product");
        Ok(product)
    }

    async fn update(&self, id: i64, input: NewProduct) -> CatalogResult<Option<Product>> {
        let mut products = self.products.write().await;
        let updated = products
            .replace_with(id, |id| Product::new(id, input))
            .cloned();

        if updated.is_some() {
            tracing::info!(product_id = id, "Updated product");
        }
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> CatalogResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// In-memory implementation of ImageRepository
#[derive(Debug, Clone)]
pub struct InMemoryImageRepository {
    images: Arc<RwLock<Collection<Image>>>,
}

impl InMemoryImageRepository {
    pub fn new(policy: IdPolicy) -> Self {
        Self::with_records(Vec::new(), policy)
    }

    pub fn with_records(records: Vec<Image>, policy: IdPolicy) -> Self {
        Self {
            images: Arc::new(RwLock::new(Collection::seeded(records, policy))),
        }
    }
}

#[async_trait]
impl ImageRepository for InMemoryImageRepository {
    async fn create(&self, input: NewImage) -> CatalogResult<Image> {
        let mut images = self.images.write().await;
        let image = images.insert_with(|id| Image::new(id, input)).clone();

        tracing::info!(
            image_id = image.id,
            product_id = image.product_id,
            "Created image"
        );
        Ok(image)
    }

    async fn get_by_product_id(&self, product_id: i64) -> CatalogResult<Option<Image>> {
        let images = self.images.read().await;
        Ok(images
            .find(|image| image.product_id == product_id)
            .cloned())
    }
}

/// Owner of every collection the service exposes.
///
/// Built once at startup; the repositories it hands out are cheap clones
/// sharing the same locked collections.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    products: InMemoryProductRepository,
    images: InMemoryImageRepository,
}

impl CatalogStore {
    /// Store holding the two seed products and two seed images
    pub fn seeded(policy: IdPolicy) -> Self {
        Self {
            products: InMemoryProductRepository::with_records(seed_products(), policy),
            images: InMemoryImageRepository::with_records(seed_images(), policy),
        }
    }

    /// Store with no records at all
    pub fn empty(policy: IdPolicy) -> Self {
        Self {
            products: InMemoryProductRepository::new(policy),
            images: InMemoryImageRepository::new(policy),
        }
    }

    pub fn products(&self) -> InMemoryProductRepository {
        self.products.clone()
    }

    pub fn images(&self) -> InMemoryImageRepository {
        self.images.clone()
    }
}
