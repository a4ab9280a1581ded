//! Products Domain
//!
//! In-memory product catalog with an optional image collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (flat paths, ?id= queries)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Not-found mapping, instrumentation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Collection  │  ← Ordered Vec + id allocation
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, CatalogStore, IdPolicy, ImageService, ProductService};
//!
//! let store = CatalogStore::seeded(IdPolicy::Sequential);
//!
//! let router = handlers::product_router(ProductService::new(store.products()))
//!     .merge(handlers::image_router(ImageService::new(store.images())));
//! # let _: axum::Router = router;
//! ```

pub mod collection;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use collection::{Collection, Record};
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use memory::{CatalogStore, InMemoryImageRepository, InMemoryProductRepository};
pub use models::{seed_images, seed_products, IdPolicy, Image, NewImage, NewProduct, Product, ProductList};
pub use repository::{ImageRepository, ProductRepository};
pub use service::{ImageService, ProductService};
