use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// How a collection picks the id of a newly added record
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum IdPolicy {
    /// Strictly increasing per-collection counter; ids are never reused
    #[default]
    Sequential,
    /// `len + 1` of the collection at insert time; may reuse the id of a
    /// surviving record after a delete
    Count,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Identifier assigned by the catalog
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Product payload accepted by add and update; any `id` in the body is ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewProduct {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Wire wrapper for `/products`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// Image entity; `product_id` is not checked against the product collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    /// MIME type, echoed as the response `Content-Type` on lookup
    pub content_type: String,
}

/// Image payload accepted by add; any `id` in the body is ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct NewImage {
    #[serde(deserialize_with = "null_as_default")]
    pub product_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
}

/// A `null` field leaves the zero value in place, like a missing one
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(id: i64, input: NewProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
        }
    }
}

impl Image {
    pub fn new(id: i64, input: NewImage) -> Self {
        Self {
            id,
            product_id: input.product_id,
            name: input.name,
            content_type: input.content_type,
        }
    }
}

/// Products present at startup
pub fn seed_products() -> Vec<Product> {
    (1..=2)
        .map(|n| Product {
            id: n,
            name: format!("Product {}", n),
            description: format!("Description for Product {}", n),
        })
        .collect()
}

/// Images present at startup, one per seed product
pub fn seed_images() -> Vec<Image> {
    (1..=2)
        .map(|n| Image {
            id: n,
            product_id: n,
            name: format!("Image {}", n),
            content_type: "image/jpeg".to_string(),
        })
        .collect()
}
