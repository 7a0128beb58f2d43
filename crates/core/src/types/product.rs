//! Product record and its image gallery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::{CategoryId, ImageId, ProductId};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Database ID.
    pub id: ProductId,
    /// Category the product is filed under, if any.
    pub category_id: Option<CategoryId>,
    /// Display name.
    pub name: String,
    /// Stock-keeping unit (unique).
    pub sku: String,
    /// Manufacturer part number (unique).
    pub oem_number: String,
    /// Short marketing summary.
    pub summary: Option<String>,
    /// Whether the product is shown on the storefront.
    pub is_active: bool,
    /// Image gallery, ordered by `sort_order`.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Times the product page was viewed.
    pub view_count: i64,
    /// Times the product was added to a cart.
    pub cart_add_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The primary image: the gallery entry with the lowest `sort_order`.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.iter().min_by_key(|image| image.sort_order)
    }
}

/// One image in a product's gallery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    /// Database ID.
    pub id: ImageId,
    /// Public URL of the stored file.
    pub image_url: String,
    /// Alt text; templates fall back to the product name when absent.
    pub alt_text: Option<String>,
    /// Position within the gallery (lowest = primary).
    pub sort_order: i32,
}
