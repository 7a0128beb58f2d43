//! Record builders and in-memory storage stand-ins.

use std::collections::HashMap;

use chrono::Utc;

use parts_catalog::cart::{CartAddRecorder, CartProductLookup};
use parts_catalog_core::{Category, CategoryId, ImageId, Product, ProductId, ProductImage};

/// Build a category with sensible defaults.
#[must_use]
pub fn category(id: i32, parent: Option<i32>, sort_order: i32, name: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: None,
        parent_id: parent.map(CategoryId::new),
        is_active: true,
        sort_order,
        level: 0,
        view_count: 0,
        cart_add_count: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Build an active product with one gallery image.
#[must_use]
pub fn product(id: i32, category: Option<i32>, name: &str) -> Product {
    Product {
        id: ProductId::new(id),
        category_id: category.map(CategoryId::new),
        name: name.to_string(),
        sku: format!("SKU-{id}"),
        oem_number: format!("OEM-{id}"),
        summary: None,
        is_active: true,
        images: vec![ProductImage {
            id: ImageId::new(id),
            image_url: format!("/media/products/{id}.jpg"),
            alt_text: Some(name.to_string()),
            sort_order: 0,
        }],
        view_count: 0,
        cart_add_count: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// In-memory product/category store serving cart lookups.
#[derive(Default)]
pub struct InMemoryStore {
    pub products: HashMap<ProductId, Product>,
    pub categories: HashMap<CategoryId, Category>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

impl CartProductLookup for InMemoryStore {
    fn product(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    fn category_name(&self, id: CategoryId) -> Option<String> {
        self.categories.get(&id).map(|c| c.name.clone())
    }
}

/// Counter ledger standing in for the storage layer's `UPDATE ... SET
/// cart_add_count = cart_add_count + 1`.
#[derive(Debug, Default)]
pub struct CounterLedger {
    product_adds: HashMap<ProductId, i64>,
    category_adds: HashMap<CategoryId, i64>,
}

impl CounterLedger {
    #[must_use]
    pub fn product_cart_adds(&self, id: ProductId) -> i64 {
        self.product_adds.get(&id).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn category_cart_adds(&self, id: CategoryId) -> i64 {
        self.category_adds.get(&id).copied().unwrap_or(0)
    }
}

impl CartAddRecorder for CounterLedger {
    fn record_cart_add(&mut self, product_id: ProductId, category_id: Option<CategoryId>) {
        *self.product_adds.entry(product_id).or_default() += 1;
        if let Some(category_id) = category_id {
            *self.category_adds.entry(category_id).or_default() += 1;
        }
    }
}
