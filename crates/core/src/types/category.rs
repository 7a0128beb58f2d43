//! Category record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::id::CategoryId;

/// A catalog category.
///
/// Categories form a shallow forest: `parent_id` of `None` marks a root.
/// Well-formed data is acyclic, but traversal code must never rely on the
/// parent chain terminating - corrupted rows (dangling parents, cycles)
/// have to be tolerated, not rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Database ID.
    pub id: CategoryId,
    /// Display name (unique).
    pub name: String,
    /// URL-safe slug (unique).
    pub slug: String,
    /// Optional long-form description.
    pub description: Option<String>,
    /// Parent category, `None` for roots.
    pub parent_id: Option<CategoryId>,
    /// Whether the category is shown on the storefront.
    pub is_active: bool,
    /// Explicit position among siblings (ties broken by name).
    pub sort_order: i32,
    /// Cached depth: parent's level + 1 at creation time.
    ///
    /// Not recomputed when a parent changes; rendering uses the depth
    /// assigned by the tree builder, never this field.
    pub level: i32,
    /// Times the category page was viewed.
    pub view_count: i64,
    /// Times a product in this category was added to a cart.
    pub cart_add_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let category = Category {
            id: CategoryId::new(3),
            name: "Brake Pads".to_string(),
            slug: "brake-pads".to_string(),
            description: None,
            parent_id: Some(CategoryId::new(1)),
            is_active: true,
            sort_order: 10,
            level: 1,
            view_count: 0,
            cart_add_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&category).expect("serialize");
        assert!(json.contains("\"id\":3"));
        assert!(json.contains("\"parent_id\":1"));
        assert!(json.contains("\"slug\":\"brake-pads\""));
    }
}
