//! Session-scoped shopping cart.
//!
//! The persisted cart is client-influenced session data: keys are meant
//! to be product ids and values quantities, but nothing guarantees it.
//! [`normalize`] rebuilds the canonical form on every read (malformed
//! entries are dropped, never surfaced as errors) and writes it back so
//! the session self-heals. [`resolve`] turns the canonical map into
//! display line items against live product data.

use std::collections::BTreeMap;

use parts_catalog_core::{CategoryId, Product, ProductId};

use crate::session::SessionData;

/// Smallest quantity a cart entry may hold.
pub const MIN_QUANTITY: u32 = 1;
/// Largest quantity a cart entry may hold.
pub const MAX_QUANTITY: u32 = 99;

/// Live product access for cart resolution.
///
/// Implemented by the storage collaborator; tests use an in-memory map.
pub trait CartProductLookup {
    /// Fetch a product by id, active or not. [`resolve`] and
    /// [`add_item`] apply the active-only rule themselves.
    fn product(&self, id: ProductId) -> Option<Product>;

    /// Display name for a category, used as the line item's label.
    fn category_name(&self, id: CategoryId) -> Option<String>;
}

/// Sink for cart-add counter side effects.
///
/// [`add_item`] reports every successful add so the storage collaborator
/// can bump the product's and category's `cart_add_count`. Removal never
/// reverses these counters.
pub trait CartAddRecorder {
    fn record_cart_add(&mut self, product_id: ProductId, category_id: Option<CategoryId>);
}

/// One resolved cart line: quantity plus a display snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub name: String,
    pub sku: String,
    /// Primary gallery image, if the product has one.
    pub image_url: Option<String>,
    /// Category display name, if the product is filed under one.
    pub category: Option<String>,
}

/// Rebuild the canonical cart from the raw persisted map.
///
/// Keys must parse as integers and values as integers (JSON numbers or
/// numeric strings); anything else is dropped with a debug log - corrupt
/// session data degrades to "item removed", never to a user-visible
/// error. Surviving quantities are clamped to
/// [`MIN_QUANTITY`]..=[`MAX_QUANTITY`]. The canonical form is written
/// back into the session, so every read repairs the persisted state.
pub fn normalize(session: &mut SessionData) -> BTreeMap<ProductId, u32> {
    let mut canonical: BTreeMap<ProductId, u32> = BTreeMap::new();

    for (raw_key, raw_value) in &session.cart {
        let Ok(id) = raw_key.trim().parse::<i32>() else {
            tracing::debug!(key = %raw_key, "dropping cart entry with non-integer key");
            continue;
        };
        let Some(quantity) = integer_value(raw_value) else {
            tracing::debug!(key = %raw_key, value = %raw_value, "dropping cart entry with non-integer quantity");
            continue;
        };
        canonical.insert(ProductId::new(id), clamp_quantity(quantity));
    }

    write_back(session, &canonical);
    canonical
}

/// Resolve the canonical cart into display line items.
///
/// Entries whose product is missing or inactive are omitted from the
/// view but deliberately left in the persisted map: a temporarily
/// deactivated product reappears in the cart if it is reactivated.
pub fn resolve(
    cart: &BTreeMap<ProductId, u32>,
    lookup: &impl CartProductLookup,
) -> Vec<CartLine> {
    cart.iter()
        .filter_map(|(&product_id, &quantity)| {
            let product = lookup.product(product_id)?;
            if !product.is_active {
                return None;
            }
            let image_url = product
                .primary_image()
                .map(|image| image.image_url.clone());
            let category = product
                .category_id
                .and_then(|category_id| lookup.category_name(category_id));
            Some(CartLine {
                product_id,
                quantity,
                name: product.name,
                sku: product.sku,
                image_url,
                category,
            })
        })
        .collect()
}

/// Add a product to the cart, accumulating onto any existing quantity
/// (clamped to the cart bounds).
///
/// Returns the stored quantity, or `None` when the product is unknown or
/// inactive (in which case the cart is left untouched). A successful add
/// reports a cart-add to `recorder` for the product and its category;
/// those counters are bumped once per add and are not reversed by
/// [`remove_item`] or [`clear`].
pub fn add_item(
    session: &mut SessionData,
    lookup: &impl CartProductLookup,
    recorder: &mut impl CartAddRecorder,
    product_id: ProductId,
    quantity: u32,
) -> Option<u32> {
    let product = lookup.product(product_id)?;
    if !product.is_active {
        return None;
    }

    let mut cart = normalize(session);
    let current = cart.get(&product_id).copied().unwrap_or(0);
    let stored = clamp_quantity(i64::from(current) + i64::from(quantity));
    cart.insert(product_id, stored);
    write_back(session, &cart);

    recorder.record_cart_add(product_id, product.category_id);
    Some(stored)
}

/// Remove one product from the persisted cart. Counters are untouched.
pub fn remove_item(session: &mut SessionData, product_id: ProductId) {
    let mut cart = normalize(session);
    cart.remove(&product_id);
    write_back(session, &cart);
}

/// Empty the persisted cart. Counters are untouched.
pub fn clear(session: &mut SessionData) {
    session.cart.clear();
}

/// Extract an integer from a raw persisted value.
///
/// Accepts JSON integers and numeric strings; floats, booleans, and
/// structured values are rejected.
fn integer_value(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(number) => number.as_i64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn clamp_quantity(value: i64) -> u32 {
    u32::try_from(value.clamp(i64::from(MIN_QUANTITY), i64::from(MAX_QUANTITY)))
        .unwrap_or(MIN_QUANTITY)
}

fn write_back(session: &mut SessionData, canonical: &BTreeMap<ProductId, u32>) {
    session.cart = canonical
        .iter()
        .map(|(id, quantity)| (id.to_string(), serde_json::Value::from(*quantity)))
        .collect();
}
