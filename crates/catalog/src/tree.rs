//! Category forest construction and subtree collection.
//!
//! Categories form a shallow forest, but the data is user-edited and the
//! parent links cannot be trusted: a `parent_id` may point at a deleted
//! row, or a reparenting bug may have introduced a cycle. Every traversal
//! here uses an explicit stack and a visited set - never language
//! recursion - so corrupted data degrades gracefully instead of
//! overflowing or looping.

use std::collections::{HashMap, HashSet};

use parts_catalog_core::{Category, CategoryId};

/// A category annotated with its rendering depth.
///
/// `depth` is the number of ancestors traversed from a declared root
/// (indentation = depth). It is computed per call and is authoritative
/// over the cached `Category::level` field.
#[derive(Debug, Clone, Copy)]
pub struct CategoryNode<'a> {
    pub category: &'a Category,
    pub depth: usize,
}

/// One entry of a category `<select>` dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: CategoryId,
    /// Display name prefixed with `"-- "` per depth level.
    pub label: String,
}

/// Outcome of a subtree deletion safety check.
///
/// A structured result, not an error: the caller renders an explanatory
/// message on `Blocked` instead of a failure page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionCheck {
    /// No product anywhere in the subtree; deletion may proceed.
    Allowed {
        /// The root and every transitive descendant id.
        subtree: HashSet<CategoryId>,
    },
    /// At least one product is still assigned somewhere in the subtree.
    /// Cascading deletion is never permitted in this state.
    Blocked {
        subtree: HashSet<CategoryId>,
        /// How many products block the deletion.
        assigned_products: u64,
    },
}

impl DeletionCheck {
    /// Whether the deletion may proceed.
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// The collected subtree ids, regardless of outcome.
    #[must_use]
    pub const fn subtree(&self) -> &HashSet<CategoryId> {
        match self {
            Self::Allowed { subtree } | Self::Blocked { subtree, .. } => subtree,
        }
    }
}

/// Assemble the flat category collection into an ordered forest.
///
/// Children are grouped by `parent_id` (`None` = root) and each sibling
/// group is sorted by `(sort_order ascending, name lowercased ascending)`
/// - the sole ordering rule, stable and deterministic for identical
/// input. A pre-order depth-first traversal from the roots assigns each
/// node its depth.
///
/// Corruption recovery: categories never reached from a declared root
/// (dangling `parent_id`, cycle participants) are re-rooted at depth 0 in
/// input order and traversed from there, so every input category appears
/// in the output exactly once no matter how broken the parent links are.
#[must_use]
pub fn build_tree(categories: &[Category]) -> Vec<CategoryNode<'_>> {
    let children = children_by_parent(categories);

    let mut visited: HashSet<CategoryId> = HashSet::with_capacity(categories.len());
    let mut out: Vec<CategoryNode<'_>> = Vec::with_capacity(categories.len());
    let mut stack: Vec<(&Category, usize)> = Vec::new();

    if let Some(roots) = children.get(&None) {
        for root in roots.iter().rev() {
            stack.push((root, 0));
        }
    }
    drain_preorder(&mut stack, &children, &mut visited, &mut out);

    // Recovery sweep: anything still unvisited gets re-rooted, with its
    // own descendants nested beneath it.
    for category in categories {
        if !visited.contains(&category.id) {
            tracing::debug!(
                category_id = %category.id,
                parent_id = ?category.parent_id,
                "re-rooting category unreachable from declared roots"
            );
            stack.push((category, 0));
            drain_preorder(&mut stack, &children, &mut visited, &mut out);
        }
    }

    out
}

/// Render the forest as dropdown options, filtered by `include`.
///
/// The predicate affects only which nodes are emitted, never which are
/// traversed: an excluded ancestor does not hide its included
/// descendants. Labels carry one `"-- "` prefix per depth level.
#[must_use]
pub fn build_selectable_options(
    categories: &[Category],
    mut include: impl FnMut(&Category) -> bool,
) -> Vec<CategoryOption> {
    build_tree(categories)
        .into_iter()
        .filter(|node| include(node.category))
        .map(|node| CategoryOption {
            id: node.category.id,
            label: format!("{}{}", "-- ".repeat(node.depth), node.category.name),
        })
        .collect()
}

/// Collect `root_id` plus every transitively reachable descendant id.
///
/// Iterative worklist with a visited-set guard: each id is returned
/// exactly once and cycles cannot loop the traversal.
#[must_use]
pub fn collect_subtree_ids(categories: &[Category], root_id: CategoryId) -> HashSet<CategoryId> {
    let mut children: HashMap<CategoryId, Vec<CategoryId>> = HashMap::new();
    for category in categories {
        if let Some(parent_id) = category.parent_id {
            children.entry(parent_id).or_default().push(category.id);
        }
    }

    let mut collected: HashSet<CategoryId> = HashSet::new();
    let mut worklist = vec![root_id];
    while let Some(id) = worklist.pop() {
        if !collected.insert(id) {
            continue;
        }
        if let Some(kids) = children.get(&id) {
            worklist.extend(kids.iter().copied());
        }
    }

    collected
}

/// Check whether a category and its whole subtree may be deleted.
///
/// Collects the subtree, asks the storage collaborator how many products
/// are assigned anywhere inside it, and refuses the deletion outright
/// when the count is nonzero. Deletion is all-or-nothing; a partially
/// applied cascade is never produced.
pub fn check_subtree_deletion(
    categories: &[Category],
    root_id: CategoryId,
    assigned_products: impl FnOnce(&HashSet<CategoryId>) -> u64,
) -> DeletionCheck {
    let subtree = collect_subtree_ids(categories, root_id);
    let count = assigned_products(&subtree);
    if count == 0 {
        DeletionCheck::Allowed { subtree }
    } else {
        DeletionCheck::Blocked {
            subtree,
            assigned_products: count,
        }
    }
}

/// Count products assigned to any category in `subtree`.
///
/// Convenience counter for callers that already hold the product rows;
/// callers backed by a database issue a `COUNT(*)` instead.
#[must_use]
pub fn assigned_product_count(
    products: &[parts_catalog_core::Product],
    subtree: &HashSet<CategoryId>,
) -> u64 {
    products
        .iter()
        .filter(|product| {
            product
                .category_id
                .is_some_and(|category_id| subtree.contains(&category_id))
        })
        .count() as u64
}

/// Group categories by parent and apply the sibling ordering rule.
fn children_by_parent(categories: &[Category]) -> HashMap<Option<CategoryId>, Vec<&Category>> {
    let mut children: HashMap<Option<CategoryId>, Vec<&Category>> = HashMap::new();
    for category in categories {
        children.entry(category.parent_id).or_default().push(category);
    }
    for group in children.values_mut() {
        group.sort_by_cached_key(|category| (category.sort_order, category.name.to_lowercase()));
    }
    children
}

/// Drain the explicit traversal stack in pre-order, assigning depths.
///
/// The visited-set insert doubles as the cycle guard: a node reached
/// twice (only possible on corrupted data) is skipped silently.
fn drain_preorder<'a>(
    stack: &mut Vec<(&'a Category, usize)>,
    children: &HashMap<Option<CategoryId>, Vec<&'a Category>>,
    visited: &mut HashSet<CategoryId>,
    out: &mut Vec<CategoryNode<'a>>,
) {
    while let Some((category, depth)) = stack.pop() {
        if !visited.insert(category.id) {
            continue;
        }
        out.push(CategoryNode { category, depth });
        if let Some(kids) = children.get(&Some(category.id)) {
            for child in kids.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }
}
