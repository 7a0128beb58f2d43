//! Category administration flows: slug allocation on create, tree
//! rendering, and deletion safety.

use std::collections::HashSet;

use parts_catalog::slug::{self, SlugError};
use parts_catalog::tree::{
    self, DeletionCheck, assigned_product_count, build_selectable_options, build_tree,
    collect_subtree_ids,
};
use parts_catalog_core::CategoryId;
use parts_catalog_integration_tests::fixtures::{category, product};

#[test]
fn test_create_category_allocates_unique_slug() {
    let existing = ["engine-parts", "engine-parts-2"];
    let exists = |candidate: &str| existing.contains(&candidate);

    let candidate = slug::slugify("  Engine Parts  ");
    assert_eq!(candidate, "engine-parts");

    let allocated = slug::allocate(&candidate, exists).expect("allocates");
    assert_eq!(allocated, "engine-parts-3");
}

#[test]
fn test_create_category_with_unusable_name_requires_manual_slug() {
    let candidate = slug::slugify("???");
    assert_eq!(
        slug::allocate(&candidate, |_| false),
        Err(SlugError::EmptyCandidate)
    );
}

#[test]
fn test_tree_output_length_equals_input_length_under_corruption() {
    // Mix of well-formed rows, a dangling parent, and a two-node cycle.
    let categories = vec![
        category(1, None, 0, "Engine"),
        category(2, Some(1), 0, "Filters"),
        category(3, Some(1), 1, "Belts"),
        category(4, Some(77), 0, "Dangling"),
        category(5, Some(6), 0, "Cycle A"),
        category(6, Some(5), 0, "Cycle B"),
    ];

    let nodes = build_tree(&categories);
    assert_eq!(nodes.len(), categories.len());

    let unique: HashSet<CategoryId> = nodes.iter().map(|n| n.category.id).collect();
    assert_eq!(unique.len(), categories.len());
}

#[test]
fn test_tree_depth_counts_ancestor_hops() {
    let categories = vec![
        category(1, None, 0, "Root"),
        category(2, Some(1), 0, "Child"),
        category(3, Some(2), 0, "Grandchild"),
        category(4, None, 1, "Second Root"),
    ];

    let nodes = build_tree(&categories);
    let depth_of = |id: i32| {
        nodes
            .iter()
            .find(|n| n.category.id == CategoryId::new(id))
            .map(|n| n.depth)
            .expect("node present")
    };

    assert_eq!(depth_of(1), 0);
    assert_eq!(depth_of(2), 1);
    assert_eq!(depth_of(3), 2);
    assert_eq!(depth_of(4), 0);
}

#[test]
fn test_tree_is_deterministic_for_identical_input() {
    let categories = vec![
        category(1, None, 3, "zeta"),
        category(2, None, 3, "Alpha"),
        category(3, None, 1, "midway"),
        category(4, Some(3), 0, "leaf"),
    ];

    let first: Vec<i32> = build_tree(&categories)
        .iter()
        .map(|n| n.category.id.as_i32())
        .collect();
    let second: Vec<i32> = build_tree(&categories)
        .iter()
        .map(|n| n.category.id.as_i32())
        .collect();

    assert_eq!(first, second);
    // sort_order first, then case-insensitive name.
    assert_eq!(first, vec![3, 4, 2, 1]);
}

#[test]
fn test_product_form_options_include_own_inactive_category() {
    let mut retired = category(2, Some(1), 0, "Retired Line");
    retired.is_active = false;
    let categories = vec![category(1, None, 0, "Engine"), retired];

    // Editing a product currently filed under the inactive category: the
    // dropdown keeps that one selectable alongside active ones.
    let current = Some(CategoryId::new(2));
    let options =
        build_selectable_options(&categories, |c| c.is_active || Some(c.id) == current);

    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Engine", "-- Retired Line"]);
}

#[test]
fn test_subtree_collection_survives_cycle_back_to_root() {
    let categories = vec![
        category(1, Some(3), 0, "Root"),
        category(2, Some(1), 0, "Child"),
        category(3, Some(2), 0, "Grandchild"),
    ];

    let subtree = collect_subtree_ids(&categories, CategoryId::new(1));
    let expected: HashSet<CategoryId> = [1, 2, 3].into_iter().map(CategoryId::new).collect();
    assert_eq!(subtree, expected);
}

#[test]
fn test_delete_refused_while_descendant_has_product() {
    let categories = vec![
        category(1, None, 0, "Engine"),
        category(2, Some(1), 0, "Filters"),
        category(3, Some(2), 0, "Oil Filters"),
    ];
    let products = vec![product(10, Some(3), "Oil Filter")];

    let check = tree::check_subtree_deletion(&categories, CategoryId::new(1), |subtree| {
        assigned_product_count(&products, subtree)
    });

    match check {
        DeletionCheck::Blocked {
            assigned_products, ..
        } => assert_eq!(assigned_products, 1),
        DeletionCheck::Allowed { .. } => panic!("deletion must be refused"),
    }
}

#[test]
fn test_delete_allowed_after_products_reassigned() {
    let categories = vec![
        category(1, None, 0, "Engine"),
        category(2, Some(1), 0, "Filters"),
    ];
    // Product now lives outside the subtree being deleted.
    let products = vec![product(10, Some(9), "Oil Filter")];

    let check = tree::check_subtree_deletion(&categories, CategoryId::new(1), |subtree| {
        assigned_product_count(&products, subtree)
    });

    assert!(check.is_allowed());
    assert_eq!(check.subtree().len(), 2);
}
