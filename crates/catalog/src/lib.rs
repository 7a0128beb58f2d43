//! Parts Catalog library.
//!
//! The stateful, algorithmic core of the catalog application: category
//! tree construction, slug allocation, subtree deletion safety, the
//! session-scoped shopping cart, the login rate limiter, and the CSRF
//! guard. The web layer, storage, templating, and email are external
//! collaborators; this crate only computes decisions and derived views.
//!
//! # Modules
//!
//! - [`slug`] - URL-safe slug derivation and uniqueness allocation
//! - [`tree`] - Category forest construction and subtree collection
//! - [`session`] - Typed, serializable session state
//! - [`cart`] - Cart normalization and resolution against live products
//! - [`rate_limit`] - Sliding-window login throttling
//! - [`csrf`] - Per-session anti-forgery tokens
//! - [`config`] - Environment-driven tuning knobs
//! - [`error`] - Unified error type for the request layer

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod csrf;
pub mod error;
pub mod rate_limit;
pub mod session;
pub mod slug;
pub mod tree;
