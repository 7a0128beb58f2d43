//! Parts Catalog Core - Shared types library.
//!
//! This crate provides the domain types used across all parts catalog
//! components:
//! - `catalog` - Category tree, cart, and security primitives
//! - the web layer (external) - request handlers and templates
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and the `Category`/`Product` records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
