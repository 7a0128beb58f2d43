//! Integration tests for the parts catalog.
//!
//! These tests exercise the catalog core across module boundaries -
//! category administration, cart sessions, login throttling - without a
//! database or web server. The [`fixtures`] module provides record
//! builders and an in-memory stand-in for the storage collaborator.
//!
//! # Test Categories
//!
//! - `category_admin` - slug allocation, tree building, deletion safety
//! - `cart_session` - session normalization and cart resolution
//! - `login_throttle` - sliding-window rate limiting under load
//! - `csrf_guard` - anti-forgery tokens across persisted sessions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod fixtures;
