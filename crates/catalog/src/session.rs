//! Typed session state.
//!
//! The session store persists whatever the client's cookie maps to, so
//! the persisted shape is explicit and serializable instead of an ad hoc
//! untyped map. Unknown fields are ignored and missing fields take their
//! defaults, so stale or tampered sessions deserialize into something
//! usable; the cart field additionally goes through
//! [`crate::cart::normalize`] on every read.
//!
//! Session persistence itself (cookie, store, expiry) belongs to the web
//! layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use parts_catalog_core::AdminUserId;

/// Everything the application keeps in one user's session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionData {
    /// Raw persisted cart: intended as product id -> quantity, but
    /// client-influenced and untrusted until normalized.
    pub cart: HashMap<String, serde_json::Value>,

    /// Anti-forgery token, minted lazily by [`crate::csrf::issue`].
    #[serde(rename = "_csrf_token", skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,

    /// Logged-in back-office user, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_user_id: Option<AdminUserId>,
}
