//! Unified error handling for the catalog core.
//!
//! Each module defines its own error enum; this type aggregates them so
//! the request layer can return one error from handlers. Rate limiting
//! and blocked deletions are deliberately not here - both are structured
//! results ([`crate::rate_limit::RateLimitDecision`],
//! [`crate::tree::DeletionCheck`]) the caller renders, not failures.

use thiserror::Error;

use crate::config::ConfigError;
use crate::csrf::CsrfError;
use crate::slug::SlugError;

/// Application-level error type for the catalog core.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Slug derivation failed.
    #[error("Slug error: {0}")]
    Slug(#[from] SlugError),

    /// CSRF validation failed.
    #[error("CSRF error: {0}")]
    Csrf(#[from] CsrfError),
}

/// Result type alias for `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_errors_convert() {
        let err: CatalogError = SlugError::EmptyCandidate.into();
        assert!(matches!(err, CatalogError::Slug(_)));

        let err: CatalogError = CsrfError::InvalidToken.into();
        assert_eq!(err.to_string(), "CSRF error: invalid CSRF token");
    }
}
