//! Error taxonomy for the marketplace core.
//!
//! The core is pure computation, so the surface is small: callers hand in bad
//! numbers ([`CoreError::InvalidInput`]) or reference a load that does not
//! exist ([`CoreError::NotFound`]). Retry and backoff belong to the data-fetch
//! callers, not here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A numeric or textual input failed validation (NaN, negative distance,
    /// zero mileage divisor, out-of-range rating, empty id).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The referenced load does not exist in the catalog.
    #[error("load not found: {load_id}")]
    NotFound { load_id: String },
}

impl CoreError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn not_found(load_id: impl Into<String>) -> Self {
        Self::NotFound {
            load_id: load_id.into(),
        }
    }
}

/// Errors surfaced by [`crate::store::RecordStore`] backends.
///
/// The fallback store converts any of these into a degraded-mode sample read;
/// they never escape to UI callers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but the payload could not be used.
    #[error("store backend error: {0}")]
    Backend(String),
}
