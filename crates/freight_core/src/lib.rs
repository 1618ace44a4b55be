pub mod domain;
pub mod error;
pub mod fleet;
pub mod matching;
pub mod pricing;
pub mod samples;
pub mod session;
pub mod spatial;
pub mod store;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use error::{CoreError, StoreError};
pub use pricing::{estimate_route_cost, PricingConfig, RouteCost};

use domain::Bid;

/// Produce the bid set a shipper sees for a load.
///
/// This is the placeholder path: it returns the fixed sample set in its
/// original listing order regardless of the load id (the id only has to be
/// non-empty). Callers with a real load catalog and driver fleet should use
/// [`matching::MatchingEngine`] instead, which resolves the id, applies a
/// ranking policy, and fails with [`CoreError::NotFound`] when the id is
/// unknown.
pub fn generate_bids(load_id: &str) -> Result<Vec<Bid>, CoreError> {
    if load_id.is_empty() {
        return Err(CoreError::invalid_input("load id must be non-empty"));
    }
    Ok(samples::sample_bids(load_id))
}
