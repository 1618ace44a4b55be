use crate::domain::{Bid, Load};

use super::types::CandidateQuote;

/// Trait for bid ranking policies.
///
/// A policy orders an already filtered, already priced candidate set into the
/// bid sequence a shipper sees. The first bid gets visual priority, so order
/// is the whole contract.
///
/// Policies must be pure: no state, no side effects, same output for the same
/// `(load, candidates)` input.
pub trait BidRanking: Send + Sync {
    /// Rank the candidates for a load, best offer first.
    ///
    /// An empty candidate slice yields an empty bid sequence.
    fn rank(&self, load: &Load, candidates: &[CandidateQuote]) -> Vec<Bid>;
}
