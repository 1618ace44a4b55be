use std::cmp::Ordering;

use crate::domain::{Bid, Load};

use super::ranking::BidRanking;
use super::types::CandidateQuote;

/// Baseline ranking policy: lowest amount, then highest rating, then soonest
/// ETA.
///
/// Deterministic and cheap; useful as a baseline against [`super::ScoreBasedRanking`]
/// and for tests that need a predictable order.
#[derive(Debug, Default)]
pub struct SimpleRanking;

impl BidRanking for SimpleRanking {
    fn rank(&self, load: &Load, candidates: &[CandidateQuote]) -> Vec<Bid> {
        let mut ordered: Vec<&CandidateQuote> = candidates.iter().collect();
        ordered.sort_by(|a, b| {
            a.amount
                .partial_cmp(&b.amount)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.profile
                        .rating
                        .partial_cmp(&a.profile.rating)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.eta.cmp(&b.eta))
        });
        ordered.into_iter().map(|c| c.to_bid(&load.id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_load, test_quote};

    #[test]
    fn orders_by_amount_then_rating_then_eta() {
        let load = sample_load("l1");
        let candidates = vec![
            test_quote("d1", 4500.0, 4.8, 2700),
            test_quote("d2", 4200.0, 4.9, 3600),
            test_quote("d3", 4200.0, 4.6, 1800),
            test_quote("d4", 4200.0, 4.9, 1800),
        ];

        let bids = SimpleRanking.rank(&load, &candidates);
        let order: Vec<&str> = bids.iter().map(|b| b.driver_id.as_str()).collect();
        // Cheapest first; among equal amounts higher rating wins; among equal
        // ratings the sooner ETA wins.
        assert_eq!(order, vec!["d4", "d2", "d3", "d1"]);
    }

    #[test]
    fn empty_candidates_empty_bids() {
        let load = sample_load("l1");
        assert!(SimpleRanking.rank(&load, &[]).is_empty());
    }
}
