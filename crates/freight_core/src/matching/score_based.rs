use std::cmp::Ordering;

use crate::domain::{Bid, Load};

use super::ranking::BidRanking;
use super::types::CandidateQuote;

/// Score-based ranking policy: weighted combination of amount, rating, and
/// ETA. Lowest score ranks first.
///
/// The score is in currency units: one rating point offsets `rating_weight`
/// units of price, and each second of pickup ETA costs `eta_weight` units.
#[derive(Debug)]
pub struct ScoreBasedRanking {
    pub amount_weight: f64,
    pub rating_weight: f64,
    pub eta_weight: f64,
}

impl ScoreBasedRanking {
    pub fn new(amount_weight: f64, rating_weight: f64, eta_weight: f64) -> Self {
        Self {
            amount_weight,
            rating_weight,
            eta_weight,
        }
    }

    fn score(&self, candidate: &CandidateQuote) -> f64 {
        candidate.amount * self.amount_weight
            + candidate.eta.as_secs() as f64 * self.eta_weight
            - candidate.profile.rating.value() * self.rating_weight
    }
}

impl Default for ScoreBasedRanking {
    fn default() -> Self {
        // A full rating point is worth 150 currency units; an hour of pickup
        // ETA costs 180.
        Self::new(1.0, 150.0, 0.05)
    }
}

impl BidRanking for ScoreBasedRanking {
    fn rank(&self, load: &Load, candidates: &[CandidateQuote]) -> Vec<Bid> {
        let mut ordered: Vec<&CandidateQuote> = candidates.iter().collect();
        ordered.sort_by(|a, b| {
            self.score(a)
                .partial_cmp(&self.score(b))
                .unwrap_or(Ordering::Equal)
        });
        ordered.into_iter().map(|c| c.to_bid(&load.id)).collect()
    }
}
