pub mod engine;
pub mod ranking;
pub mod score_based;
pub mod simple;
pub mod types;

pub use engine::MatchingEngine;
pub use ranking::BidRanking;
pub use score_based::ScoreBasedRanking;
pub use simple::SimpleRanking;
pub use types::{CandidateQuote, DriverProfile};

/// Create the simple ranking policy (lowest amount first).
pub fn create_simple_ranking() -> Box<dyn BidRanking> {
    Box::new(SimpleRanking)
}

/// Create a score-based ranking policy with the given weights.
pub fn create_score_based_ranking(
    amount_weight: f64,
    rating_weight: f64,
    eta_weight: f64,
) -> Box<dyn BidRanking> {
    Box::new(ScoreBasedRanking::new(amount_weight, rating_weight, eta_weight))
}
