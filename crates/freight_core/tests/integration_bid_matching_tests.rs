mod support;

use freight_core::matching::{create_score_based_ranking, create_simple_ranking};
use freight_core::CoreError;
use support::{light_load, populated_engine, populated_engine_with};

#[test]
fn generated_bids_are_ranked_cheapest_first() {
    let engine = populated_engine(42, 12);
    let bids = engine.generate_bids("l1").expect("bids");

    assert!(!bids.is_empty(), "nearby fleet must produce candidates");
    for pair in bids.windows(2) {
        assert!(
            pair[0].amount <= pair[1].amount,
            "simple ranking orders by amount ascending"
        );
    }
    for bid in &bids {
        assert!(bid.amount > 0.0);
        assert!((0.0..=5.0).contains(&bid.rating.value()));
        assert_eq!(bid.id, format!("bid-l1-{}", bid.driver_id));
    }
}

#[test]
fn unknown_load_fails_with_not_found() {
    let engine = populated_engine(42, 12);
    let err = engine.generate_bids("no-such-load").expect_err("must fail");
    assert!(matches!(err, CoreError::NotFound { .. }));
}

#[test]
fn same_seed_same_bids() {
    let a = populated_engine(7, 20).generate_bids("l1").expect("bids");
    let b = populated_engine(7, 20).generate_bids("l1").expect("bids");
    assert_eq!(a, b);
}

#[test]
fn policies_rank_the_same_candidate_set() {
    let simple = populated_engine_with(11, 15, create_simple_ranking())
        .generate_bids("l1")
        .expect("bids");
    let scored = populated_engine_with(11, 15, create_score_based_ranking(1.0, 150.0, 0.05))
        .generate_bids("l1")
        .expect("bids");

    assert_eq!(simple.len(), scored.len(), "same filter, different order");
    let mut simple_ids: Vec<_> = simple.iter().map(|b| b.driver_id.clone()).collect();
    let mut scored_ids: Vec<_> = scored.iter().map(|b| b.driver_id.clone()).collect();
    simple_ids.sort();
    scored_ids.sort();
    assert_eq!(simple_ids, scored_ids);
}

#[test]
fn accepting_a_generated_bid_advances_the_load() {
    let mut engine = populated_engine(42, 12);
    let bids = engine.generate_bids("l1").expect("bids");

    let mut load = light_load("l1");
    load.bids = bids.clone();
    engine.insert_load(load);

    engine.accept_bid("l1", &bids[0].id).expect("acceptance");
    let load = engine.load("l1").expect("load");
    assert_eq!(load.accepted_bid.as_deref(), Some(bids[0].id.as_str()));
    assert!(
        !load.status.can_transition_to(freight_core::domain::BookingStatus::Bidding),
        "accepted load can never fall back to bidding"
    );
}

#[test]
fn empty_fleet_yields_empty_bid_sequence() {
    let mut engine = freight_core::matching::MatchingEngine::new(
        freight_core::PricingConfig::default(),
        create_simple_ranking(),
    );
    engine.insert_load(light_load("l1"));

    let bids = engine.generate_bids("l1").expect("empty, not an error");
    assert!(bids.is_empty());
}
