//! Populate a matching engine with a seeded fleet and print the ranked bids
//! for one load, plus the cost breakdown a driver would see.
//!
//! Run with: cargo run -p freight_core --example marketplace_run

use freight_core::estimate_route_cost;
use freight_core::fleet::{build_fleet, FleetParams};
use freight_core::matching::{create_simple_ranking, MatchingEngine};
use freight_core::pricing::PricingConfig;
use freight_core::test_helpers::sample_load;

fn main() {
    const NUM_DRIVERS: usize = 25;
    const SEED: u64 = 123;

    let load = sample_load("ld-demo");
    let mut engine = MatchingEngine::new(PricingConfig::default(), create_simple_ranking());
    engine.insert_load(load.clone());
    engine.extend_fleet(build_fleet(
        &FleetParams::default()
            .with_seed(SEED)
            .with_num_drivers(NUM_DRIVERS),
    ));

    println!(
        "--- Marketplace run ({} drivers, seed {}) ---",
        NUM_DRIVERS, SEED
    );
    println!(
        "Load {}: {} -> {} ({} km, {} kg of {})",
        load.id,
        load.pickup.address,
        load.drop.address,
        load.distance_km,
        load.weight_kg,
        load.goods_type
    );

    match engine.generate_bids(&load.id) {
        Ok(bids) if bids.is_empty() => println!("No drivers within match radius."),
        Ok(bids) => {
            println!("\nRanked bids:");
            for (i, bid) in bids.iter().enumerate() {
                println!(
                    "  {}  {}  {:.1}★  {} ({})  amount={}  eta={} min",
                    i + 1,
                    bid.driver_name,
                    bid.rating.value(),
                    bid.vehicle_type,
                    bid.vehicle_model,
                    bid.amount,
                    bid.eta.as_secs() / 60,
                );
            }
        }
        Err(err) => println!("Bid generation failed: {err}"),
    }

    let config = PricingConfig::default();
    match estimate_route_cost(&config, load.distance_km, 12.0, 250.0) {
        Ok(cost) => {
            println!("\nDriver cost breakdown at 12 km/l, 250 in tolls:");
            println!("  fuel: {:.1} l = {}", cost.fuel_needed_l, cost.fuel_cost);
            println!("  toll points (est.): {}", cost.toll_count);
            println!("  total cost: {}", cost.total_cost);
            println!("  suggested bid: {}", cost.suggested_bid);
        }
        Err(err) => println!("Estimate failed: {err}"),
    }
}
