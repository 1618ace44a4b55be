//! Shared setup for the integration suites.

use freight_core::domain::Load;
use freight_core::fleet::{build_fleet, FleetParams};
use freight_core::matching::{create_simple_ranking, BidRanking, MatchingEngine};
use freight_core::pricing::PricingConfig;
use freight_core::test_helpers::sample_load;

/// Bounding box tight around the sample load's pickup so every generated
/// driver lands within the default match radius.
pub fn nearby_fleet_params(seed: u64, num_drivers: usize) -> FleetParams {
    FleetParams::default()
        .with_seed(seed)
        .with_num_drivers(num_drivers)
        .with_bounds(12.95, 12.99, 77.57, 77.61)
}

/// A light load every vehicle class can carry.
pub fn light_load(id: &str) -> Load {
    let mut load = sample_load(id);
    load.weight_kg = 400.0;
    load
}

/// An engine with one light load and a seeded nearby fleet.
pub fn populated_engine(seed: u64, num_drivers: usize) -> MatchingEngine {
    populated_engine_with(seed, num_drivers, create_simple_ranking())
}

pub fn populated_engine_with(
    seed: u64,
    num_drivers: usize,
    ranking: Box<dyn BidRanking>,
) -> MatchingEngine {
    let mut engine = MatchingEngine::new(PricingConfig::default(), ranking);
    engine.insert_load(light_load("l1"));
    engine.extend_fleet(build_fleet(&nearby_fleet_params(seed, num_drivers)));
    engine
}
