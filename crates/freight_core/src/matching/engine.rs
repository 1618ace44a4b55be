//! The matching engine: candidate filtering, quoting, and ranked bid
//! generation against a load catalog.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::domain::{Bid, Load};
use crate::error::CoreError;
use crate::pricing::{estimate_route_cost, PricingConfig};
use crate::spatial::{distance_km_between_cells, estimate_pickup_eta_secs};

use super::ranking::BidRanking;
use super::types::{CandidateQuote, DriverProfile};

/// Default match radius in H3 grid cells (resolution 9), roughly 14 km.
pub const DEFAULT_MATCH_RADIUS_CELLS: u32 = 40;

/// Generates the bid sequence for a load from a known driver fleet.
///
/// The engine owns the load catalog and the fleet, prices each eligible
/// driver with the route cost estimator, and delegates ordering to a
/// [`BidRanking`] policy. It holds no hidden state beyond that data: two
/// calls over the same catalog and fleet produce the same bids.
pub struct MatchingEngine {
    catalog: HashMap<String, Load>,
    fleet: Vec<DriverProfile>,
    pricing: PricingConfig,
    ranking: Box<dyn BidRanking>,
    match_radius: u32,
    /// Aggregate toll outlay assumed when quoting a trip.
    assumed_toll_cost: f64,
}

impl MatchingEngine {
    pub fn new(pricing: PricingConfig, ranking: Box<dyn BidRanking>) -> Self {
        Self {
            catalog: HashMap::new(),
            fleet: Vec::new(),
            pricing,
            ranking,
            match_radius: DEFAULT_MATCH_RADIUS_CELLS,
            assumed_toll_cost: 0.0,
        }
    }

    /// Match drivers within this H3 grid distance of the pickup
    /// (0 = same cell only).
    pub fn with_match_radius(mut self, radius: u32) -> Self {
        self.match_radius = radius;
        self
    }

    pub fn with_assumed_toll_cost(mut self, toll_cost: f64) -> Self {
        self.assumed_toll_cost = toll_cost;
        self
    }

    pub fn insert_load(&mut self, load: Load) {
        self.catalog.insert(load.id.clone(), load);
    }

    pub fn register_driver(&mut self, profile: DriverProfile) {
        self.fleet.push(profile);
    }

    pub fn extend_fleet(&mut self, profiles: impl IntoIterator<Item = DriverProfile>) {
        self.fleet.extend(profiles);
    }

    pub fn load(&self, load_id: &str) -> Option<&Load> {
        self.catalog.get(load_id)
    }

    /// Produce the ranked bid sequence for a load.
    ///
    /// Fails with [`CoreError::NotFound`] for an unknown load id. A known
    /// load with no eligible drivers in radius yields an empty sequence,
    /// not an error.
    pub fn generate_bids(&self, load_id: &str) -> Result<Vec<Bid>, CoreError> {
        let load = self
            .catalog
            .get(load_id)
            .ok_or_else(|| CoreError::not_found(load_id))?;
        let candidates = self.candidates_for(load)?;
        debug!(
            load_id,
            fleet = self.fleet.len(),
            candidates = candidates.len(),
            "ranking candidate quotes"
        );
        Ok(self.ranking.rank(load, &candidates))
    }

    /// Accept a bid on a catalog load: records the bid id and advances the
    /// load to Accepted.
    pub fn accept_bid(&mut self, load_id: &str, bid_id: &str) -> Result<(), CoreError> {
        let load = self
            .catalog
            .get_mut(load_id)
            .ok_or_else(|| CoreError::not_found(load_id))?;
        load.accept_bid(bid_id)
    }

    /// Filter the fleet down to priced candidates for a load: available,
    /// vehicle capacity at least the load weight, within the match radius of
    /// the pickup.
    fn candidates_for(&self, load: &Load) -> Result<Vec<CandidateQuote>, CoreError> {
        let pickup = load.pickup.to_cell().ok_or_else(|| {
            CoreError::invalid_input(format!(
                "load {} pickup has out-of-domain coordinates",
                load.id
            ))
        })?;

        let mut candidates = Vec::new();
        for profile in &self.fleet {
            if !profile.available {
                continue;
            }
            if profile.vehicle_type.capacity_kg() < load.weight_kg {
                continue;
            }
            let in_radius = pickup
                .grid_distance(profile.position)
                .is_ok_and(|dist| dist >= 0 && dist <= self.match_radius as i32);
            if !in_radius {
                continue;
            }

            let quote = match estimate_route_cost(
                &self.pricing,
                load.distance_km,
                profile.mileage_km_per_l,
                self.assumed_toll_cost,
            ) {
                Ok(cost) => cost,
                Err(err) => {
                    debug!(driver_id = %profile.driver_id, %err, "skipping unpriceable driver");
                    continue;
                }
            };

            let pickup_distance_km = distance_km_between_cells(pickup, profile.position);
            candidates.push(CandidateQuote {
                profile: profile.clone(),
                pickup_distance_km,
                amount: quote.suggested_bid,
                eta: Duration::from_secs(estimate_pickup_eta_secs(pickup_distance_km)),
            });
        }
        Ok(candidates)
    }
}
