use std::time::Duration;

use h3o::CellIndex;

use crate::domain::{Bid, Rating, TruckType};

/// A driver known to the matching engine: identity, vehicle, position, and
/// the fuel efficiency their quotes are priced with.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverProfile {
    pub driver_id: String,
    pub name: String,
    pub rating: Rating,
    pub vehicle_type: TruckType,
    pub vehicle_model: String,
    pub position: CellIndex,
    pub mileage_km_per_l: f64,
    pub available: bool,
}

/// A filtered, priced candidate handed to a ranking policy.
///
/// Filtering and quoting happen in the engine so every policy stays a pure
/// ranking function over `(Load, candidates)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuote {
    pub profile: DriverProfile,
    /// Haversine distance from the driver to the pickup (km).
    pub pickup_distance_km: f64,
    /// Quoted amount: the pricing estimator's suggested bid for this driver's
    /// vehicle over the load's distance.
    pub amount: f64,
    /// Time for the driver to reach the pickup.
    pub eta: Duration,
}

impl CandidateQuote {
    /// Materialize this quote as a Bid against the given load.
    pub fn to_bid(&self, load_id: &str) -> Bid {
        Bid {
            id: format!("bid-{load_id}-{}", self.profile.driver_id),
            driver_id: self.profile.driver_id.clone(),
            driver_name: self.profile.name.clone(),
            rating: self.profile.rating,
            amount: self.amount,
            eta: self.eta,
            vehicle_type: self.profile.vehicle_type,
            vehicle_model: self.profile.vehicle_model.clone(),
        }
    }
}
