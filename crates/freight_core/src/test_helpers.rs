//! Test helpers for common test setup and utilities.
//!
//! Shared across in-file unit tests and the integration suites to avoid
//! duplicating record construction.

use std::time::Duration;

use h3o::CellIndex;

use crate::domain::{Bid, BookingStatus, Load, Location, Rating, TruckType};
use crate::matching::{CandidateQuote, DriverProfile};
use crate::spatial::cell_for_coords;

/// A standard test position: central Bengaluru, resolution 9.
pub fn test_cell() -> CellIndex {
    cell_for_coords(12.97, 77.59).expect("valid test coordinates")
}

/// A neighbor of the test cell.
pub fn test_neighbor_cell() -> CellIndex {
    test_cell()
        .grid_disk::<Vec<_>>(1)
        .into_iter()
        .find(|c| *c != test_cell())
        .expect("test cell has neighbors")
}

/// A position far outside any sensible match radius (Delhi).
pub fn test_distant_cell() -> CellIndex {
    cell_for_coords(28.61, 77.21).expect("valid test coordinates")
}

/// A load in Bidding state whose pickup sits on [`test_cell`].
pub fn sample_load(id: &str) -> Load {
    Load {
        id: id.to_string(),
        pickup: Location {
            id: format!("{id}-pickup"),
            address: "MG Road".to_string(),
            lat: 12.97,
            lng: 77.59,
        },
        drop: Location {
            id: format!("{id}-drop"),
            address: "Electronic City".to_string(),
            lat: 12.84,
            lng: 77.66,
        },
        weight_kg: 1200.0,
        goods_type: "Electronics".to_string(),
        distance_km: 120.0,
        status: BookingStatus::Bidding,
        suggested_price: 5000.0,
        bids: Vec::new(),
        accepted_bid: None,
    }
}

/// A bid with fixed vehicle details and a 45 minute ETA.
pub fn sample_bid(id: &str, driver_id: &str, amount: f64) -> Bid {
    Bid {
        id: id.to_string(),
        driver_id: driver_id.to_string(),
        driver_name: format!("Driver {driver_id}"),
        rating: Rating::new(4.8).expect("rating within bounds"),
        amount,
        eta: Duration::from_secs(45 * 60),
        vehicle_type: TruckType::MiniTruck,
        vehicle_model: "Tata Ace Gold".to_string(),
    }
}

/// An available container-truck driver at the given position.
pub fn test_profile(driver_id: &str, position: CellIndex) -> DriverProfile {
    DriverProfile {
        driver_id: driver_id.to_string(),
        name: format!("Driver {driver_id}"),
        rating: Rating::new(4.5).expect("rating within bounds"),
        vehicle_type: TruckType::Container32ft,
        vehicle_model: "Eicher Pro 3015".to_string(),
        position,
        mileage_km_per_l: 8.0,
        available: true,
    }
}

/// A priced candidate for ranking-policy tests.
pub fn test_quote(driver_id: &str, amount: f64, rating: f64, eta_secs: u64) -> CandidateQuote {
    let mut profile = test_profile(driver_id, test_cell());
    profile.rating = Rating::new(rating).expect("rating within bounds");
    CandidateQuote {
        profile,
        pickup_distance_km: 2.0,
        amount,
        eta: Duration::from_secs(eta_secs),
    }
}
