//! Fleet setup: generate driver profiles with random positions inside a
//! geographic bounding box.
//!
//! Positions are sampled at H3 resolution 9 and the RNG is seeded, so a fixed
//! seed reproduces the exact same fleet. Used by demos and integration tests
//! that need a populated matching engine.

use h3o::{CellIndex, LatLng};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Rating, TruckType};
use crate::matching::DriverProfile;
use crate::spatial::POSITION_RESOLUTION;

/// Default bounding box: Bengaluru (approx).
const DEFAULT_LAT_MIN: f64 = 12.83;
const DEFAULT_LAT_MAX: f64 = 13.05;
const DEFAULT_LNG_MIN: f64 = 77.50;
const DEFAULT_LNG_MAX: f64 = 77.78;

/// Parameters for building a sample fleet.
#[derive(Debug, Clone)]
pub struct FleetParams {
    pub num_drivers: usize,
    /// Random seed for reproducibility (if None, uses entropy).
    pub seed: Option<u64>,
    /// Bounding box for random positions (lat/lng degrees).
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
    /// Fuel efficiency range drivers are sampled from (km per litre).
    pub min_mileage_km_per_l: f64,
    pub max_mileage_km_per_l: f64,
}

impl Default for FleetParams {
    fn default() -> Self {
        Self {
            num_drivers: 25,
            seed: None,
            lat_min: DEFAULT_LAT_MIN,
            lat_max: DEFAULT_LAT_MAX,
            lng_min: DEFAULT_LNG_MIN,
            lng_max: DEFAULT_LNG_MAX,
            min_mileage_km_per_l: 4.0,
            max_mileage_km_per_l: 14.0,
        }
    }
}

impl FleetParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_num_drivers(mut self, num_drivers: usize) -> Self {
        self.num_drivers = num_drivers;
        self
    }

    pub fn with_bounds(mut self, lat_min: f64, lat_max: f64, lng_min: f64, lng_max: f64) -> Self {
        self.lat_min = lat_min;
        self.lat_max = lat_max;
        self.lng_min = lng_min;
        self.lng_max = lng_max;
        self
    }
}

const VEHICLES: [(TruckType, &str); 4] = [
    (TruckType::MiniTruck, "Tata Ace Gold"),
    (TruckType::Pickup8ft, "Bolero Pickup"),
    (TruckType::Container32ft, "Eicher Pro 3015"),
    (TruckType::Trailer40ft, "BharatBenz 4023T"),
];

fn random_cell_in_bounds<R: Rng>(rng: &mut R, params: &FleetParams) -> CellIndex {
    let lat = rng.gen_range(params.lat_min..=params.lat_max);
    let lng = rng.gen_range(params.lng_min..=params.lng_max);
    let coord = LatLng::new(lat, lng).expect("bounding box within valid lat/lng");
    coord.to_cell(POSITION_RESOLUTION)
}

/// Build a fleet of driver profiles per the given parameters.
pub fn build_fleet(params: &FleetParams) -> Vec<DriverProfile> {
    let mut rng: StdRng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..params.num_drivers)
        .map(|i| {
            let (vehicle_type, vehicle_model) = VEHICLES[rng.gen_range(0..VEHICLES.len())];
            // Ratings cluster toward the top the way marketplace ratings do.
            let rating = Rating::new(rng.gen_range(3.5..=5.0))
                .expect("sampled rating within bounds");
            DriverProfile {
                driver_id: format!("drv-{i}"),
                name: format!("Driver {i}"),
                rating,
                vehicle_type,
                vehicle_model: vehicle_model.to_string(),
                position: random_cell_in_bounds(&mut rng, params),
                mileage_km_per_l: rng
                    .gen_range(params.min_mileage_km_per_l..=params.max_mileage_km_per_l),
                available: true,
            }
        })
        .collect()
}
