//! Spatial operations: H3 cell conversions and haversine distances.
//!
//! Driver and load positions are H3 cells at resolution 9 (~240m cell size),
//! which is fine-grained enough for city-scale pickup matching. Distances are
//! haversine between cell centroids, cached because the matching engine
//! recomputes the same pickup pairs for every ranking pass.

use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock};

use h3o::{CellIndex, LatLng, Resolution};
use lru::LruCache;

/// H3 resolution used for all marketplace positions.
pub const POSITION_RESOLUTION: Resolution = Resolution::Nine;

/// Average city driving speed used for pickup ETA estimation (km/h).
pub const AVG_SPEED_KMH: f64 = 40.0;

/// Convert a lat/lng pair to a position cell.
///
/// Returns `None` when the coordinates are outside the valid lat/lng domain.
pub fn cell_for_coords(lat: f64, lng: f64) -> Option<CellIndex> {
    LatLng::new(lat, lng).ok().map(|c| c.to_cell(POSITION_RESOLUTION))
}

fn distance_km_between_cells_uncached(a: CellIndex, b: CellIndex) -> f64 {
    let a: LatLng = a.into();
    let b: LatLng = b.into();
    let (lat1, lon1) = (a.lat().to_radians(), a.lng().to_radians());
    let (lat2, lon2) = (b.lat().to_radians(), b.lng().to_radians());
    let sin_dlat = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon = ((lon2 - lon1) * 0.5).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    6371.0 * c
}

fn distance_cache() -> &'static Mutex<LruCache<(CellIndex, CellIndex), f64>> {
    static CACHE: OnceLock<Mutex<LruCache<(CellIndex, CellIndex), f64>>> = OnceLock::new();
    CACHE.get_or_init(|| {
        Mutex::new(LruCache::new(
            NonZeroUsize::new(10_000).expect("cache size must be non-zero"),
        ))
    })
}

/// Haversine distance between two H3 cells with LRU caching.
///
/// Uses a symmetric key (smaller cell first) to maximize cache hits. Falls back
/// to an uncached compute if the cache mutex is poisoned.
pub fn distance_km_between_cells(a: CellIndex, b: CellIndex) -> f64 {
    let key = if a < b { (a, b) } else { (b, a) };
    let mut cache = match distance_cache().lock() {
        Ok(guard) => guard,
        Err(_) => return distance_km_between_cells_uncached(key.0, key.1),
    };
    *cache.get_or_insert(key, || distance_km_between_cells_uncached(key.0, key.1))
}

/// Estimate a pickup ETA from a haversine distance, floored at one second.
pub fn estimate_pickup_eta_secs(distance_km: f64) -> u64 {
    if distance_km <= 0.0 {
        return 1;
    }
    ((distance_km / AVG_SPEED_KMH) * 3600.0).max(1.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_cell, test_neighbor_cell};

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km_between_cells(test_cell(), test_cell()), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = test_cell();
        let b = test_neighbor_cell();
        let ab = distance_km_between_cells(a, b);
        let ba = distance_km_between_cells(b, a);
        assert!(ab > 0.0);
        assert_eq!(ab, ba);
    }

    #[test]
    fn eta_has_one_second_floor() {
        assert_eq!(estimate_pickup_eta_secs(0.0), 1);
        assert_eq!(estimate_pickup_eta_secs(-4.0), 1);
    }

    #[test]
    fn eta_scales_with_distance() {
        // 40 km at 40 km/h is exactly one hour.
        assert_eq!(estimate_pickup_eta_secs(40.0), 3600);
    }
}
