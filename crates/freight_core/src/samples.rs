//! Fixed known-good sample data.
//!
//! Two consumers: the placeholder [`crate::generate_bids`] path, and the
//! degraded-mode fallback in [`crate::store`]. The records mirror what the
//! backend would serve on a healthy day, so screens render identically in
//! offline mode.

use std::time::Duration;

use crate::domain::{
    Bid, BookingStatus, Load, Location, Rating, Truck, TruckStatus, TruckType,
};

fn rating(value: f64) -> Rating {
    Rating::new(value).expect("sample ratings are within bounds")
}

/// The fixed bid set shown for any load on the placeholder path, in its
/// original listing order. The load id does not influence the result, and no
/// ranking policy is applied.
pub fn sample_bids(_load_id: &str) -> Vec<Bid> {
    vec![
        Bid {
            id: "b1".to_string(),
            driver_id: "d1".to_string(),
            driver_name: "Rajesh Kumar".to_string(),
            rating: rating(4.8),
            amount: 4500.0,
            eta: Duration::from_secs(45 * 60),
            vehicle_type: TruckType::MiniTruck,
            vehicle_model: "Tata Ace Gold".to_string(),
        },
        Bid {
            id: "b2".to_string(),
            driver_id: "d2".to_string(),
            driver_name: "Simran Singh".to_string(),
            rating: rating(4.9),
            amount: 4200.0,
            eta: Duration::from_secs(60 * 60),
            vehicle_type: TruckType::Pickup8ft,
            vehicle_model: "Bolero Pickup".to_string(),
        },
        Bid {
            id: "b3".to_string(),
            driver_id: "d3".to_string(),
            driver_name: "Ahmed Khan".to_string(),
            rating: rating(4.6),
            amount: 4000.0,
            eta: Duration::from_secs(75 * 60),
            vehicle_type: TruckType::MiniTruck,
            vehicle_model: "Mahindra Supro".to_string(),
        },
    ]
}

/// Known-good fleet records for the degraded-mode fallback.
pub fn sample_trucks() -> Vec<Truck> {
    vec![
        Truck {
            id: "t1".to_string(),
            plate: "KA-01-HH-1234".to_string(),
            truck_type: TruckType::MiniTruck,
            status: TruckStatus::Available,
            location: Location {
                id: "l1".to_string(),
                address: "Indiranagar".to_string(),
                lat: 12.97,
                lng: 77.63,
            },
            driver_name: Some("Raju S".to_string()),
            fuel_level: Some(75.0),
        },
        Truck {
            id: "t2".to_string(),
            plate: "MH-04-AB-9876".to_string(),
            truck_type: TruckType::Container32ft,
            status: TruckStatus::Busy,
            location: Location {
                id: "l2".to_string(),
                address: "Whitefield".to_string(),
                lat: 12.96,
                lng: 77.75,
            },
            driver_name: Some("Vikram Singh".to_string()),
            fuel_level: Some(45.0),
        },
        Truck {
            id: "t3".to_string(),
            plate: "DL-02-XY-4545".to_string(),
            truck_type: TruckType::Trailer40ft,
            status: TruckStatus::Available,
            location: Location {
                id: "l3".to_string(),
                address: "Electronic City".to_string(),
                lat: 12.84,
                lng: 77.66,
            },
            driver_name: Some("Suresh Kumar".to_string()),
            fuel_level: Some(90.0),
        },
    ]
}

/// Known-good load records for the degraded-mode fallback.
pub fn sample_loads() -> Vec<Load> {
    vec![
        Load {
            id: "ld1".to_string(),
            pickup: Location {
                id: "p1".to_string(),
                address: "Indiranagar".to_string(),
                lat: 12.97,
                lng: 77.63,
            },
            drop: Location {
                id: "d1".to_string(),
                address: "Electronic City".to_string(),
                lat: 12.84,
                lng: 77.66,
            },
            weight_kg: 850.0,
            goods_type: "Furniture".to_string(),
            distance_km: 22.0,
            status: BookingStatus::Bidding,
            suggested_price: 1800.0,
            bids: Vec::new(),
            accepted_bid: None,
        },
        Load {
            id: "ld2".to_string(),
            pickup: Location {
                id: "p2".to_string(),
                address: "Whitefield".to_string(),
                lat: 12.96,
                lng: 77.75,
            },
            drop: Location {
                id: "d2".to_string(),
                address: "Yeshwanthpur".to_string(),
                lat: 13.02,
                lng: 77.55,
            },
            weight_kg: 6200.0,
            goods_type: "Machinery".to_string(),
            distance_km: 31.0,
            status: BookingStatus::Draft,
            suggested_price: 4200.0,
            bids: Vec::new(),
            accepted_bid: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_bids_ignore_the_load_id() {
        assert_eq!(sample_bids("a"), sample_bids("completely-different"));
    }

    #[test]
    fn sample_bids_are_well_formed() {
        let bids = sample_bids("ld1");
        assert_eq!(bids.len(), 3);
        for bid in &bids {
            assert!(bid.amount > 0.0);
            assert!(!bid.driver_name.is_empty());
            assert!(bid.eta > Duration::ZERO);
        }
    }

    #[test]
    fn sample_records_round_trip_through_json() {
        let trucks = sample_trucks();
        let json = serde_json::to_string(&trucks).expect("serialize");
        let back: Vec<Truck> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(trucks, back);
    }
}
