//! Marketplace domain records: loads, bids, trucks, and their lifecycles.
//!
//! These are plain data records exchanged with UI callers and the backing
//! store. The only behavior here is what the records themselves guarantee:
//!
//! - **Ratings** are validated into `[0, 5]` on construction
//! - **BookingStatus** progresses strictly forward, never backwards
//! - **Bids** are immutable; acceptance mutates only the owning Load

use std::time::Duration;

use h3o::CellIndex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::spatial::cell_for_coords;

/// Role attribute carried by the identity provider's session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    Customer,
    Driver,
    FleetOwner,
}

impl UserRole {
    /// Short description shown on the role picker.
    pub fn description(&self) -> &'static str {
        match self {
            UserRole::Customer => "Ship goods & track loads",
            UserRole::Driver => "Find loads & earn money",
            UserRole::FleetOwner => "Manage trucks & drivers",
        }
    }
}

/// Vehicle classes drivers bid with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruckType {
    MiniTruck,
    Pickup8ft,
    Container32ft,
    Trailer40ft,
}

impl TruckType {
    /// Display label, matching the strings the backend stores.
    pub fn label(&self) -> &'static str {
        match self {
            TruckType::MiniTruck => "Mini Truck",
            TruckType::Pickup8ft => "Pickup 8ft",
            TruckType::Container32ft => "Container 32ft",
            TruckType::Trailer40ft => "Trailer 40ft",
        }
    }

    /// Rated payload capacity in kilograms, used for load compatibility.
    pub fn capacity_kg(&self) -> f64 {
        match self {
            TruckType::MiniTruck => 750.0,
            TruckType::Pickup8ft => 1_700.0,
            TruckType::Container32ft => 9_000.0,
            TruckType::Trailer40ft => 25_000.0,
        }
    }
}

impl std::fmt::Display for TruckType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Load lifecycle. Strictly forward-progressing: a load may skip stages
/// (e.g. Draft straight to Accepted) but never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Draft,
    Bidding,
    Accepted,
    InTransit,
    Completed,
}

impl BookingStatus {
    fn stage(&self) -> u8 {
        match self {
            BookingStatus::Draft => 0,
            BookingStatus::Bidding => 1,
            BookingStatus::Accepted => 2,
            BookingStatus::InTransit => 3,
            BookingStatus::Completed => 4,
        }
    }

    /// Whether moving to `next` respects the forward-only lifecycle.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        next.stage() > self.stage()
    }

    /// The immediately following stage, or `None` once Completed.
    pub fn advance(&self) -> Option<BookingStatus> {
        match self {
            BookingStatus::Draft => Some(BookingStatus::Bidding),
            BookingStatus::Bidding => Some(BookingStatus::Accepted),
            BookingStatus::Accepted => Some(BookingStatus::InTransit),
            BookingStatus::InTransit => Some(BookingStatus::Completed),
            BookingStatus::Completed => None,
        }
    }
}

/// Driver rating, validated into `[0, 5]` on construction.
///
/// Deserialization goes through the same validation, so backend payloads
/// cannot smuggle an out-of-range value into a record.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl TryFrom<f64> for Rating {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> f64 {
        rating.0
    }
}

impl Rating {
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(CoreError::invalid_input(format!(
                "rating must be within [0, 5], got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// A geocoded address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// The H3 position cell for this location, `None` for out-of-domain
    /// coordinates.
    pub fn to_cell(&self) -> Option<CellIndex> {
        cell_for_coords(self.lat, self.lng)
    }
}

/// A driver's priced offer against a load. Immutable once created; acceptance
/// is recorded on the Load, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub id: String,
    pub driver_id: String,
    pub driver_name: String,
    pub rating: Rating,
    pub amount: f64,
    pub eta: Duration,
    pub vehicle_type: TruckType,
    pub vehicle_model: String,
}

/// A shipment request posted by a customer. Owns its bids in ranked order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    pub id: String,
    pub pickup: Location,
    pub drop: Location,
    pub weight_kg: f64,
    pub goods_type: String,
    pub distance_km: f64,
    pub status: BookingStatus,
    pub suggested_price: f64,
    pub bids: Vec<Bid>,
    /// Identifier of the accepted bid, once one has been accepted.
    pub accepted_bid: Option<String>,
}

impl Load {
    /// Accept one of this load's bids: records the bid id and moves the load
    /// to Accepted. The bid itself is not touched.
    pub fn accept_bid(&mut self, bid_id: &str) -> Result<(), CoreError> {
        if !self.bids.iter().any(|b| b.id == bid_id) {
            return Err(CoreError::invalid_input(format!(
                "bid {bid_id} is not attached to load {}",
                self.id
            )));
        }
        if !self.status.can_transition_to(BookingStatus::Accepted) {
            return Err(CoreError::invalid_input(format!(
                "load {} cannot move from {:?} to Accepted",
                self.id, self.status
            )));
        }
        self.accepted_bid = Some(bid_id.to_string());
        self.status = BookingStatus::Accepted;
        Ok(())
    }
}

/// Truck availability as reported by the fleet panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TruckStatus {
    Available,
    Busy,
    Offline,
}

/// A fleet vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    pub plate: String,
    #[serde(rename = "type")]
    pub truck_type: TruckType,
    pub status: TruckStatus,
    pub location: Location,
    pub driver_name: Option<String>,
    /// Remaining fuel as a percentage.
    pub fuel_level: Option<f64>,
}
