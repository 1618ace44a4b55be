//! Route cost estimation: fuel, tolls, and a suggested minimum bid.
//!
//! The estimator is a pure function over trip parameters plus an injected
//! [`PricingConfig`]; fuel prices are configuration, never process-wide
//! globals, so per-region or per-day pricing is a config swap.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Reference diesel price (currency units per litre).
pub const FUEL_PRICE_DIESEL: f64 = 94.5;

/// Reference petrol price (currency units per litre).
pub const FUEL_PRICE_PETROL: f64 = 101.2;

/// Profit margin applied on top of total cost to suggest a bid.
pub const DEFAULT_MARGIN_MULTIPLIER: f64 = 1.30;

/// Heuristic toll spacing: one toll booth per 50 km of distance.
pub const DEFAULT_TOLL_INTERVAL_KM: f64 = 50.0;

/// Pricing parameters injected into the estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fuel price in currency units per litre.
    pub fuel_price_per_litre: f64,
    /// Multiplier applied to total cost to suggest a profitable bid.
    pub margin_multiplier: f64,
    /// Distance between toll points for the informational toll count.
    pub toll_interval_km: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            fuel_price_per_litre: FUEL_PRICE_DIESEL,
            margin_multiplier: DEFAULT_MARGIN_MULTIPLIER,
            toll_interval_km: DEFAULT_TOLL_INTERVAL_KM,
        }
    }
}

impl PricingConfig {
    pub fn with_fuel_price(mut self, price_per_litre: f64) -> Self {
        self.fuel_price_per_litre = price_per_litre;
        self
    }

    pub fn with_margin_multiplier(mut self, multiplier: f64) -> Self {
        self.margin_multiplier = multiplier;
        self
    }

    pub fn with_toll_interval_km(mut self, interval_km: f64) -> Self {
        self.toll_interval_km = interval_km;
        self
    }
}

/// Computed trip cost breakdown. Pure derived data: recomputed on every input
/// change, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCost {
    /// Trip distance as supplied (km).
    pub distance_km: f64,
    /// Fuel price used for the estimate (currency per litre).
    pub fuel_price: f64,
    /// Vehicle fuel efficiency as supplied (km per litre).
    pub mileage_km_per_l: f64,
    /// Estimated number of toll points along the trip. Informational only:
    /// the aggregate `toll_avg_cost` enters the total directly, the count is
    /// never multiplied back in.
    pub toll_count: u32,
    /// Aggregate toll outlay as supplied.
    pub toll_avg_cost: f64,
    /// Litres of fuel needed for the trip.
    pub fuel_needed_l: f64,
    /// Fuel expense before rounding.
    pub fuel_cost: f64,
    /// Fuel plus tolls, rounded to the nearest whole currency unit.
    pub total_cost: f64,
    /// Recommended bid: unrounded total scaled by the margin multiplier,
    /// rounded to the nearest whole currency unit.
    pub suggested_bid: f64,
}

fn require_positive(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::invalid_input(format!(
            "{name} must be a positive finite number, got {value}"
        )));
    }
    Ok(())
}

/// Estimate the cost of a trip and the minimum bid worth placing on it.
///
/// Deterministic and side-effect-free. Fails with
/// [`CoreError::InvalidInput`] when `distance_km` or `mileage_km_per_l` is
/// non-positive or non-finite (mileage is a divisor), or when `toll_cost` is
/// negative or non-finite.
pub fn estimate_route_cost(
    config: &PricingConfig,
    distance_km: f64,
    mileage_km_per_l: f64,
    toll_cost: f64,
) -> Result<RouteCost, CoreError> {
    require_positive(distance_km, "distance_km")?;
    require_positive(mileage_km_per_l, "mileage_km_per_l")?;
    if !toll_cost.is_finite() || toll_cost < 0.0 {
        return Err(CoreError::invalid_input(format!(
            "toll_cost must be a non-negative finite number, got {toll_cost}"
        )));
    }
    require_positive(config.fuel_price_per_litre, "fuel_price_per_litre")?;
    require_positive(config.margin_multiplier, "margin_multiplier")?;
    require_positive(config.toll_interval_km, "toll_interval_km")?;

    let fuel_needed_l = distance_km / mileage_km_per_l;
    let fuel_cost = fuel_needed_l * config.fuel_price_per_litre;
    let total = fuel_cost + toll_cost;
    let suggested = total * config.margin_multiplier;

    Ok(RouteCost {
        distance_km,
        fuel_price: config.fuel_price_per_litre,
        mileage_km_per_l,
        toll_count: (distance_km / config.toll_interval_km).floor() as u32,
        toll_avg_cost: toll_cost,
        fuel_needed_l,
        fuel_cost,
        total_cost: total.round(),
        suggested_bid: suggested.round(),
    })
}
