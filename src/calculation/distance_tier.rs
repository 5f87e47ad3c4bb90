//! Tiered distance surcharge calculation.
//!
//! This module determines the base surcharge for a delivery from the
//! distance tier the shipment falls into.

use rust_decimal::Decimal;

use crate::models::{PriceComponent, PriceLine};

/// Surcharge for distances over 30 km.
const TIER_OVER_30: i64 = 300;
/// Surcharge for distances over 10 km up to 30 km.
const TIER_OVER_10: i64 = 200;
/// Surcharge for distances over 2 km up to 10 km.
const TIER_OVER_2: i64 = 100;
/// Surcharge for distances up to 2 km.
const TIER_BASE: i64 = 50;

/// Determines the base surcharge for a delivery distance.
///
/// Tiers use strict greater-than bounds, evaluated top-down with first
/// match winning, so a distance of exactly 2 km falls into the lowest
/// tier and exactly 30 km into the 10..30 km tier.
///
/// The distance must already have passed validation; this function is a
/// total mapping over non-negative distances.
///
/// # Examples
///
/// ```
/// use delivery_pricing::calculation::distance_surcharge;
/// use rust_decimal::Decimal;
///
/// let line = distance_surcharge(Decimal::from(11));
/// assert_eq!(line.amount, Decimal::from(200));
/// ```
pub fn distance_surcharge(distance_km: Decimal) -> PriceLine {
    let (amount, band) = if distance_km > Decimal::from(30) {
        (TIER_OVER_30, "over 30 km")
    } else if distance_km > Decimal::from(10) {
        (TIER_OVER_10, "over 10 km and at most 30 km")
    } else if distance_km > Decimal::from(2) {
        (TIER_OVER_2, "over 2 km and at most 10 km")
    } else {
        (TIER_BASE, "at most 2 km")
    };

    PriceLine {
        component: PriceComponent::DistanceTier,
        amount: Decimal::from(amount),
        detail: format!("{} km is {}: +{}", distance_km.normalize(), band, amount),
    }
}
