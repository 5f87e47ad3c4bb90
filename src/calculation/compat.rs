//! Sentinel compatibility boundary.
//!
//! [`quote_delivery`](super::quote_delivery) is the canonical API; this
//! module preserves the legacy contract for callers that expect a plain
//! integer cost with -1 signaling a validation failure.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::error;

use super::quote::quote_delivery;
use crate::models::{DeliveryRequest, LoadLevel, PackageSize};

/// The sentinel returned when a request fails validation. Callers must
/// treat it as "no valid price", not as a cost of -1 currency units.
pub const SENTINEL_COST: i64 = -1;

/// Calculates the delivery cost, collapsing failures into a sentinel.
///
/// On success, returns the final cost in the smallest currency unit. On
/// any validation failure (negative distance, fragile cargo beyond the
/// fragile distance limit, or a non-finite distance value) a diagnostic
/// is emitted via `tracing::error!` and [`SENTINEL_COST`] is returned.
///
/// # Examples
///
/// ```
/// use delivery_pricing::calculation::calculate_delivery_cost;
/// use delivery_pricing::models::{LoadLevel, PackageSize};
///
/// let cost = calculate_delivery_cost(5.0, PackageSize::Small, true, LoadLevel::Normal);
/// assert_eq!(cost, 500);
///
/// let failed = calculate_delivery_cost(-1.0, PackageSize::Small, false, LoadLevel::Normal);
/// assert_eq!(failed, -1);
/// ```
pub fn calculate_delivery_cost(
    distance_km: f64,
    size: PackageSize,
    is_fragile: bool,
    load_level: LoadLevel,
) -> i64 {
    let distance_km = match Decimal::try_from(distance_km) {
        Ok(distance) => distance,
        Err(err) => {
            error!(
                distance_km,
                error = %err,
                "Rejecting delivery cost request: distance is not a representable number"
            );
            return SENTINEL_COST;
        }
    };

    let request = DeliveryRequest {
        distance_km,
        size,
        is_fragile,
        load_level,
    };

    match quote_delivery(&request) {
        Ok(quote) => quote.total.to_i64().unwrap_or(SENTINEL_COST),
        Err(err) => {
            error!(error = %err, "Delivery cost calculation failed");
            SENTINEL_COST
        }
    }
}
