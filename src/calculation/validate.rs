//! Delivery request validation.
//!
//! Validation runs before any cost accumulation; a request that fails
//! here never produces a partial cost.

use rust_decimal::Decimal;

use crate::error::{PricingError, PricingResult};
use crate::models::DeliveryRequest;

/// The maximum distance in kilometers fragile cargo may travel.
pub const FRAGILE_DISTANCE_LIMIT_KM: i64 = 30;

/// Validates a delivery request before pricing.
///
/// Checks, in order:
/// 1. the distance is non-negative (`NegativeDistance` otherwise);
/// 2. fragile cargo stays within [`FRAGILE_DISTANCE_LIMIT_KM`]
///    (`FragileDistanceExceeded` otherwise).
///
/// A fragile request at exactly the limit is valid; the bound is strict.
///
/// # Examples
///
/// ```
/// use delivery_pricing::calculation::validate_request;
/// use delivery_pricing::models::{DeliveryRequest, LoadLevel, PackageSize};
/// use rust_decimal::Decimal;
///
/// let request = DeliveryRequest {
///     distance_km: Decimal::from(30),
///     size: PackageSize::Small,
///     is_fragile: true,
///     load_level: LoadLevel::Normal,
/// };
/// assert!(validate_request(&request).is_ok());
/// ```
pub fn validate_request(request: &DeliveryRequest) -> PricingResult<()> {
    if request.distance_km < Decimal::ZERO {
        return Err(PricingError::NegativeDistance {
            distance_km: request.distance_km,
        });
    }

    let limit_km = Decimal::from(FRAGILE_DISTANCE_LIMIT_KM);
    if request.is_fragile && request.distance_km > limit_km {
        return Err(PricingError::FragileDistanceExceeded {
            distance_km: request.distance_km,
            limit_km,
        });
    }

    Ok(())
}
