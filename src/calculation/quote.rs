//! Quote orchestration for the Delivery Pricing Engine.
//!
//! This module composes the individual pricing rules into a complete
//! delivery quote.

use rust_decimal::Decimal;

use crate::error::PricingResult;
use crate::models::{DeliveryRequest, Quote};

use super::distance_tier::distance_surcharge;
use super::fragile_surcharge::fragile_surcharge;
use super::load_multiplier::load_multiplier;
use super::size_surcharge::size_surcharge;
use super::validate::validate_request;

/// The minimum permissible final cost. The total is never below this
/// floor regardless of the computed value.
pub const MINIMUM_COST: i64 = 400;

/// Prices a delivery request.
///
/// Validates the request, accumulates the surcharge lines (distance tier,
/// package size, fragility), applies the service load multiplier to the
/// subtotal, rounds the result up to the next integer, and clamps it to
/// the [`MINIMUM_COST`] floor.
///
/// The calculation is pure and deterministic: identical requests always
/// produce identical quotes.
///
/// # Errors
///
/// Returns the validation error for a negative distance or for fragile
/// cargo beyond the fragile distance limit; no cost is accumulated in
/// either case.
///
/// # Examples
///
/// ```
/// use delivery_pricing::calculation::quote_delivery;
/// use delivery_pricing::models::{DeliveryRequest, LoadLevel, PackageSize};
/// use rust_decimal::Decimal;
///
/// let request = DeliveryRequest {
///     distance_km: Decimal::from(31),
///     size: PackageSize::Small,
///     is_fragile: false,
///     load_level: LoadLevel::VeryHigh,
/// };
/// let quote = quote_delivery(&request).unwrap();
/// // (300 + 100) x 1.6 = 640
/// assert_eq!(quote.total, Decimal::from(640));
/// ```
pub fn quote_delivery(request: &DeliveryRequest) -> PricingResult<Quote> {
    validate_request(request)?;

    let mut lines = vec![
        distance_surcharge(request.distance_km),
        size_surcharge(request.size),
    ];
    if let Some(line) = fragile_surcharge(request.is_fragile) {
        lines.push(line);
    }

    let subtotal: Decimal = lines.iter().map(|line| line.amount).sum();
    let multiplier = load_multiplier(request.load_level);
    let raised = (subtotal * multiplier).ceil();

    let floor = Decimal::from(MINIMUM_COST);
    let floor_applied = raised < floor;
    let total = raised.max(floor);

    Ok(Quote {
        lines,
        subtotal,
        load_level: request.load_level,
        load_multiplier: multiplier,
        floor_applied,
        total,
    })
}
