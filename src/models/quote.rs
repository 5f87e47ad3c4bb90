//! Quote models for the Delivery Pricing Engine.
//!
//! This module contains the [`Quote`] type and its associated structures
//! that capture the itemized outcome of a pricing calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LoadLevel;

/// Identifies which pricing rule produced a price line.
///
/// # Example
///
/// ```
/// use delivery_pricing::models::PriceComponent;
///
/// let component = PriceComponent::DistanceTier;
/// assert_eq!(format!("{:?}", component), "DistanceTier");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceComponent {
    /// Base surcharge determined by the distance tier.
    DistanceTier,
    /// Flat surcharge determined by package size.
    SizeSurcharge,
    /// Flat surcharge for fragile cargo.
    FragileSurcharge,
}

/// A single additive line item in a delivery quote.
///
/// Each line records the rule that produced it, the amount it contributed
/// to the subtotal, and a short human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLine {
    /// The pricing rule this line came from.
    pub component: PriceComponent,
    /// The amount contributed to the subtotal.
    pub amount: Decimal,
    /// Human-readable explanation of the charge.
    pub detail: String,
}

/// The complete result of pricing a delivery.
///
/// Captures the individual surcharge lines, the subtotal before the load
/// multiplier, the multiplier itself, and the final cost after rounding
/// up and applying the minimum-cost floor.
///
/// # Example
///
/// ```
/// use delivery_pricing::calculation::quote_delivery;
/// use delivery_pricing::models::{DeliveryRequest, LoadLevel, PackageSize};
/// use rust_decimal::Decimal;
///
/// let request = DeliveryRequest {
///     distance_km: Decimal::from(11),
///     size: PackageSize::Small,
///     is_fragile: false,
///     load_level: LoadLevel::High,
/// };
/// let quote = quote_delivery(&request).unwrap();
/// assert_eq!(quote.subtotal, Decimal::from(300));
/// assert_eq!(quote.total, Decimal::from(420));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The additive surcharge lines, in rule application order.
    pub lines: Vec<PriceLine>,
    /// The sum of all lines before the load multiplier.
    pub subtotal: Decimal,
    /// The service load level the quote was priced under.
    pub load_level: LoadLevel,
    /// The multiplier applied for the load level.
    pub load_multiplier: Decimal,
    /// Whether the minimum-cost floor raised the total.
    pub floor_applied: bool,
    /// The final integral cost in the smallest currency unit.
    pub total: Decimal,
}
