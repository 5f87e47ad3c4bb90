//! Error types for the Delivery Pricing Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the validation failures that can occur while pricing a delivery.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Delivery Pricing Engine.
///
/// Both variants are validation failures detected before any cost is
/// accumulated; a request that fails validation never produces a partial
/// or negative cost.
///
/// # Example
///
/// ```
/// use delivery_pricing::error::PricingError;
/// use rust_decimal::Decimal;
///
/// let error = PricingError::NegativeDistance {
///     distance_km: Decimal::from(-1),
/// };
/// assert_eq!(error.to_string(), "Distance cannot be negative: -1 km");
/// ```
#[derive(Debug, Error)]
pub enum PricingError {
    /// The requested delivery distance was negative.
    #[error("Distance cannot be negative: {distance_km} km")]
    NegativeDistance {
        /// The offending distance in kilometers.
        distance_km: Decimal,
    },

    /// Fragile cargo was requested beyond the fragile distance limit.
    #[error("Fragile cargo cannot be shipped beyond {limit_km} km: requested {distance_km} km")]
    FragileDistanceExceeded {
        /// The requested distance in kilometers.
        distance_km: Decimal,
        /// The maximum distance fragile cargo may travel.
        limit_km: Decimal,
    },
}

/// A type alias for Results that return PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_distance_displays_value() {
        let error = PricingError::NegativeDistance {
            distance_km: Decimal::new(-25, 1),
        };
        assert_eq!(error.to_string(), "Distance cannot be negative: -2.5 km");
    }

    #[test]
    fn test_fragile_distance_exceeded_displays_distance_and_limit() {
        let error = PricingError::FragileDistanceExceeded {
            distance_km: Decimal::from(31),
            limit_km: Decimal::from(30),
        };
        assert_eq!(
            error.to_string(),
            "Fragile cargo cannot be shipped beyond 30 km: requested 31 km"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PricingError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_negative_distance() -> PricingResult<()> {
            Err(PricingError::NegativeDistance {
                distance_km: Decimal::from(-1),
            })
        }

        fn propagates_error() -> PricingResult<()> {
            returns_negative_distance()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
