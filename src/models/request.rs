//! Delivery request model and related types.
//!
//! This module defines the DeliveryRequest struct together with the
//! PackageSize and LoadLevel enums describing a single pricing request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the size category of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageSize {
    /// A small package.
    Small,
    /// A large package.
    Large,
}

/// Represents the current service load level.
///
/// Each level maps to a fixed multiplier applied to the accumulated
/// surcharges; see [`crate::calculation::load_multiplier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadLevel {
    /// Normal service load, no multiplier.
    Normal,
    /// Increased service load (x1.2).
    Increased,
    /// High service load (x1.4).
    High,
    /// Very high service load (x1.6).
    VeryHigh,
}

/// Represents a single delivery pricing request.
///
/// A request is constructed per call and discarded after pricing; it has
/// no identity and owns no resources.
///
/// # Examples
///
/// ```
/// use delivery_pricing::models::{DeliveryRequest, LoadLevel, PackageSize};
/// use rust_decimal::Decimal;
///
/// let request = DeliveryRequest {
///     distance_km: Decimal::from(5),
///     size: PackageSize::Small,
///     is_fragile: false,
///     load_level: LoadLevel::Normal,
/// };
/// assert!(!request.is_fragile);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRequest {
    /// The delivery distance in kilometers.
    pub distance_km: Decimal,
    /// The size category of the package.
    pub size: PackageSize,
    /// Whether the cargo is fragile.
    pub is_fragile: bool,
    /// The current service load level.
    pub load_level: LoadLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_request() {
        let json = r#"{
            "distance_km": "11.5",
            "size": "large",
            "is_fragile": true,
            "load_level": "very_high"
        }"#;

        let request: DeliveryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.distance_km, Decimal::new(115, 1));
        assert_eq!(request.size, PackageSize::Large);
        assert!(request.is_fragile);
        assert_eq!(request.load_level, LoadLevel::VeryHigh);
    }

    #[test]
    fn test_serialize_request_round_trip() {
        let request = DeliveryRequest {
            distance_km: Decimal::new(205, 1),
            size: PackageSize::Small,
            is_fragile: false,
            load_level: LoadLevel::Increased,
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: DeliveryRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }

    #[test]
    fn test_package_size_serialization() {
        assert_eq!(
            serde_json::to_string(&PackageSize::Small).unwrap(),
            "\"small\""
        );
        assert_eq!(
            serde_json::to_string(&PackageSize::Large).unwrap(),
            "\"large\""
        );
    }

    #[test]
    fn test_load_level_serialization() {
        assert_eq!(
            serde_json::to_string(&LoadLevel::Normal).unwrap(),
            "\"normal\""
        );
        assert_eq!(
            serde_json::to_string(&LoadLevel::Increased).unwrap(),
            "\"increased\""
        );
        assert_eq!(serde_json::to_string(&LoadLevel::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::to_string(&LoadLevel::VeryHigh).unwrap(),
            "\"very_high\""
        );
    }

    #[test]
    fn test_deserialize_unknown_load_level_fails() {
        let result = serde_json::from_str::<LoadLevel>("\"extreme\"");
        assert!(result.is_err());
    }
}
