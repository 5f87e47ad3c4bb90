//! Package size surcharge calculation.

use rust_decimal::Decimal;

use crate::models::{PackageSize, PriceComponent, PriceLine};

const LARGE_SURCHARGE: i64 = 200;
const SMALL_SURCHARGE: i64 = 100;

/// Determines the flat surcharge for a package size.
///
/// The match is exhaustive over [`PackageSize`], so a new size category
/// cannot compile without a surcharge.
///
/// # Examples
///
/// ```
/// use delivery_pricing::calculation::size_surcharge;
/// use delivery_pricing::models::PackageSize;
/// use rust_decimal::Decimal;
///
/// let line = size_surcharge(PackageSize::Large);
/// assert_eq!(line.amount, Decimal::from(200));
/// ```
pub fn size_surcharge(size: PackageSize) -> PriceLine {
    let (amount, label) = match size {
        PackageSize::Large => (LARGE_SURCHARGE, "large"),
        PackageSize::Small => (SMALL_SURCHARGE, "small"),
    };

    PriceLine {
        component: PriceComponent::SizeSurcharge,
        amount: Decimal::from(amount),
        detail: format!("{label} package: +{amount}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// SS-001: small package surcharge
    #[test]
    fn test_small_package_surcharge() {
        let line = size_surcharge(PackageSize::Small);
        assert_eq!(line.amount, Decimal::from(100));
        assert_eq!(line.component, PriceComponent::SizeSurcharge);
        assert!(line.detail.contains("small"));
    }

    /// SS-002: large package surcharge
    #[test]
    fn test_large_package_surcharge() {
        let line = size_surcharge(PackageSize::Large);
        assert_eq!(line.amount, Decimal::from(200));
        assert_eq!(line.component, PriceComponent::SizeSurcharge);
        assert!(line.detail.contains("large"));
    }
}
