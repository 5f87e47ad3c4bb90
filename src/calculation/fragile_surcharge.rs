//! Fragile cargo surcharge calculation.

use rust_decimal::Decimal;

use crate::models::{PriceComponent, PriceLine};

const FRAGILE_SURCHARGE: i64 = 300;

/// Determines the flat surcharge for fragile cargo.
///
/// Returns `Some` line for fragile cargo and `None` otherwise, so quote
/// breakdowns only list charges that contributed. The fragile distance
/// limit is enforced by [`crate::calculation::validate_request`] before
/// this rule runs.
///
/// # Examples
///
/// ```
/// use delivery_pricing::calculation::fragile_surcharge;
/// use rust_decimal::Decimal;
///
/// let line = fragile_surcharge(true).unwrap();
/// assert_eq!(line.amount, Decimal::from(300));
/// assert!(fragile_surcharge(false).is_none());
/// ```
pub fn fragile_surcharge(is_fragile: bool) -> Option<PriceLine> {
    if !is_fragile {
        return None;
    }

    Some(PriceLine {
        component: PriceComponent::FragileSurcharge,
        amount: Decimal::from(FRAGILE_SURCHARGE),
        detail: format!("fragile cargo: +{FRAGILE_SURCHARGE}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// FS-001: fragile cargo is charged 300
    #[test]
    fn test_fragile_cargo_is_charged() {
        let line = fragile_surcharge(true).unwrap();
        assert_eq!(line.amount, Decimal::from(300));
        assert_eq!(line.component, PriceComponent::FragileSurcharge);
        assert!(line.detail.contains("fragile"));
    }

    /// FS-002: non-fragile cargo contributes no line
    #[test]
    fn test_non_fragile_cargo_contributes_nothing() {
        assert!(fragile_surcharge(false).is_none());
    }
}
