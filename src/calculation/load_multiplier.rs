//! Service load multiplier lookup.
//!
//! This module maps the discrete service load level to the multiplier
//! applied to the accumulated surcharges.

use rust_decimal::Decimal;

use crate::models::LoadLevel;

/// Returns the multiplier for a service load level.
///
/// This is a total function over [`LoadLevel`]: normal load is x1.0,
/// increased x1.2, high x1.4, very high x1.6. An exhaustive match keeps
/// the mapping complete at compile time.
///
/// # Examples
///
/// ```
/// use delivery_pricing::calculation::load_multiplier;
/// use delivery_pricing::models::LoadLevel;
/// use rust_decimal::Decimal;
///
/// assert_eq!(load_multiplier(LoadLevel::High), Decimal::new(14, 1));
/// ```
pub fn load_multiplier(level: LoadLevel) -> Decimal {
    match level {
        LoadLevel::VeryHigh => Decimal::new(16, 1),
        LoadLevel::High => Decimal::new(14, 1),
        LoadLevel::Increased => Decimal::new(12, 1),
        LoadLevel::Normal => Decimal::ONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// LM-001: every level maps to its exact multiplier
    #[test]
    fn test_multipliers_are_exact() {
        assert_eq!(load_multiplier(LoadLevel::Normal), dec("1.0"));
        assert_eq!(load_multiplier(LoadLevel::Increased), dec("1.2"));
        assert_eq!(load_multiplier(LoadLevel::High), dec("1.4"));
        assert_eq!(load_multiplier(LoadLevel::VeryHigh), dec("1.6"));
    }

    /// LM-002: normal load leaves the sum unchanged
    #[test]
    fn test_normal_load_is_identity() {
        let sum = dec("650");
        assert_eq!(sum * load_multiplier(LoadLevel::Normal), sum);
    }
}
