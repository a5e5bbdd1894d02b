//! Money bounds shared by every stored amount.
//!
//! Amounts live in `NUMERIC(19, 4)` columns: at most four decimal places
//! and fifteen integer digits. Anything outside that would be rounded or
//! rejected by the store, so the rules here refuse it up front.

use rust_decimal::Decimal;

/// Decimal places kept for every stored amount.
pub const MONEY_SCALE: u32 = 4;

/// Largest storable amount, `999_999_999_999_999.9999`.
pub const MAX_AMOUNT: Decimal =
    Decimal::from_parts(0x89E7_FFFF, 0x8AC7_2304, 0, false, MONEY_SCALE);

/// True if `value` needs no more than four decimal places.
///
/// Trailing zeros do not count, so `1.50000` passes.
#[must_use]
pub fn has_money_scale(value: Decimal) -> bool {
    value.normalize().scale() <= MONEY_SCALE
}

/// True if `value` can be stored without rounding or overflow.
#[must_use]
pub fn fits_money_column(value: Decimal) -> bool {
    has_money_scale(value) && value.abs() <= MAX_AMOUNT
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_max_amount_literal() {
        assert_eq!(MAX_AMOUNT, dec!(999999999999999.9999));
    }

    #[rstest]
    #[case(dec!(0.01), true)]
    #[case(dec!(0.3333), true)]
    #[case(dec!(1.50000), true)]
    #[case(dec!(0.33333), false)]
    #[case(dec!(999999999999999.9999), true)]
    #[case(dec!(1000000000000000), false)]
    #[case(Decimal::MAX, false)]
    fn test_fits_money_column(#[case] value: Decimal, #[case] fits: bool) {
        assert_eq!(fits_money_column(value), fits);
    }
}
