//! Property-based tests for payment settlement.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::PaymentError;
use super::service::PaymentService;
use crate::purchase_order::PoStatus;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Accepted payments never push the paid total past the PO total.
    #[test]
    fn prop_never_overpaid(
        total in 1i64..10_000_000,
        paid_ratio in 0i64..=100,
        amount in 1i64..10_000_000,
    ) {
        let total_amount = Decimal::new(total, 2);
        let total_paid = Decimal::new(total * paid_ratio / 100, 2);
        let amount = Decimal::new(amount, 2);

        match PaymentService::settle(total_amount, total_paid, amount) {
            Ok(settlement) => {
                prop_assert!(settlement.new_total_paid <= total_amount);
                prop_assert!(settlement.outstanding_after >= Decimal::ZERO);
                prop_assert_eq!(
                    settlement.outstanding_after + settlement.new_total_paid,
                    total_amount
                );
            }
            Err(PaymentError::ExceedsOutstanding { amount: a, outstanding }) => {
                prop_assert!(a > outstanding);
                prop_assert_eq!(outstanding, total_amount - total_paid);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// A sequence of payments settles to FULLY_PAID exactly when the total is reached.
    #[test]
    fn prop_sequence_status(
        total in 100i64..1_000_000,
        payments in prop::collection::vec(1i64..200_000, 1..10),
    ) {
        let total_amount = Decimal::new(total, 2);
        let mut paid = Decimal::ZERO;

        for cents in payments {
            let amount = Decimal::new(cents, 2);
            if let Ok(settlement) = PaymentService::settle(total_amount, paid, amount) {
                paid = settlement.new_total_paid;
                let expected = if paid == total_amount {
                    PoStatus::FullyPaid
                } else {
                    PoStatus::PartiallyPaid
                };
                prop_assert_eq!(settlement.new_status, expected);
            }
        }

        prop_assert!(paid <= total_amount);
    }
}
