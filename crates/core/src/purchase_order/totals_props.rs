//! Property-based tests for PO totals and due dates.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::PurchaseOrderService;
use super::types::{PoItem, PoStatus};
use crate::vendor::PaymentTerms;

fn item_strategy() -> impl Strategy<Value = PoItem> {
    (1u32..1_000, 0i64..10_000_000).prop_map(|(quantity, cents)| PoItem {
        description: "Item".to_string(),
        quantity,
        unit_price: Decimal::new(cents, 2),
    })
}

fn terms_strategy() -> impl Strategy<Value = PaymentTerms> {
    prop::sample::select(PaymentTerms::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Total equals the sum of each line computed independently, in cents.
    #[test]
    fn prop_total_matches_integer_cents(items in prop::collection::vec(item_strategy(), 1..20)) {
        let expected_cents: i64 = items
            .iter()
            .map(|i| i64::from(i.quantity) * i64::try_from(i.unit_price.mantissa()).unwrap())
            .sum();

        prop_assert_eq!(
            PurchaseOrderService::total_amount(&items).unwrap(),
            Decimal::new(expected_cents, 2)
        );
    }

    /// Valid items always pass validation and produce a non-negative total.
    #[test]
    fn prop_valid_items_accepted(items in prop::collection::vec(item_strategy(), 1..20)) {
        prop_assert!(PurchaseOrderService::validate_items(&items).is_ok());
        prop_assert!(PurchaseOrderService::total_amount(&items).unwrap() >= Decimal::ZERO);
    }

    /// Any item list either totals exactly or reports out-of-range; it never panics.
    #[test]
    fn prop_total_never_panics(
        lines in prop::collection::vec((any::<u32>(), any::<i64>(), 0u32..=28), 1..8)
    ) {
        let items: Vec<PoItem> = lines
            .into_iter()
            .map(|(quantity, mantissa, scale)| PoItem {
                description: "Item".to_string(),
                quantity,
                unit_price: Decimal::new(mantissa, scale).abs(),
            })
            .collect();

        if let Ok(total) = PurchaseOrderService::total_amount(&items) {
            prop_assert!(total <= crate::money::MAX_AMOUNT);
        }
    }

    /// Due date is exactly `terms` days after the PO date.
    #[test]
    fn prop_due_date_offset(days_from_epoch in 0i64..40_000, terms in terms_strategy()) {
        let base = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let date = base + chrono::Duration::days(days_from_epoch);
        let due = PurchaseOrderService::due_date(date, terms).unwrap();

        prop_assert_eq!((due - date).num_days(), i64::from(terms.days()));
    }

    /// Status is FULLY_PAID exactly when paid reaches the total.
    #[test]
    fn prop_status_after_payment(total in 0i64..1_000_000, paid in 1i64..1_000_000) {
        let total = Decimal::new(total, 2);
        let paid = Decimal::new(paid, 2);
        let status = PoStatus::after_payment(total, paid);

        if paid >= total {
            prop_assert_eq!(status, PoStatus::FullyPaid);
        } else {
            prop_assert_eq!(status, PoStatus::PartiallyPaid);
        }
    }
}
