//! Property-based tests for the analytics read models.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use payables_shared::types::{PurchaseOrderId, VendorId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::AnalyticsService;
use super::types::VendorLedger;
use crate::purchase_order::{PoBalance, PoStatus};

fn status_strategy() -> impl Strategy<Value = PoStatus> {
    prop_oneof![
        Just(PoStatus::Draft),
        Just(PoStatus::Approved),
        Just(PoStatus::PartiallyPaid),
        Just(PoStatus::FullyPaid),
    ]
}

fn po_strategy() -> impl Strategy<Value = PoBalance> {
    (status_strategy(), -200i64..200, 0i64..1_000_000, 0i64..=100).prop_map(
        |(status, due_offset, total, paid_pct)| PoBalance {
            po_id: PurchaseOrderId::new(),
            status,
            payment_due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
                + Duration::days(due_offset),
            total_amount: Decimal::new(total, 2),
            total_paid: Decimal::new(total * paid_pct / 100, 2),
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bucket totals add up to the outstanding balance of every overdue, not fully paid PO.
    #[test]
    fn prop_buckets_partition_overdue_balance(
        pos in prop::collection::vec(po_strategy(), 0..30),
        hour in 0u32..24,
    ) {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap();
        let aging = AnalyticsService::payment_aging(&pos, now);

        let expected: Decimal = pos
            .iter()
            .filter(|po| po.status != PoStatus::FullyPaid)
            .filter(|po| po.payment_due_date.and_hms_opt(0, 0, 0).unwrap().and_utc() < now)
            .map(PoBalance::outstanding)
            .filter(|outstanding| *outstanding > Decimal::ZERO)
            .sum();

        prop_assert_eq!(aging.total(), expected);
    }

    /// Vendor outstanding balances sum to ledger-wide total minus ledger-wide payments.
    #[test]
    fn prop_global_balance(
        ledgers in prop::collection::vec(prop::collection::vec(po_strategy(), 0..8), 0..6),
    ) {
        let ledgers: Vec<VendorLedger> = ledgers
            .into_iter()
            .enumerate()
            .map(|(i, pos)| VendorLedger {
                vendor_id: VendorId::new(),
                vendor_name: format!("Vendor {i}"),
                pos,
            })
            .collect();

        let result = AnalyticsService::vendor_outstanding(&ledgers);
        let outstanding: Decimal = result.iter().map(|v| v.outstanding_balance).sum();

        let all_pos = ledgers.iter().flat_map(|l| l.pos.iter());
        let total: Decimal = all_pos.clone().map(|po| po.total_amount).sum();
        let paid: Decimal = all_pos.map(|po| po.total_paid).sum();

        prop_assert_eq!(result.len(), ledgers.len());
        prop_assert_eq!(outstanding, total - paid);
    }
}
