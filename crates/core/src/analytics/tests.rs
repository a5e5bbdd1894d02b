use chrono::{Duration, NaiveDate, TimeZone, Utc};
use payables_shared::types::{PurchaseOrderId, VendorId};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::purchase_order::{PoBalance, PoStatus};

fn due(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn po(status: PoStatus, due_date: NaiveDate, total: Decimal, paid: Decimal) -> PoBalance {
    PoBalance {
        po_id: PurchaseOrderId::new(),
        status,
        payment_due_date: due_date,
        total_amount: total,
        total_paid: paid,
    }
}

fn noon(y: i32, m: u32, d: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

#[test]
fn test_vendor_outstanding() {
    let ledgers = vec![
        VendorLedger {
            vendor_id: VendorId::new(),
            vendor_name: "Acme Corp".to_string(),
            pos: vec![
                po(PoStatus::PartiallyPaid, due(2024, 1, 1), dec!(1500), dec!(750)),
                po(PoStatus::Approved, due(2024, 1, 1), dec!(2500), dec!(0)),
            ],
        },
        VendorLedger {
            vendor_id: VendorId::new(),
            vendor_name: "Globex Inc".to_string(),
            pos: vec![],
        },
    ];

    let result = AnalyticsService::vendor_outstanding(&ledgers);
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].vendor_name, "Acme Corp");
    assert_eq!(result[0].total_po_amount, dec!(4000));
    assert_eq!(result[0].total_paid, dec!(750));
    assert_eq!(result[0].outstanding_balance, dec!(3250));
    assert_eq!(result[1].outstanding_balance, Decimal::ZERO);
}

#[rstest]
#[case(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(), Some(30))]
#[case(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 1).unwrap(), Some(31))]
#[case(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(), None)]
#[case(Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap(), None)]
#[case(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap(), Some(1))]
fn test_days_overdue(#[case] now: chrono::DateTime<Utc>, #[case] expected: Option<i64>) {
    assert_eq!(AnalyticsService::days_overdue(due(2024, 1, 1), now), expected);
}

#[rstest]
#[case(1, AgingBucket::UpTo30)]
#[case(30, AgingBucket::UpTo30)]
#[case(31, AgingBucket::UpTo60)]
#[case(60, AgingBucket::UpTo60)]
#[case(61, AgingBucket::UpTo90)]
#[case(90, AgingBucket::UpTo90)]
#[case(91, AgingBucket::Over90)]
fn test_bucket_boundaries(#[case] days: i64, #[case] expected: AgingBucket) {
    assert_eq!(AgingBucket::for_days(days), expected);
}

#[test]
fn test_exactly_30_days_overdue_in_first_bucket() {
    let now = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let aging = AnalyticsService::payment_aging(
        &[po(PoStatus::Approved, due(2024, 1, 1), dec!(100), dec!(0))],
        now,
    );
    assert_eq!(aging.days_0_30, dec!(100));
    assert_eq!(aging.days_31_60, Decimal::ZERO);
}

#[test]
fn test_31_days_overdue_in_second_bucket() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(31);
    let aging = AnalyticsService::payment_aging(
        &[po(PoStatus::Approved, due(2024, 1, 1), dec!(100), dec!(0))],
        now,
    );
    assert_eq!(aging.days_0_30, Decimal::ZERO);
    assert_eq!(aging.days_31_60, dec!(100));
}

#[test]
fn test_aging_skips_paid_and_not_yet_due() {
    let now = noon(2024, 6, 1);
    let pos = vec![
        po(PoStatus::FullyPaid, due(2024, 1, 1), dec!(500), dec!(500)),
        // Administratively marked fully paid; still skipped.
        po(PoStatus::FullyPaid, due(2024, 1, 1), dec!(500), dec!(0)),
        po(PoStatus::PartiallyPaid, due(2024, 1, 1), dec!(500), dec!(500)),
        po(PoStatus::Approved, due(2024, 7, 1), dec!(800), dec!(0)),
    ];
    let aging = AnalyticsService::payment_aging(&pos, now);
    assert_eq!(aging, PaymentAging::default());
}

#[test]
fn test_aging_sums_per_bucket() {
    let now = noon(2024, 6, 1);
    let pos = vec![
        po(PoStatus::Approved, due(2024, 5, 25), dec!(100), dec!(0)),
        po(PoStatus::PartiallyPaid, due(2024, 5, 20), dec!(300), dec!(100)),
        po(PoStatus::Draft, due(2024, 4, 15), dec!(50), dec!(0)),
        po(PoStatus::Approved, due(2024, 3, 20), dec!(75.25), dec!(0)),
        po(PoStatus::PartiallyPaid, due(2023, 12, 1), dec!(1000), dec!(999.99)),
    ];
    let aging = AnalyticsService::payment_aging(&pos, now);
    assert_eq!(aging.days_0_30, dec!(300));
    assert_eq!(aging.days_31_60, dec!(50));
    assert_eq!(aging.days_61_90, dec!(75.25));
    assert_eq!(aging.days_over_90, dec!(0.01));
    assert_eq!(aging.total(), dec!(425.26));
}

#[test]
fn test_aging_json_has_all_buckets() {
    let json = serde_json::to_value(PaymentAging::default()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    for key in ["0-30", "31-60", "61-90", "90+"] {
        assert!(obj.contains_key(key), "missing bucket {key}");
    }
}
