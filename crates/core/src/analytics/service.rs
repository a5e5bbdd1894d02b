//! Outstanding-by-vendor and payment aging calculations.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::types::{AgingBucket, PaymentAging, VendorLedger, VendorOutstanding};
use crate::purchase_order::{PoBalance, PoStatus};
use crate::vendor::VendorService;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Analytics service. Stateless.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Outstanding totals for every vendor, in input order.
    #[must_use]
    pub fn vendor_outstanding(ledgers: &[VendorLedger]) -> Vec<VendorOutstanding> {
        ledgers
            .iter()
            .map(|ledger| {
                let summary = VendorService::summarize(&ledger.pos);
                VendorOutstanding {
                    vendor_id: ledger.vendor_id,
                    vendor_name: ledger.vendor_name.clone(),
                    total_po_amount: summary.total_po_amount,
                    total_paid: summary.total_paid,
                    outstanding_balance: summary.outstanding_balance,
                }
            })
            .collect()
    }

    /// Buckets the outstanding balance of overdue, not fully paid POs by days overdue.
    #[must_use]
    pub fn payment_aging(pos: &[PoBalance], now: DateTime<Utc>) -> PaymentAging {
        let mut aging = PaymentAging::default();

        for po in pos {
            if po.status == PoStatus::FullyPaid {
                continue;
            }
            let Some(days) = Self::days_overdue(po.payment_due_date, now) else {
                continue;
            };
            let outstanding = po.outstanding();
            if outstanding <= Decimal::ZERO {
                continue;
            }
            aging.add(AgingBucket::for_days(days), outstanding);
        }

        aging
    }

    /// Whole days, rounded up, between the start of `due` (UTC) and `now`.
    ///
    /// Returns `None` unless the due date lies strictly before `now`.
    #[must_use]
    pub fn days_overdue(due: NaiveDate, now: DateTime<Utc>) -> Option<i64> {
        let due_at = due.and_hms_opt(0, 0, 0)?.and_utc();
        let elapsed = (now - due_at).num_milliseconds();
        if elapsed <= 0 {
            return None;
        }
        Some((elapsed + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY)
    }
}
