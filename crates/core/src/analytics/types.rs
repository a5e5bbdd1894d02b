//! Analytics read models.

use payables_shared::types::VendorId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::purchase_order::PoBalance;

/// Outstanding totals for one vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorOutstanding {
    /// Vendor ID.
    pub vendor_id: VendorId,
    /// Vendor name.
    pub vendor_name: String,
    /// Sum of PO totals.
    pub total_po_amount: Decimal,
    /// Sum of payments.
    pub total_paid: Decimal,
    /// `total_po_amount - total_paid`.
    pub outstanding_balance: Decimal,
}

/// A vendor and the balances of every PO it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorLedger {
    /// Vendor ID.
    pub vendor_id: VendorId,
    /// Vendor name.
    pub vendor_name: String,
    /// PO balances.
    pub pos: Vec<PoBalance>,
}

/// Days-overdue range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgingBucket {
    /// 0 to 30 days.
    UpTo30,
    /// 31 to 60 days.
    UpTo60,
    /// 61 to 90 days.
    UpTo90,
    /// More than 90 days.
    Over90,
}

impl AgingBucket {
    /// Bucket for a days-overdue figure. Upper bounds are inclusive.
    #[must_use]
    pub const fn for_days(days: i64) -> Self {
        if days <= 30 {
            Self::UpTo30
        } else if days <= 60 {
            Self::UpTo60
        } else if days <= 90 {
            Self::UpTo90
        } else {
            Self::Over90
        }
    }
}

/// Overdue outstanding balance per aging bucket. All four buckets are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAging {
    /// 0-30 days overdue.
    #[serde(rename = "0-30")]
    pub days_0_30: Decimal,
    /// 31-60 days overdue.
    #[serde(rename = "31-60")]
    pub days_31_60: Decimal,
    /// 61-90 days overdue.
    #[serde(rename = "61-90")]
    pub days_61_90: Decimal,
    /// Over 90 days overdue.
    #[serde(rename = "90+")]
    pub days_over_90: Decimal,
}

impl PaymentAging {
    /// Adds `amount` to `bucket`.
    pub fn add(&mut self, bucket: AgingBucket, amount: Decimal) {
        let slot = match bucket {
            AgingBucket::UpTo30 => &mut self.days_0_30,
            AgingBucket::UpTo60 => &mut self.days_31_60,
            AgingBucket::UpTo90 => &mut self.days_61_90,
            AgingBucket::Over90 => &mut self.days_over_90,
        };
        *slot += amount;
    }

    /// Sum across all buckets.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.days_0_30 + self.days_31_60 + self.days_61_90 + self.days_over_90
    }
}
