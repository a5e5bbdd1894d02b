//! Purchase order domain types.

use chrono::{DateTime, NaiveDate, Utc};
use payables_shared::types::{PurchaseOrderId, VendorId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payment::Payment;
use crate::vendor::Vendor;

/// Purchase order status.
///
/// Payment recording moves a PO toward `FullyPaid`. The administrative
/// status update may set any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PoStatus {
    /// Newly created.
    #[default]
    Draft,
    /// Approved for payment.
    Approved,
    /// Some, but not all, of the total has been paid.
    PartiallyPaid,
    /// Total paid in full.
    FullyPaid,
}

impl PoStatus {
    /// Status implied by the paid amount after a payment.
    #[must_use]
    pub fn after_payment(total_amount: Decimal, total_paid: Decimal) -> Self {
        if total_paid >= total_amount {
            Self::FullyPaid
        } else {
            Self::PartiallyPaid
        }
    }
}

impl std::fmt::Display for PoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "DRAFT"),
            Self::Approved => write!(f, "APPROVED"),
            Self::PartiallyPaid => write!(f, "PARTIALLY_PAID"),
            Self::FullyPaid => write!(f, "FULLY_PAID"),
        }
    }
}

/// A single purchase order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoItem {
    /// What is being bought.
    pub description: String,
    /// Units ordered, at least 1.
    pub quantity: u32,
    /// Price per unit, never negative.
    pub unit_price: Decimal,
}

impl PoItem {
    /// `quantity * unit_price`, or `None` if the product overflows `Decimal`.
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }
}

/// A purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    /// PO ID.
    pub id: PurchaseOrderId,
    /// `PO-YYYYMMDD-NNN`.
    pub po_number: String,
    /// Owning vendor.
    pub vendor_id: VendorId,
    /// PO date.
    pub date: NaiveDate,
    /// `date` plus the vendor's payment terms.
    pub payment_due_date: NaiveDate,
    /// Sum of item line totals.
    pub total_amount: Decimal,
    /// Line items, in order.
    pub items: Vec<PoItem>,
    /// Status.
    pub status: PoStatus,
    /// Created timestamp.
    pub created_at: DateTime<Utc>,
    /// Updated timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseOrderInput {
    /// Vendor to issue the PO to.
    pub vendor_id: VendorId,
    /// PO date.
    pub date: NaiveDate,
    /// Line items.
    pub items: Vec<PoItem>,
}

/// Input for the administrative status override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePoStatusInput {
    /// New status.
    pub status: PoStatus,
}

/// Optional list filters, combined with AND.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderFilter {
    /// Only POs for this vendor.
    pub vendor_id: Option<VendorId>,
    /// Only POs in this status.
    pub status: Option<PoStatus>,
}

/// PO row as returned by the list operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderListItem {
    /// The purchase order.
    #[serde(flatten)]
    pub purchase_order: PurchaseOrder,
    /// Name of the owning vendor.
    pub vendor_name: String,
}

/// A purchase order with its vendor and payment history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderDetail {
    /// The purchase order.
    #[serde(flatten)]
    pub purchase_order: PurchaseOrder,
    /// Owning vendor.
    pub vendor: Vendor,
    /// Payments, oldest first.
    pub payments: Vec<Payment>,
}

impl PurchaseOrderDetail {
    /// Sum of recorded payments.
    #[must_use]
    pub fn total_paid(&self) -> Decimal {
        self.payments.iter().map(|p| p.amount).sum()
    }
}

/// Balance view of one PO used by summaries and analytics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoBalance {
    /// PO ID.
    pub po_id: PurchaseOrderId,
    /// Current status.
    pub status: PoStatus,
    /// Due date.
    pub payment_due_date: NaiveDate,
    /// PO total.
    pub total_amount: Decimal,
    /// Sum of payments against the PO.
    pub total_paid: Decimal,
}

impl PoBalance {
    /// `total_amount - total_paid`.
    #[must_use]
    pub fn outstanding(&self) -> Decimal {
        self.total_amount - self.total_paid
    }
}
