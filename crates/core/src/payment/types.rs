//! Payment domain types.

use chrono::{DateTime, Utc};
use payables_shared::types::{PaymentId, PurchaseOrderId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::purchase_order::PurchaseOrder;

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// Cheque.
    Cheque,
    /// National electronic funds transfer.
    Neft,
    /// Real-time gross settlement.
    Rtgs,
    /// Unified payments interface.
    Upi,
}

/// A recorded payment. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// `PAY-YYYYMMDD-NNN`.
    pub payment_ref: String,
    /// PO the payment is applied to.
    pub po_id: PurchaseOrderId,
    /// When the payment was recorded.
    pub date: DateTime<Utc>,
    /// Amount paid, always positive.
    pub amount: Decimal,
    /// Payment method.
    pub method: PaymentMethod,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Created timestamp.
    pub created_at: DateTime<Utc>,
}

/// Input for recording a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentInput {
    /// PO to pay.
    pub po_id: PurchaseOrderId,
    /// Amount to pay.
    pub amount: Decimal,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Optional notes.
    pub notes: Option<String>,
}

/// A payment with its owning purchase order attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentWithPurchaseOrder {
    /// The payment.
    #[serde(flatten)]
    pub payment: Payment,
    /// Owning PO.
    pub purchase_order: PurchaseOrder,
}
