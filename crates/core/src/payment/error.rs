//! Payment error types.

use payables_shared::AppError;
use payables_shared::types::{PaymentId, PurchaseOrderId};
use rust_decimal::Decimal;
use thiserror::Error;

/// Payment errors.
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Payment not found.
    #[error("Payment not found: {0}")]
    NotFound(PaymentId),

    /// Purchase order being paid does not exist.
    #[error("Purchase order not found: {0}")]
    PurchaseOrderNotFound(PurchaseOrderId),

    /// Amount is zero or negative.
    #[error("Payment amount must be greater than zero")]
    NonPositiveAmount,

    /// Amount has more decimal places than a stored amount keeps.
    #[error("Payment amount ({0}) has more than 4 decimal places")]
    TooPrecise(Decimal),

    /// Amount is larger than what is still owed.
    #[error("Payment amount ({amount}) exceeds outstanding balance ({outstanding})")]
    ExceedsOutstanding {
        /// Requested amount.
        amount: Decimal,
        /// Outstanding balance before this payment.
        outstanding: Decimal,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl PaymentError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) | Self::PurchaseOrderNotFound(_) => 404,
            Self::NonPositiveAmount | Self::TooPrecise(_) | Self::ExceedsOutstanding { .. } => {
                400
            }
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "PAYMENT_NOT_FOUND",
            Self::PurchaseOrderNotFound(_) => "PURCHASE_ORDER_NOT_FOUND",
            Self::NonPositiveAmount => "NON_POSITIVE_AMOUNT",
            Self::TooPrecise(_) => "AMOUNT_TOO_PRECISE",
            Self::ExceedsOutstanding { .. } => "EXCEEDS_OUTSTANDING",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::NotFound(_) | PaymentError::PurchaseOrderNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            PaymentError::NonPositiveAmount
            | PaymentError::TooPrecise(_)
            | PaymentError::ExceedsOutstanding { .. } => Self::Validation(err.to_string()),
            PaymentError::Database(msg) => Self::Database(msg),
        }
    }
}
