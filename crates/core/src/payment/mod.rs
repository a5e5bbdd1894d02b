//! Payment recorder rules.
//!
//! A payment may never exceed the PO's outstanding balance. Each accepted
//! payment moves the PO to `PARTIALLY_PAID` or `FULLY_PAID`.

pub mod error;
pub mod service;
pub mod types;


#[cfg(test)]
mod settlement_props;

pub use error::PaymentError;
pub use service::{PaymentService, Settlement};
pub use types::{Payment, PaymentMethod, PaymentWithPurchaseOrder, RecordPaymentInput};
