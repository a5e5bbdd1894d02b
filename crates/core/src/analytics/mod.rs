//! Read-only aggregations over the ledger.
//!
//! Everything here is recomputed from current ledger state on each call.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

#[cfg(test)]
mod aging_props;

pub use service::AnalyticsService;
pub use types::{AgingBucket, PaymentAging, VendorLedger, VendorOutstanding};
