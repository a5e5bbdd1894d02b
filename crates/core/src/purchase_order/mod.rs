//! Purchase order ledger.
//!
//! Computes PO totals and due dates, enforces the active-vendor rule,
//! and defines the status values driven by payment recording.

pub mod error;
pub mod service;
pub mod types;


#[cfg(test)]
mod totals_props;

pub use error::PurchaseOrderError;
pub use service::{PoDraft, PurchaseOrderService};
pub use types::{
    CreatePurchaseOrderInput, PoBalance, PoItem, PoStatus, PurchaseOrder, PurchaseOrderDetail,
    PurchaseOrderFilter, PurchaseOrderListItem, UpdatePoStatusInput,
};
