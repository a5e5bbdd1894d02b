//! Core accounts-payable logic.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `vendor` - Vendor directory rules and payment summaries
//! - `purchase_order` - PO totals, due dates and status
//! - `payment` - Payment validation against outstanding balances
//! - `analytics` - Outstanding-by-vendor and payment aging read models
//! - `numbering` - Date-scoped `PO-` / `PAY-` document numbers
//! - `money` - Scale and range limits for stored amounts

pub mod analytics;
pub mod money;
pub mod numbering;
pub mod payment;
pub mod purchase_order;
pub mod vendor;
