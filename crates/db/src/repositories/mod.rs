//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod analytics;
mod balances;
pub mod payment;
pub mod purchase_order;
mod sequence;
pub mod vendor;

pub use analytics::AnalyticsRepository;
pub use payment::PaymentRepository;
pub use purchase_order::PurchaseOrderRepository;
pub use sequence::MAX_SEQUENCE_ATTEMPTS;
pub use vendor::VendorRepository;
