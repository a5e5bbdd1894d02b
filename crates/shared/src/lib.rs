//! Shared types, errors, and configuration for the payables ledger.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for vendors, purchase orders and payments
//! - Application-wide error types
//! - Configuration management
//! - Bearer token issuing and validation

pub mod config;
pub mod error;
pub mod jwt;
pub mod types;

pub use config::{AppConfig, DatabaseConfig, JwtConfig, ServerConfig};
pub use error::{AppError, AppResult};
pub use jwt::{Claims, JwtError, JwtService};
