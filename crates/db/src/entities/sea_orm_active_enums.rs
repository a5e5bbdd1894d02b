//! `SeaORM` active enums mirroring the PostgreSQL enum types.

use payables_core::payment::PaymentMethod as CorePaymentMethod;
use payables_core::purchase_order::PoStatus as CorePoStatus;
use payables_core::vendor::VendorStatus as CoreVendorStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `vendor_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "vendor_status")]
pub enum VendorStatus {
    /// Active.
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    /// Inactive.
    #[sea_orm(string_value = "INACTIVE")]
    Inactive,
}

/// `po_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "po_status")]
pub enum PoStatus {
    /// Draft.
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    /// Approved.
    #[sea_orm(string_value = "APPROVED")]
    Approved,
    /// Partially paid.
    #[sea_orm(string_value = "PARTIALLY_PAID")]
    PartiallyPaid,
    /// Fully paid.
    #[sea_orm(string_value = "FULLY_PAID")]
    FullyPaid,
}

/// `payment_method` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method")]
pub enum PaymentMethod {
    /// Cash.
    #[sea_orm(string_value = "CASH")]
    Cash,
    /// Cheque.
    #[sea_orm(string_value = "CHEQUE")]
    Cheque,
    /// NEFT.
    #[sea_orm(string_value = "NEFT")]
    Neft,
    /// RTGS.
    #[sea_orm(string_value = "RTGS")]
    Rtgs,
    /// UPI.
    #[sea_orm(string_value = "UPI")]
    Upi,
}

impl From<VendorStatus> for CoreVendorStatus {
    fn from(status: VendorStatus) -> Self {
        match status {
            VendorStatus::Active => Self::Active,
            VendorStatus::Inactive => Self::Inactive,
        }
    }
}

impl From<CoreVendorStatus> for VendorStatus {
    fn from(status: CoreVendorStatus) -> Self {
        match status {
            CoreVendorStatus::Active => Self::Active,
            CoreVendorStatus::Inactive => Self::Inactive,
        }
    }
}

impl From<PoStatus> for CorePoStatus {
    fn from(status: PoStatus) -> Self {
        match status {
            PoStatus::Draft => Self::Draft,
            PoStatus::Approved => Self::Approved,
            PoStatus::PartiallyPaid => Self::PartiallyPaid,
            PoStatus::FullyPaid => Self::FullyPaid,
        }
    }
}

impl From<CorePoStatus> for PoStatus {
    fn from(status: CorePoStatus) -> Self {
        match status {
            CorePoStatus::Draft => Self::Draft,
            CorePoStatus::Approved => Self::Approved,
            CorePoStatus::PartiallyPaid => Self::PartiallyPaid,
            CorePoStatus::FullyPaid => Self::FullyPaid,
        }
    }
}

impl From<PaymentMethod> for CorePaymentMethod {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cash => Self::Cash,
            PaymentMethod::Cheque => Self::Cheque,
            PaymentMethod::Neft => Self::Neft,
            PaymentMethod::Rtgs => Self::Rtgs,
            PaymentMethod::Upi => Self::Upi,
        }
    }
}

impl From<CorePaymentMethod> for PaymentMethod {
    fn from(method: CorePaymentMethod) -> Self {
        match method {
            CorePaymentMethod::Cash => Self::Cash,
            CorePaymentMethod::Cheque => Self::Cheque,
            CorePaymentMethod::Neft => Self::Neft,
            CorePaymentMethod::Rtgs => Self::Rtgs,
            CorePaymentMethod::Upi => Self::Upi,
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::Iterable;

    use super::*;

    #[test]
    fn test_po_status_round_trips_through_core() {
        for status in PoStatus::iter() {
            assert_eq!(PoStatus::from(CorePoStatus::from(status)), status);
        }
    }

    #[test]
    fn test_payment_method_round_trips_through_core() {
        for method in PaymentMethod::iter() {
            assert_eq!(PaymentMethod::from(CorePaymentMethod::from(method)), method);
        }
    }

    #[test]
    fn test_db_values_match_api_values() {
        assert_eq!(PoStatus::PartiallyPaid.to_value(), "PARTIALLY_PAID");
        assert_eq!(VendorStatus::Inactive.to_value(), "INACTIVE");
        assert_eq!(PaymentMethod::Neft.to_value(), "NEFT");
    }
}
