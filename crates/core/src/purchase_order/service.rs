//! Purchase order service: totals, due dates and creation rules.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::error::PurchaseOrderError;
use super::types::{CreatePurchaseOrderInput, PoItem};
use crate::money::{MAX_AMOUNT, has_money_scale};
use crate::vendor::{PaymentTerms, Vendor};

/// Derived values for a PO about to be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoDraft {
    /// Sum of item line totals.
    pub total_amount: Decimal,
    /// PO date plus vendor payment terms.
    pub payment_due_date: NaiveDate,
}

/// Purchase order service for business logic.
pub struct PurchaseOrderService;

impl PurchaseOrderService {
    /// Checks a create request against its vendor and derives total and due date.
    ///
    /// # Errors
    ///
    /// - `InactiveVendor` if the vendor is inactive
    /// - `EmptyItems` / `InvalidItem` if the items break the line rules
    /// - `AmountOutOfRange` if the total cannot be stored
    /// - `DueDateOutOfRange` if the due date overflows the calendar
    pub fn prepare(
        vendor: &Vendor,
        input: &CreatePurchaseOrderInput,
    ) -> Result<PoDraft, PurchaseOrderError> {
        if !vendor.status.is_active() {
            return Err(PurchaseOrderError::InactiveVendor(vendor.id));
        }

        Self::validate_items(&input.items)?;

        Ok(PoDraft {
            total_amount: Self::total_amount(&input.items)?,
            payment_due_date: Self::due_date(input.date, vendor.payment_terms)?,
        })
    }

    /// Rejects empty item lists and items with zero quantity or no description.
    ///
    /// Unit prices must be non-negative, storable, and carry at most four
    /// decimal places.
    pub fn validate_items(items: &[PoItem]) -> Result<(), PurchaseOrderError> {
        if items.is_empty() {
            return Err(PurchaseOrderError::EmptyItems);
        }

        for (index, item) in items.iter().enumerate() {
            let reason = if item.description.trim().is_empty() {
                Some("description is required")
            } else if item.quantity == 0 {
                Some("quantity must be at least 1")
            } else if item.unit_price < Decimal::ZERO {
                Some("unit price cannot be negative")
            } else if !has_money_scale(item.unit_price) {
                Some("unit price has more than 4 decimal places")
            } else if item.unit_price > MAX_AMOUNT {
                Some("unit price exceeds the maximum amount")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(PurchaseOrderError::InvalidItem { index, reason });
            }
        }

        Ok(())
    }

    /// Sum of `quantity * unit_price` over the items.
    ///
    /// # Errors
    ///
    /// `AmountOutOfRange` if a line or the sum overflows or exceeds `MAX_AMOUNT`.
    pub fn total_amount(items: &[PoItem]) -> Result<Decimal, PurchaseOrderError> {
        let total = items.iter().try_fold(Decimal::ZERO, |acc, item| {
            item.line_total().and_then(|line| acc.checked_add(line))
        });

        match total {
            Some(total) if total <= MAX_AMOUNT => Ok(total),
            _ => Err(PurchaseOrderError::AmountOutOfRange { max: MAX_AMOUNT }),
        }
    }

    /// Calendar date `terms` days after `date`.
    pub fn due_date(date: NaiveDate, terms: PaymentTerms) -> Result<NaiveDate, PurchaseOrderError> {
        date.checked_add_days(Days::new(u64::from(terms.days())))
            .ok_or(PurchaseOrderError::DueDateOutOfRange)
    }
}
