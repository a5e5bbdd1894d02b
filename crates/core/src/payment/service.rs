//! Payment validation and status settlement.

use rust_decimal::Decimal;

use super::error::PaymentError;
use crate::money::has_money_scale;
use crate::purchase_order::PoStatus;

/// Outcome of applying a payment to a PO.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// Outstanding balance before the payment.
    pub outstanding_before: Decimal,
    /// Outstanding balance after the payment.
    pub outstanding_after: Decimal,
    /// Sum of payments including this one.
    pub new_total_paid: Decimal,
    /// Status the PO moves to.
    pub new_status: PoStatus,
}

/// Payment service for business logic.
pub struct PaymentService;

impl PaymentService {
    /// Validates `amount` against the PO balance and derives the resulting status.
    ///
    /// `total_paid` is the sum of payments already recorded against the PO.
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount <= 0`
    /// - `TooPrecise` if `amount` has more than four decimal places
    /// - `ExceedsOutstanding` if `amount` is larger than `total_amount - total_paid`
    pub fn settle(
        total_amount: Decimal,
        total_paid: Decimal,
        amount: Decimal,
    ) -> Result<Settlement, PaymentError> {
        if amount <= Decimal::ZERO {
            return Err(PaymentError::NonPositiveAmount);
        }
        if !has_money_scale(amount) {
            return Err(PaymentError::TooPrecise(amount));
        }

        let outstanding = total_amount - total_paid;
        if amount > outstanding {
            return Err(PaymentError::ExceedsOutstanding {
                amount,
                outstanding,
            });
        }

        let new_total_paid = total_paid + amount;

        Ok(Settlement {
            outstanding_before: outstanding,
            outstanding_after: outstanding - amount,
            new_total_paid,
            new_status: PoStatus::after_payment(total_amount, new_total_paid),
        })
    }

    /// Sum of payment amounts.
    #[must_use]
    pub fn total_paid<I>(amounts: I) -> Decimal
    where
        I: IntoIterator<Item = Decimal>,
    {
        amounts.into_iter().sum()
    }
}
