//! Payment repository.
//!
//! Recording a payment is one transaction: lock the PO row, sum its
//! payments, validate through `PaymentService`, assign the next
//! `PAY-YYYYMMDD-NNN` ref, insert, and move the PO status.

use chrono::{DateTime, Utc};
use payables_core::numbering::{self, PAYMENT_PREFIX};
use payables_core::payment::{
    Payment, PaymentError, PaymentService, PaymentWithPurchaseOrder, RecordPaymentInput,
};
use payables_core::purchase_order::PurchaseOrder;
use payables_shared::types::PaymentId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{error, info, warn};

use super::balances::paid_for_po;
use super::sequence::{AttemptError, is_unique_violation, lock_day_stem, should_retry};
use crate::entities::sea_orm_active_enums::PaymentMethod as DbPaymentMethod;
use crate::entities::{payments, purchase_orders};

fn db_error(err: DbErr) -> PaymentError {
    error!(error = %err, "payment query failed");
    PaymentError::Database(err.to_string())
}

/// Payment repository.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    db: DatabaseConnection,
}

impl PaymentRepository {
    /// Creates a new payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payment against a purchase order, dated now.
    ///
    /// # Errors
    ///
    /// - `PurchaseOrderNotFound` if the PO does not exist
    /// - `ExceedsOutstanding` if the amount is larger than what is still owed
    /// - `Database` if the payment ref keeps colliding after every retry
    pub async fn record(&self, input: RecordPaymentInput) -> Result<Payment, PaymentError> {
        self.record_at(input, Utc::now()).await
    }

    /// Records a payment with an explicit recording instant.
    ///
    /// The payment ref sequence is scoped to the UTC date of `now`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::record`].
    pub async fn record_at(
        &self,
        input: RecordPaymentInput,
        now: DateTime<Utc>,
    ) -> Result<Payment, PaymentError> {
        let mut attempt = 1;
        loop {
            match self.try_record(&input, now).await {
                Ok(model) => {
                    info!(
                        payment_id = %model.id,
                        payment_ref = %model.payment_ref,
                        po_id = %model.po_id,
                        amount = %model.amount,
                        "payment recorded"
                    );
                    return Ok(model.into());
                }
                Err(err) if should_retry(&err, attempt) => {
                    warn!(attempt, po_id = %input.po_id, "payment ref collision, retrying");
                    attempt += 1;
                }
                Err(AttemptError::Rejected(err)) => {
                    warn!(po_id = %input.po_id, error = %err, "payment rejected");
                    return Err(err);
                }
                Err(AttemptError::Db(err)) => {
                    if is_unique_violation(&err) {
                        error!(attempts = attempt, "payment ref assignment exhausted retries");
                    }
                    return Err(db_error(err));
                }
            }
        }
    }

    async fn try_record(
        &self,
        input: &RecordPaymentInput,
        now: DateTime<Utc>,
    ) -> Result<payments::Model, AttemptError<PaymentError>> {
        let txn = self.db.begin().await?;

        // Row lock serializes concurrent payments against the same PO.
        let po = purchase_orders::Entity::find_by_id(input.po_id.into_inner())
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or(AttemptError::Rejected(PaymentError::PurchaseOrderNotFound(
                input.po_id,
            )))?;

        let total_paid = paid_for_po(&txn, po.id).await?;
        let settlement = PaymentService::settle(po.total_amount, total_paid, input.amount)
            .map_err(AttemptError::Rejected)?;

        // Refs are shared by every PO recorded on the same day.
        let recorded_on = now.date_naive();
        let stem = numbering::day_stem(PAYMENT_PREFIX, recorded_on);
        lock_day_stem(&txn, &stem).await?;
        let issued_today = payments::Entity::find()
            .filter(payments::Column::PaymentRef.starts_with(&stem))
            .count(&txn)
            .await?;
        let payment_ref = numbering::next_payment_ref(recorded_on, issued_today);

        let recorded_at = now.into();
        let payment = payments::ActiveModel {
            id: Set(PaymentId::new().into_inner()),
            payment_ref: Set(payment_ref),
            po_id: Set(po.id),
            payment_date: Set(recorded_at),
            amount: Set(input.amount),
            method: Set(DbPaymentMethod::from(input.payment_method)),
            notes: Set(input.notes.clone()),
            created_at: Set(recorded_at),
        }
        .insert(&txn)
        .await?;

        let mut po: purchase_orders::ActiveModel = po.into();
        po.status = Set(settlement.new_status.into());
        po.updated_at = Set(recorded_at);
        po.update(&txn).await?;

        txn.commit().await?;
        Ok(payment)
    }

    /// Lists every payment with its purchase order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<PaymentWithPurchaseOrder>, PaymentError> {
        payments::Entity::find()
            .find_also_related(purchase_orders::Entity)
            .order_by_asc(payments::Column::CreatedAt)
            .order_by_asc(payments::Column::PaymentRef)
            .all(&self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|(payment, po)| attach(payment, po))
            .collect()
    }

    /// Gets a payment with its purchase order.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no payment has this ID.
    pub async fn get(&self, id: PaymentId) -> Result<PaymentWithPurchaseOrder, PaymentError> {
        let (payment, po) = payments::Entity::find_by_id(id.into_inner())
            .find_also_related(purchase_orders::Entity)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(PaymentError::NotFound(id))?;

        attach(payment, po)
    }
}

fn attach(
    payment: payments::Model,
    po: Option<purchase_orders::Model>,
) -> Result<PaymentWithPurchaseOrder, PaymentError> {
    let po = po.ok_or_else(|| {
        PaymentError::Database(format!("payment {} has no purchase order", payment.id))
    })?;

    Ok(PaymentWithPurchaseOrder {
        payment: payment.into(),
        purchase_order: PurchaseOrder::from(po),
    })
}
