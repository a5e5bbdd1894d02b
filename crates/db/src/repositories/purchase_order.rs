//! Purchase order repository.
//!
//! Creation reads the vendor, derives total and due date through
//! `PurchaseOrderService`, assigns the next `PO-YYYYMMDD-NNN` number and
//! inserts, all inside one transaction.

use chrono::Utc;
use payables_core::numbering::{self, PO_PREFIX};
use payables_core::payment::Payment;
use payables_core::purchase_order::{
    CreatePurchaseOrderInput, PoStatus, PurchaseOrder, PurchaseOrderDetail, PurchaseOrderError,
    PurchaseOrderFilter, PurchaseOrderListItem, PurchaseOrderService,
};
use payables_core::vendor::Vendor;
use payables_shared::types::PurchaseOrderId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{error, info, warn};

use super::sequence::{AttemptError, is_unique_violation, lock_day_stem, should_retry};
use crate::entities::purchase_orders::LineItems;
use crate::entities::sea_orm_active_enums::PoStatus as DbPoStatus;
use crate::entities::{payments, purchase_orders, vendors};

fn db_error(err: DbErr) -> PurchaseOrderError {
    error!(error = %err, "purchase order query failed");
    PurchaseOrderError::Database(err.to_string())
}

/// Purchase order repository.
#[derive(Debug, Clone)]
pub struct PurchaseOrderRepository {
    db: DatabaseConnection,
}

impl PurchaseOrderRepository {
    /// Creates a new purchase order repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a DRAFT purchase order.
    ///
    /// # Errors
    ///
    /// - `VendorNotFound` if the vendor does not exist
    /// - `InactiveVendor` if the vendor is inactive
    /// - `Database` if the PO number keeps colliding after every retry
    pub async fn create(
        &self,
        input: CreatePurchaseOrderInput,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        let mut attempt = 1;
        loop {
            match self.try_create(&input).await {
                Ok(model) => {
                    info!(
                        po_id = %model.id,
                        po_number = %model.po_number,
                        vendor_id = %model.vendor_id,
                        total_amount = %model.total_amount,
                        "purchase order created"
                    );
                    return Ok(model.into());
                }
                Err(err) if should_retry(&err, attempt) => {
                    warn!(attempt, date = %input.date, "PO number collision, retrying");
                    attempt += 1;
                }
                Err(AttemptError::Rejected(err)) => {
                    warn!(vendor_id = %input.vendor_id, error = %err, "purchase order rejected");
                    return Err(err);
                }
                Err(AttemptError::Db(err)) => {
                    if is_unique_violation(&err) {
                        error!(attempts = attempt, "PO number assignment exhausted retries");
                    }
                    return Err(db_error(err));
                }
            }
        }
    }

    async fn try_create(
        &self,
        input: &CreatePurchaseOrderInput,
    ) -> Result<purchase_orders::Model, AttemptError<PurchaseOrderError>> {
        let txn = self.db.begin().await?;

        let vendor_row = vendors::Entity::find_by_id(input.vendor_id.into_inner())
            .one(&txn)
            .await?
            .ok_or(AttemptError::Rejected(PurchaseOrderError::VendorNotFound(
                input.vendor_id,
            )))?;
        let vendor = Vendor::try_from(vendor_row)?;

        let draft =
            PurchaseOrderService::prepare(&vendor, input).map_err(AttemptError::Rejected)?;

        let stem = numbering::day_stem(PO_PREFIX, input.date);
        lock_day_stem(&txn, &stem).await?;
        let existing = purchase_orders::Entity::find()
            .select_only()
            .column(purchase_orders::Column::PoNumber)
            .filter(purchase_orders::Column::PoNumber.starts_with(&stem))
            .into_tuple::<String>()
            .all(&txn)
            .await?;
        let po_number = numbering::next_po_number(input.date, existing.iter().map(String::as_str));

        let now = Utc::now().into();
        let model = purchase_orders::ActiveModel {
            id: Set(PurchaseOrderId::new().into_inner()),
            po_number: Set(po_number),
            vendor_id: Set(vendor.id.into_inner()),
            po_date: Set(input.date),
            payment_due_date: Set(draft.payment_due_date),
            total_amount: Set(draft.total_amount),
            items: Set(LineItems(input.items.clone())),
            status: Set(DbPoStatus::Draft),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(model)
    }

    /// Lists purchase orders, newest first, with optional AND-combined filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        filter: PurchaseOrderFilter,
    ) -> Result<Vec<PurchaseOrderListItem>, PurchaseOrderError> {
        let mut query = purchase_orders::Entity::find();
        if let Some(vendor_id) = filter.vendor_id {
            query = query.filter(purchase_orders::Column::VendorId.eq(vendor_id.into_inner()));
        }
        if let Some(status) = filter.status {
            query = query.filter(purchase_orders::Column::Status.eq(DbPoStatus::from(status)));
        }

        let rows = query
            .find_also_related(vendors::Entity)
            .order_by_desc(purchase_orders::Column::CreatedAt)
            .order_by_desc(purchase_orders::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?;

        Ok(rows
            .into_iter()
            .map(|(po, vendor)| PurchaseOrderListItem {
                vendor_name: vendor.map(|v| v.name).unwrap_or_default(),
                purchase_order: po.into(),
            })
            .collect())
    }

    /// Gets a purchase order with its vendor and payment history.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no PO has this ID.
    pub async fn get(
        &self,
        id: PurchaseOrderId,
    ) -> Result<PurchaseOrderDetail, PurchaseOrderError> {
        let po = self.find(id).await?;

        let vendor_row = vendors::Entity::find_by_id(po.vendor_id)
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or_else(|| {
                PurchaseOrderError::Database(format!("purchase order {id} has no vendor"))
            })?;
        let vendor = Vendor::try_from(vendor_row).map_err(db_error)?;

        let payments = payments::Entity::find()
            .filter(payments::Column::PoId.eq(po.id))
            .order_by_asc(payments::Column::PaymentDate)
            .order_by_asc(payments::Column::PaymentRef)
            .all(&self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Payment::from)
            .collect();

        Ok(PurchaseOrderDetail {
            purchase_order: po.into(),
            vendor,
            payments,
        })
    }

    /// Overwrites the status of a purchase order.
    ///
    /// Administrative override: the new status is not checked against the paid amount.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no PO has this ID.
    pub async fn update_status(
        &self,
        id: PurchaseOrderId,
        status: PoStatus,
    ) -> Result<PurchaseOrder, PurchaseOrderError> {
        let current = self.find(id).await?;
        let previous = current.status;

        let mut model: purchase_orders::ActiveModel = current.into();
        model.status = Set(status.into());
        model.updated_at = Set(Utc::now().into());
        let updated = model.update(&self.db).await.map_err(db_error)?;

        info!(po_id = %id, from = ?previous, to = %status, "purchase order status overridden");
        Ok(updated.into())
    }

    async fn find(
        &self,
        id: PurchaseOrderId,
    ) -> Result<purchase_orders::Model, PurchaseOrderError> {
        purchase_orders::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(PurchaseOrderError::NotFound(id))
    }
}
