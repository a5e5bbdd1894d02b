//! Analytics repository: full-ledger scans feeding `AnalyticsService`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use payables_core::analytics::{AnalyticsService, PaymentAging, VendorLedger, VendorOutstanding};
use payables_core::purchase_order::PoBalance;
use payables_shared::types::VendorId;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;
use uuid::Uuid;

use super::balances::load_balances;
use crate::entities::sea_orm_active_enums::PoStatus;
use crate::entities::{purchase_orders, vendors};

/// Analytics repository. Read-only.
#[derive(Debug, Clone)]
pub struct AnalyticsRepository {
    db: DatabaseConnection,
}

impl AnalyticsRepository {
    /// Creates a new analytics repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Outstanding totals for every vendor, oldest vendor first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn vendor_outstanding(&self) -> Result<Vec<VendorOutstanding>, DbErr> {
        let vendors = vendors::Entity::find()
            .order_by_asc(vendors::Column::CreatedAt)
            .order_by_asc(vendors::Column::Id)
            .all(&self.db)
            .await?;
        let pos = purchase_orders::Entity::find().all(&self.db).await?;

        let mut by_vendor: HashMap<Uuid, Vec<PoBalance>> = HashMap::new();
        for (vendor_id, balance) in load_balances(&self.db, &pos).await? {
            by_vendor.entry(vendor_id).or_default().push(balance);
        }

        let ledgers: Vec<VendorLedger> = vendors
            .into_iter()
            .map(|v| VendorLedger {
                vendor_id: VendorId::from_uuid(v.id),
                pos: by_vendor.remove(&v.id).unwrap_or_default(),
                vendor_name: v.name,
            })
            .collect();

        Ok(AnalyticsService::vendor_outstanding(&ledgers))
    }

    /// Overdue outstanding balance per aging bucket, as of now.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn payment_aging(&self) -> Result<PaymentAging, DbErr> {
        self.payment_aging_at(Utc::now()).await
    }

    /// Overdue outstanding balance per aging bucket, as of `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn payment_aging_at(&self, now: DateTime<Utc>) -> Result<PaymentAging, DbErr> {
        // Candidates only; the service applies the exact instant cut-off.
        let pos = purchase_orders::Entity::find()
            .filter(purchase_orders::Column::Status.ne(PoStatus::FullyPaid))
            .filter(purchase_orders::Column::PaymentDueDate.lte(now.date_naive()))
            .all(&self.db)
            .await?;

        let balances: Vec<PoBalance> = load_balances(&self.db, &pos)
            .await?
            .into_iter()
            .map(|(_, balance)| balance)
            .collect();

        debug!(candidates = balances.len(), "computing payment aging");
        Ok(AnalyticsService::payment_aging(&balances, now))
    }
}
