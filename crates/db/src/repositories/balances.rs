//! PO balance loading shared by vendor summaries and analytics.

use std::collections::HashMap;

use payables_core::purchase_order::PoBalance;
use payables_shared::types::PurchaseOrderId;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use crate::entities::{payments, purchase_orders};

/// Sum of payment amounts per PO, restricted to `po_ids`.
pub(crate) async fn paid_by_po<C>(db: &C, po_ids: &[Uuid]) -> Result<HashMap<Uuid, Decimal>, DbErr>
where
    C: ConnectionTrait,
{
    if po_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = payments::Entity::find()
        .select_only()
        .column(payments::Column::PoId)
        .column_as(payments::Column::Amount.sum(), "total_paid")
        .filter(payments::Column::PoId.is_in(po_ids.iter().copied()))
        .group_by(payments::Column::PoId)
        .into_tuple::<(Uuid, Option<Decimal>)>()
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(po_id, total)| (po_id, total.unwrap_or_default()))
        .collect())
}

/// Sum of payment amounts for one PO.
pub(crate) async fn paid_for_po<C>(db: &C, po_id: Uuid) -> Result<Decimal, DbErr>
where
    C: ConnectionTrait,
{
    let total = payments::Entity::find()
        .select_only()
        .column_as(payments::Column::Amount.sum(), "total_paid")
        .filter(payments::Column::PoId.eq(po_id))
        .into_tuple::<Option<Decimal>>()
        .one(db)
        .await?;

    Ok(total.flatten().unwrap_or_default())
}

/// Attaches paid totals to PO rows.
pub(crate) async fn load_balances<C>(
    db: &C,
    pos: &[purchase_orders::Model],
) -> Result<Vec<(Uuid, PoBalance)>, DbErr>
where
    C: ConnectionTrait,
{
    let ids: Vec<Uuid> = pos.iter().map(|po| po.id).collect();
    let paid = paid_by_po(db, &ids).await?;

    Ok(pos
        .iter()
        .map(|po| {
            let balance = PoBalance {
                po_id: PurchaseOrderId::from_uuid(po.id),
                status: po.status.into(),
                payment_due_date: po.payment_due_date,
                total_amount: po.total_amount,
                total_paid: paid.get(&po.id).copied().unwrap_or_default(),
            };
            (po.vendor_id, balance)
        })
        .collect())
}
