//! `SeaORM` Entity for payments table.

use payables_core::payment::Payment;
use payables_shared::types::{PaymentId, PurchaseOrderId};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PaymentMethod;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub payment_ref: String,
    pub po_id: Uuid,
    pub payment_date: DateTimeWithTimeZone,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::purchase_orders::Entity",
        from = "Column::PoId",
        to = "super::purchase_orders::Column::Id"
    )]
    PurchaseOrders,
}

impl Related<super::purchase_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Payment {
    fn from(model: Model) -> Self {
        Self {
            id: PaymentId::from_uuid(model.id),
            payment_ref: model.payment_ref,
            po_id: PurchaseOrderId::from_uuid(model.po_id),
            date: model.payment_date.into(),
            amount: model.amount,
            method: model.method.into(),
            notes: model.notes,
            created_at: model.created_at.into(),
        }
    }
}
