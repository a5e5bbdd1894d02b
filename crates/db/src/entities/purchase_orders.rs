//! `SeaORM` Entity for purchase_orders table.

use payables_core::purchase_order::{PoItem, PurchaseOrder};
use payables_shared::types::{PurchaseOrderId, VendorId};
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PoStatus;

/// Ordered line items stored as JSONB.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct LineItems(pub Vec<PoItem>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub po_number: String,
    pub vendor_id: Uuid,
    pub po_date: Date,
    pub payment_due_date: Date,
    #[sea_orm(column_type = "Decimal(Some((19, 4)))")]
    pub total_amount: Decimal,
    #[sea_orm(column_type = "JsonBinary")]
    pub items: LineItems,
    pub status: PoStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendors::Entity",
        from = "Column::VendorId",
        to = "super::vendors::Column::Id"
    )]
    Vendors,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::vendors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendors.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PurchaseOrder {
    fn from(model: Model) -> Self {
        Self {
            id: PurchaseOrderId::from_uuid(model.id),
            po_number: model.po_number,
            vendor_id: VendorId::from_uuid(model.vendor_id),
            date: model.po_date,
            payment_due_date: model.payment_due_date,
            total_amount: model.total_amount,
            items: model.items.0,
            status: model.status.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
