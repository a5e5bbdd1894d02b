//! `SeaORM` Entity for vendors table.

use payables_core::vendor::{PaymentTerms, Vendor};
use payables_shared::types::VendorId;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::VendorStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    pub contact_person: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub payment_terms: i32,
    pub status: VendorStatus,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::purchase_orders::Entity")]
    PurchaseOrders,
}

impl Related<super::purchase_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PurchaseOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Vendor {
    type Error = DbErr;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let payment_terms = PaymentTerms::try_from(model.payment_terms)
            .map_err(|e| DbErr::Type(format!("vendor {}: {e}", model.id)))?;

        Ok(Self {
            id: VendorId::from_uuid(model.id),
            name: model.name,
            contact_person: model.contact_person,
            email: model.email,
            phone: model.phone,
            payment_terms,
            status: model.status.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}
