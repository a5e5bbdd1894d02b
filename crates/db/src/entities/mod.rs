//! `SeaORM` entities.

pub mod payments;
pub mod purchase_orders;
pub mod sea_orm_active_enums;
pub mod vendors;
