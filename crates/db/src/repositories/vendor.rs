//! Vendor repository.

use chrono::Utc;
use payables_core::vendor::{
    CreateVendorInput, UpdateVendorInput, Vendor, VendorError, VendorService, VendorWithSummary,
};
use payables_shared::types::VendorId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::{error, info, warn};

use super::balances::load_balances;
use super::sequence::is_unique_violation;
use crate::entities::sea_orm_active_enums::VendorStatus;
use crate::entities::{purchase_orders, vendors};

fn db_error(err: DbErr) -> VendorError {
    error!(error = %err, "vendor query failed");
    VendorError::Database(err.to_string())
}

/// Vendor repository for directory operations.
#[derive(Debug, Clone)]
pub struct VendorRepository {
    db: DatabaseConnection,
}

impl VendorRepository {
    /// Creates a new vendor repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an ACTIVE vendor.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateVendor` if the name or the email is already taken.
    pub async fn create(&self, input: CreateVendorInput) -> Result<Vendor, VendorError> {
        let existing = vendors::Entity::find()
            .filter(
                Condition::any()
                    .add(vendors::Column::Name.eq(&input.name))
                    .add(vendors::Column::Email.eq(&input.email)),
            )
            .all(&self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(Vendor::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;

        if let Err(err) = VendorService::ensure_unique(&input, &existing) {
            warn!(name = %input.name, email = %input.email, "rejected duplicate vendor");
            return Err(err);
        }

        let now = Utc::now().into();
        let model = vendors::ActiveModel {
            id: Set(VendorId::new().into_inner()),
            name: Set(input.name.clone()),
            contact_person: Set(input.contact_person),
            email: Set(input.email.clone()),
            phone: Set(input.phone),
            payment_terms: Set(input.payment_terms.into()),
            status: Set(VendorStatus::Active),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                VendorError::DuplicateVendor {
                    name: input.name.clone(),
                    email: input.email.clone(),
                }
            } else {
                db_error(e)
            }
        })?;

        info!(vendor_id = %model.id, name = %model.name, "vendor created");
        Vendor::try_from(model).map_err(db_error)
    }

    /// Gets a vendor with its payment summary.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no vendor has this ID.
    pub async fn get(&self, id: VendorId) -> Result<VendorWithSummary, VendorError> {
        let vendor = self.find(id).await?;

        let pos = purchase_orders::Entity::find()
            .filter(purchase_orders::Column::VendorId.eq(id.into_inner()))
            .all(&self.db)
            .await
            .map_err(db_error)?;

        let balances: Vec<_> = load_balances(&self.db, &pos)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|(_, balance)| balance)
            .collect();

        Ok(VendorWithSummary {
            vendor,
            payment_summary: VendorService::summarize(&balances),
        })
    }

    /// Lists every vendor, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Vendor>, VendorError> {
        vendors::Entity::find()
            .order_by_asc(vendors::Column::CreatedAt)
            .order_by_asc(vendors::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_error)?
            .into_iter()
            .map(|m| Vendor::try_from(m).map_err(db_error))
            .collect()
    }

    /// Applies the supplied fields to an existing vendor.
    ///
    /// Name and email uniqueness is not pre-checked here; a collision
    /// with another vendor is reported by the store as `DuplicateVendor`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no vendor has this ID.
    pub async fn update(
        &self,
        id: VendorId,
        input: UpdateVendorInput,
    ) -> Result<Vendor, VendorError> {
        let current = vendors::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(VendorError::NotFound(id))?;

        if input.is_empty() {
            return Vendor::try_from(current).map_err(db_error);
        }

        let name = input.name.clone().unwrap_or_else(|| current.name.clone());
        let email = input.email.clone().unwrap_or_else(|| current.email.clone());

        let mut model: vendors::ActiveModel = current.into();
        if let Some(value) = input.name {
            model.name = Set(value);
        }
        if let Some(value) = input.email {
            model.email = Set(value);
        }
        if let Some(value) = input.contact_person {
            model.contact_person = Set(value);
        }
        if let Some(value) = input.phone {
            model.phone = Set(value);
        }
        if let Some(value) = input.payment_terms {
            model.payment_terms = Set(value.into());
        }
        if let Some(value) = input.status {
            model.status = Set(value.into());
        }
        model.updated_at = Set(Utc::now().into());

        let updated = model.update(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                warn!(vendor_id = %id, "vendor update collides with another vendor");
                VendorError::DuplicateVendor { name, email }
            } else {
                db_error(e)
            }
        })?;

        info!(vendor_id = %id, status = ?updated.status, "vendor updated");
        Vendor::try_from(updated).map_err(db_error)
    }

    async fn find(&self, id: VendorId) -> Result<Vendor, VendorError> {
        let model = vendors::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await
            .map_err(db_error)?
            .ok_or(VendorError::NotFound(id))?;

        Vendor::try_from(model).map_err(db_error)
    }
}
