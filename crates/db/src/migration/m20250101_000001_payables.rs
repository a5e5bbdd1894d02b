//! Initial payables schema.
//!
//! Creates the vendor, purchase order and payment tables with their enums.
//! Generated identifiers (`po_number`, `payment_ref`) carry unique constraints
//! so concurrent sequence assignment fails loudly instead of duplicating.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(VENDORS_SQL).await?;
        db.execute_unprepared(PURCHASE_ORDERS_SQL).await?;
        db.execute_unprepared(PAYMENTS_SQL).await?;
        db.execute_unprepared(INDEXES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE vendor_status AS ENUM ('ACTIVE', 'INACTIVE');
CREATE TYPE po_status AS ENUM ('DRAFT', 'APPROVED', 'PARTIALLY_PAID', 'FULLY_PAID');
CREATE TYPE payment_method AS ENUM ('CASH', 'CHEQUE', 'NEFT', 'RTGS', 'UPI');
";

const VENDORS_SQL: &str = r"
CREATE TABLE vendors (
    id UUID PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    contact_person VARCHAR(255),
    email VARCHAR(255) NOT NULL,
    phone VARCHAR(50),
    payment_terms INTEGER NOT NULL,
    status vendor_status NOT NULL DEFAULT 'ACTIVE',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT vendors_name_key UNIQUE (name),
    CONSTRAINT vendors_email_key UNIQUE (email),
    CONSTRAINT vendors_payment_terms_check CHECK (payment_terms IN (7, 15, 30, 45, 60))
);
";

const PURCHASE_ORDERS_SQL: &str = r"
CREATE TABLE purchase_orders (
    id UUID PRIMARY KEY,
    po_number VARCHAR(32) NOT NULL,
    vendor_id UUID NOT NULL REFERENCES vendors(id),
    po_date DATE NOT NULL,
    payment_due_date DATE NOT NULL,
    total_amount NUMERIC(19, 4) NOT NULL,
    items JSONB NOT NULL,
    status po_status NOT NULL DEFAULT 'DRAFT',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT purchase_orders_po_number_key UNIQUE (po_number),
    CONSTRAINT purchase_orders_total_amount_check CHECK (total_amount >= 0),
    CONSTRAINT purchase_orders_due_date_check CHECK (payment_due_date >= po_date)
);
";

const PAYMENTS_SQL: &str = r"
CREATE TABLE payments (
    id UUID PRIMARY KEY,
    payment_ref VARCHAR(32) NOT NULL,
    po_id UUID NOT NULL REFERENCES purchase_orders(id),
    payment_date TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    amount NUMERIC(19, 4) NOT NULL,
    method payment_method NOT NULL,
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT payments_payment_ref_key UNIQUE (payment_ref),
    CONSTRAINT payments_amount_check CHECK (amount > 0)
);
";

const INDEXES_SQL: &str = r"
CREATE INDEX idx_purchase_orders_vendor_id ON purchase_orders(vendor_id);
CREATE INDEX idx_purchase_orders_status ON purchase_orders(status);
CREATE INDEX idx_purchase_orders_due_date ON purchase_orders(payment_due_date);
CREATE INDEX idx_purchase_orders_created_at ON purchase_orders(created_at DESC);
CREATE INDEX idx_payments_po_id ON payments(po_id);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS payments CASCADE;
DROP TABLE IF EXISTS purchase_orders CASCADE;
DROP TABLE IF EXISTS vendors CASCADE;
DROP TYPE IF EXISTS payment_method;
DROP TYPE IF EXISTS po_status;
DROP TYPE IF EXISTS vendor_status;
";
