//! Database seeder for payables development and testing.
//!
//! Seeds five vendors, fifteen approved purchase orders and ten half
//! payments. Rows that already exist (matched by email, PO number or
//! payment ref) are left alone, so the seeder can be re-run.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Days, NaiveDate, Utc};
use payables_core::numbering::{PAYMENT_PREFIX, PO_PREFIX, format_number};
use payables_core::purchase_order::{PoItem, PurchaseOrderService};
use payables_core::vendor::Vendor;
use payables_db::entities::{
    payments, purchase_orders,
    purchase_orders::LineItems,
    sea_orm_active_enums::{PaymentMethod, PoStatus, VendorStatus},
    vendors,
};
use payables_shared::{AppConfig, JwtService};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

struct SeedVendor {
    name: &'static str,
    email: &'static str,
    payment_terms: i32,
    phone: Option<&'static str>,
    contact_person: &'static str,
    status: VendorStatus,
}

const VENDORS: [SeedVendor; 5] = [
    SeedVendor {
        name: "Acme Corp",
        email: "contact@acme.com",
        payment_terms: 30,
        phone: Some("1234567890"),
        contact_person: "John Smith",
        status: VendorStatus::Active,
    },
    SeedVendor {
        name: "Globex Inc",
        email: "info@globex.com",
        payment_terms: 15,
        phone: Some("0987654321"),
        contact_person: "Jane Doe",
        status: VendorStatus::Active,
    },
    SeedVendor {
        name: "Soylent Corp",
        email: "sales@soylent.com",
        payment_terms: 45,
        phone: Some("1122334455"),
        contact_person: "Bob Wilson",
        status: VendorStatus::Active,
    },
    SeedVendor {
        name: "Initech",
        email: "support@initech.com",
        payment_terms: 60,
        phone: Some("5544332211"),
        contact_person: "Michael Bolton",
        status: VendorStatus::Active,
    },
    SeedVendor {
        name: "Umbrella Corp",
        email: "bio@umbrella.com",
        payment_terms: 7,
        phone: None,
        contact_person: "Albert Wesker",
        status: VendorStatus::Inactive,
    },
];

const PO_COUNT: u32 = 15;
const PAYMENT_COUNT: usize = 10;

const METHODS: [PaymentMethod; 5] = [
    PaymentMethod::Neft,
    PaymentMethod::Upi,
    PaymentMethod::Cheque,
    PaymentMethod::Cash,
    PaymentMethod::Rtgs,
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;

    println!("Connecting to database...");
    let db = payables_db::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    println!("Seeding vendors...");
    let vendors = seed_vendors(&db).await?;

    println!("Seeding purchase orders...");
    let active: Vec<&Vendor> = vendors.iter().filter(|v| v.status.is_active()).collect();
    if active.is_empty() {
        println!("  No active vendors found, stopping");
        return Ok(());
    }
    let today = Utc::now().date_naive();
    let pos = seed_purchase_orders(&db, &active, today).await?;

    println!("Seeding payments...");
    seed_payments(&db, &pos, today).await?;

    let token = JwtService::new(&config.jwt).issue_token("seeder")?;
    println!("Development bearer token:\n  {token}");

    println!("Seeding complete!");
    Ok(())
}

async fn seed_vendors(db: &DatabaseConnection) -> anyhow::Result<Vec<Vendor>> {
    let mut seeded = Vec::with_capacity(VENDORS.len());

    for v in &VENDORS {
        let existing = vendors::Entity::find()
            .filter(vendors::Column::Email.eq(v.email))
            .one(db)
            .await?;

        let model = if let Some(model) = existing {
            println!("  {} already exists, skipping...", v.name);
            model
        } else {
            let now = Utc::now();
            let model = vendors::ActiveModel {
                id: Set(Uuid::now_v7()),
                name: Set(v.name.to_string()),
                contact_person: Set(Some(v.contact_person.to_string())),
                email: Set(v.email.to_string()),
                phone: Set(v.phone.map(str::to_string)),
                payment_terms: Set(v.payment_terms),
                status: Set(v.status),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            }
            .insert(db)
            .await
            .with_context(|| format!("failed to insert vendor {}", v.name))?;
            println!("  Created vendor: {}", v.name);
            model
        };

        seeded.push(Vendor::try_from(model)?);
    }

    Ok(seeded)
}

/// Splits `total` 40/60 over two single-unit items.
fn seed_items(total: Decimal) -> Vec<PoItem> {
    let first = total * Decimal::new(4, 1);
    vec![
        PoItem {
            description: "Item A".to_string(),
            quantity: 1,
            unit_price: first,
        },
        PoItem {
            description: "Item B".to_string(),
            quantity: 1,
            unit_price: total - first,
        },
    ]
}

async fn seed_purchase_orders(
    db: &DatabaseConnection,
    active: &[&Vendor],
    today: NaiveDate,
) -> anyhow::Result<Vec<purchase_orders::Model>> {
    let mut seeded = Vec::new();

    for i in 1..=PO_COUNT {
        let vendor = active[i as usize % active.len()];
        let date = today
            .checked_sub_days(Days::new(u64::from(i) * 2))
            .context("seed date out of range")?;
        let po_number = format_number(PO_PREFIX, date, i);

        let existing = purchase_orders::Entity::find()
            .filter(purchase_orders::Column::PoNumber.eq(po_number.as_str()))
            .one(db)
            .await?;
        if let Some(model) = existing {
            seeded.push(model);
            continue;
        }

        let total = Decimal::from(i * 1000 + 500);
        let now = Utc::now();
        let model = purchase_orders::ActiveModel {
            id: Set(Uuid::now_v7()),
            po_number: Set(po_number.clone()),
            vendor_id: Set(vendor.id.into_inner()),
            po_date: Set(date),
            payment_due_date: Set(PurchaseOrderService::due_date(date, vendor.payment_terms)?),
            total_amount: Set(total),
            items: Set(LineItems(seed_items(total))),
            status: Set(PoStatus::Approved),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert {po_number}"))?;
        seeded.push(model);
    }

    println!("  {} purchase orders present", seeded.len());
    Ok(seeded)
}

async fn seed_payments(
    db: &DatabaseConnection,
    pos: &[purchase_orders::Model],
    today: NaiveDate,
) -> anyhow::Result<()> {
    let mut inserted = 0;

    for (i, po) in pos.iter().take(PAYMENT_COUNT).enumerate() {
        let sequence = u32::try_from(i + 1)?;
        let payment_ref = format_number(PAYMENT_PREFIX, today, sequence);

        let existing = payments::Entity::find()
            .filter(payments::Column::PaymentRef.eq(payment_ref.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let now = Utc::now();
        payments::ActiveModel {
            id: Set(Uuid::now_v7()),
            payment_ref: Set(payment_ref.clone()),
            po_id: Set(po.id),
            payment_date: Set(now.into()),
            amount: Set(po.total_amount / Decimal::TWO),
            method: Set(METHODS[i % METHODS.len()]),
            notes: Set(Some("Partial payment - seed data".to_string())),
            created_at: Set(now.into()),
        }
        .insert(db)
        .await
        .with_context(|| format!("failed to insert {payment_ref}"))?;

        let mut model: purchase_orders::ActiveModel = po.clone().into();
        model.status = Set(PoStatus::PartiallyPaid);
        model.updated_at = Set(now.into());
        model.update(db).await?;

        inserted += 1;
    }

    println!("  Inserted {inserted} payments");
    Ok(())
}
