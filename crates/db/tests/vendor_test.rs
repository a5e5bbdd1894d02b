//! Vendor directory tests against a live database.

mod common;

use payables_core::payment::{PaymentMethod, RecordPaymentInput};
use payables_core::vendor::{PaymentTerms, UpdateVendorInput, VendorError, VendorStatus};
use payables_db::{PaymentRepository, PurchaseOrderRepository, VendorRepository};
use payables_shared::types::VendorId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use common::{cleanup_vendor, connect, future_date, item, po_input, vendor_input};

#[tokio::test]
async fn test_create_and_get_vendor() {
    let Some(db) = connect().await else { return };
    let repo = VendorRepository::new(db.clone());

    let input = vendor_input(PaymentTerms::Net30);
    let vendor = repo.create(input.clone()).await.unwrap();
    assert_eq!(vendor.name, input.name);
    assert_eq!(vendor.status, VendorStatus::Active);
    assert_eq!(vendor.payment_terms, PaymentTerms::Net30);

    let fetched = repo.get(vendor.id).await.unwrap();
    assert_eq!(fetched.vendor.id, vendor.id);
    assert_eq!(fetched.payment_summary.total_purchase_orders, 0);
    assert_eq!(fetched.payment_summary.outstanding_balance, Decimal::ZERO);

    let listed = repo.list().await.unwrap();
    assert!(listed.iter().any(|v| v.id == vendor.id));

    cleanup_vendor(&db, vendor.id).await;
}

#[tokio::test]
async fn test_duplicate_name_or_email_rejected() {
    let Some(db) = connect().await else { return };
    let repo = VendorRepository::new(db.clone());

    let original = repo.create(vendor_input(PaymentTerms::Net15)).await.unwrap();

    let mut same_email = vendor_input(PaymentTerms::Net15);
    same_email.email = original.email.clone();
    assert!(matches!(
        repo.create(same_email).await,
        Err(VendorError::DuplicateVendor { .. })
    ));

    let mut same_name = vendor_input(PaymentTerms::Net15);
    same_name.name = original.name.clone();
    assert!(matches!(
        repo.create(same_name).await,
        Err(VendorError::DuplicateVendor { .. })
    ));

    cleanup_vendor(&db, original.id).await;
}

#[tokio::test]
async fn test_update_vendor_fields() {
    let Some(db) = connect().await else { return };
    let repo = VendorRepository::new(db.clone());

    let vendor = repo.create(vendor_input(PaymentTerms::Net7)).await.unwrap();
    let updated = repo
        .update(
            vendor.id,
            UpdateVendorInput {
                status: Some(VendorStatus::Inactive),
                payment_terms: Some(PaymentTerms::Net45),
                phone: Some(Some("1122334455".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, VendorStatus::Inactive);
    assert_eq!(updated.payment_terms, PaymentTerms::Net45);
    assert_eq!(updated.phone.as_deref(), Some("1122334455"));
    assert_eq!(updated.name, vendor.name);
    assert!(updated.updated_at >= vendor.updated_at);

    cleanup_vendor(&db, vendor.id).await;
}

#[tokio::test]
async fn test_update_unknown_vendor_not_found() {
    let Some(db) = connect().await else { return };
    let repo = VendorRepository::new(db);

    let id = VendorId::new();
    let result = repo.update(id, UpdateVendorInput::default()).await;
    assert!(matches!(result, Err(VendorError::NotFound(missing)) if missing == id));
}

#[tokio::test]
async fn test_update_into_existing_email_conflicts() {
    let Some(db) = connect().await else { return };
    let repo = VendorRepository::new(db.clone());

    let first = repo.create(vendor_input(PaymentTerms::Net30)).await.unwrap();
    let second = repo.create(vendor_input(PaymentTerms::Net30)).await.unwrap();

    let result = repo
        .update(
            second.id,
            UpdateVendorInput {
                email: Some(first.email.clone()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(VendorError::DuplicateVendor { .. })));

    cleanup_vendor(&db, first.id).await;
    cleanup_vendor(&db, second.id).await;
}

#[tokio::test]
async fn test_vendor_summary_aggregates_pos_and_payments() {
    let Some(db) = connect().await else { return };
    let vendors = VendorRepository::new(db.clone());
    let pos = PurchaseOrderRepository::new(db.clone());
    let payments = PaymentRepository::new(db.clone());

    let vendor = vendors.create(vendor_input(PaymentTerms::Net30)).await.unwrap();
    let date = future_date();
    let first = pos
        .create(po_input(vendor.id, date, vec![item("A", 2, dec!(100.00))]))
        .await
        .unwrap();
    pos.create(po_input(vendor.id, date, vec![item("B", 1, dec!(50.50))]))
        .await
        .unwrap();
    payments
        .record(RecordPaymentInput {
            po_id: first.id,
            amount: dec!(75.00),
            payment_method: PaymentMethod::Upi,
            notes: None,
        })
        .await
        .unwrap();

    let summary = vendors.get(vendor.id).await.unwrap().payment_summary;
    assert_eq!(summary.total_purchase_orders, 2);
    assert_eq!(summary.total_po_amount, dec!(250.50));
    assert_eq!(summary.total_paid, dec!(75.00));
    assert_eq!(summary.outstanding_balance, dec!(175.50));

    cleanup_vendor(&db, vendor.id).await;
}

#[tokio::test]
async fn test_update_clears_optional_contact_fields() {
    let Some(db) = connect().await else { return };
    let repo = VendorRepository::new(db.clone());

    let mut input = vendor_input(PaymentTerms::Net30);
    input.phone = Some("5544332211".to_string());
    let vendor = repo.create(input).await.unwrap();
    assert!(vendor.contact_person.is_some());

    let cleared = repo
        .update(
            vendor.id,
            UpdateVendorInput {
                contact_person: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.contact_person, None);
    assert_eq!(cleared.phone.as_deref(), Some("5544332211"));

    let cleared = repo
        .update(
            vendor.id,
            UpdateVendorInput {
                phone: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.phone, None);
    assert_eq!(repo.get(vendor.id).await.unwrap().vendor.phone, None);

    cleanup_vendor(&db, vendor.id).await;
}
