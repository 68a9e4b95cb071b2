//! `PgEnquiryStore` against a real database.
//!
//! Run with `DATABASE_URL` pointing at a Postgres server the tests may create
//! databases on: `cargo test --test pg_store -- --ignored`.

use std::time::Duration;

use chrono::{Days, Local};
use sqlx::PgPool;

use pachena_web::db::{EnquiryStore, PgEnquiryStore, StoreError};
use pachena_web::models::{EnquiryStatus, NewEnquiry};

fn new_enquiry(name: &str, adults: u32) -> NewEnquiry {
    NewEnquiry {
        name: name.to_string(),
        phone: "+263 775 387 683".to_string(),
        booking_date: Local::now().date_naive() + Days::new(14),
        num_adults: adults,
        num_children: 1,
        package: "Wellness Day (Spa & Massage)".to_string(),
    }
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn insert_then_fetch(pool: PgPool) {
    let store = PgEnquiryStore::new(pool);
    let id = store.insert(new_enquiry("Rudo Moyo", 2)).await.unwrap();

    let enquiry = store.fetch(id).await.unwrap();
    assert_eq!(enquiry.id, id);
    assert_eq!(enquiry.name, "Rudo Moyo");
    assert_eq!(enquiry.num_adults, 2);
    assert_eq!(enquiry.num_children, 1);
    assert_eq!(enquiry.status, EnquiryStatus::Pending);
    assert_eq!(enquiry.follow_up_notes, "");
    assert!(enquiry.updated_at.is_none());
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn fetch_all_is_newest_first(pool: PgPool) {
    let store = PgEnquiryStore::new(pool);
    assert!(store.fetch_all().await.unwrap().is_empty());

    let first = store.insert(new_enquiry("First", 1)).await.unwrap();
    let second = store.insert(new_enquiry("Second", 3)).await.unwrap();
    let third = store.insert(new_enquiry("Third", 2)).await.unwrap();

    let ids: Vec<_> = store
        .fetch_all()
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![third, second, first]);
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn updates_touch_updated_at(pool: PgPool) {
    let store = PgEnquiryStore::new(pool);
    let id = store.insert(new_enquiry("Chipo", 2)).await.unwrap();

    tokio::time::sleep(Duration::from_millis(5)).await;
    store
        .update_status(id, EnquiryStatus::Confirmed)
        .await
        .unwrap();
    store.update_notes(id, "Called back, deposit due").await.unwrap();

    let enquiry = store.fetch(id).await.unwrap();
    assert_eq!(enquiry.status, EnquiryStatus::Confirmed);
    assert_eq!(enquiry.follow_up_notes, "Called back, deposit due");
    assert!(enquiry.updated_at.unwrap() > enquiry.created_at);

    // Any status may follow any other
    store
        .update_status(id, EnquiryStatus::Pending)
        .await
        .unwrap();
    assert_eq!(store.fetch(id).await.unwrap().status, EnquiryStatus::Pending);
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn missing_ids_are_not_found(pool: PgPool) {
    let store = PgEnquiryStore::new(pool);

    assert!(matches!(store.fetch(42).await, Err(StoreError::NotFound(42))));
    assert!(matches!(
        store.update_status(42, EnquiryStatus::Cancelled).await,
        Err(StoreError::NotFound(42))
    ));
    assert!(matches!(
        store.update_notes(42, "nobody here").await,
        Err(StoreError::NotFound(42))
    ));
}
