//! In-memory enquiry store for development and tests

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{EnquiryStore, StoreError};
use crate::models::{Enquiry, EnquiryId, EnquiryStatus, NewEnquiry};

#[derive(Default)]
struct Inner {
    next_id: EnquiryId,
    enquiries: Vec<Enquiry>,
}

/// Enquiry store that lives for the lifetime of the process
#[derive(Default)]
pub struct MemoryEnquiryStore {
    inner: RwLock<Inner>,
}

impl MemoryEnquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn modify(
        &self,
        id: EnquiryId,
        apply: impl FnOnce(&mut Enquiry) + Send,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let enquiry = inner
            .enquiries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StoreError::NotFound(id))?;
        apply(enquiry);
        enquiry.updated_at = Some(Utc::now());
        Ok(())
    }
}

#[async_trait]
impl EnquiryStore for MemoryEnquiryStore {
    async fn insert(&self, enquiry: NewEnquiry) -> Result<EnquiryId, StoreError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.enquiries.push(Enquiry {
            id,
            name: enquiry.name,
            phone: enquiry.phone,
            booking_date: enquiry.booking_date,
            num_adults: enquiry.num_adults,
            num_children: enquiry.num_children,
            package: enquiry.package,
            status: EnquiryStatus::Pending,
            follow_up_notes: String::new(),
            created_at: Utc::now(),
            updated_at: None,
        });
        Ok(id)
    }

    async fn fetch_all(&self) -> Result<Vec<Enquiry>, StoreError> {
        let mut enquiries = self.inner.read().await.enquiries.clone();
        enquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(enquiries)
    }

    async fn fetch(&self, id: EnquiryId) -> Result<Enquiry, StoreError> {
        self.inner
            .read()
            .await
            .enquiries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_status(&self, id: EnquiryId, status: EnquiryStatus) -> Result<(), StoreError> {
        self.modify(id, |e| e.status = status).await
    }

    async fn update_notes(&self, id: EnquiryId, notes: &str) -> Result<(), StoreError> {
        let notes = notes.to_string();
        self.modify(id, move |e| e.follow_up_notes = notes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::time::Duration;

    fn new_enquiry(name: &str) -> NewEnquiry {
        NewEnquiry {
            name: name.to_string(),
            phone: "+263 775 387 683".to_string(),
            booking_date: NaiveDate::from_ymd_opt(2030, 1, 5).unwrap(),
            num_adults: 2,
            num_children: 0,
            package: "Braai Package (Starting)".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_starts_pending_with_empty_notes() {
        let store = MemoryEnquiryStore::new();
        let id = store.insert(new_enquiry("Rudo")).await.unwrap();

        let enquiry = store.fetch(id).await.unwrap();
        assert_eq!(enquiry.status, EnquiryStatus::Pending);
        assert_eq!(enquiry.follow_up_notes, "");
        assert!(enquiry.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_distinct() {
        let store = MemoryEnquiryStore::new();
        let a = store.insert(new_enquiry("A")).await.unwrap();
        let b = store.insert(new_enquiry("B")).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_fetch_all_empty_is_ok() {
        let store = MemoryEnquiryStore::new();
        assert!(store.fetch_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_all_newest_first() {
        let store = MemoryEnquiryStore::new();
        let first = store.insert(new_enquiry("First")).await.unwrap();
        let second = store.insert(new_enquiry("Second")).await.unwrap();

        let ids: Vec<_> = store.fetch_all().await.unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn test_update_status_touches_updated_at() {
        let store = MemoryEnquiryStore::new();
        let id = store.insert(new_enquiry("Chipo")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;

        store.update_status(id, EnquiryStatus::Confirmed).await.unwrap();

        let all = store.fetch_all().await.unwrap();
        let enquiry = all.iter().find(|e| e.id == id).unwrap();
        assert_eq!(enquiry.status, EnquiryStatus::Confirmed);
        assert!(enquiry.updated_at.unwrap() > enquiry.created_at);
    }

    #[tokio::test]
    async fn test_any_status_may_follow_any_other() {
        let store = MemoryEnquiryStore::new();
        let id = store.insert(new_enquiry("Farai")).await.unwrap();

        for status in [
            EnquiryStatus::Cancelled,
            EnquiryStatus::Pending,
            EnquiryStatus::Completed,
            EnquiryStatus::Confirmed,
        ] {
            store.update_status(id, status).await.unwrap();
            assert_eq!(store.fetch(id).await.unwrap().status, status);
        }
    }

    #[tokio::test]
    async fn test_update_notes_replaces_text() {
        let store = MemoryEnquiryStore::new();
        let id = store.insert(new_enquiry("Nyasha")).await.unwrap();

        store.update_notes(id, "Called, no answer").await.unwrap();
        store.update_notes(id, "Deposit received").await.unwrap();

        let enquiry = store.fetch(id).await.unwrap();
        assert_eq!(enquiry.follow_up_notes, "Deposit received");
        assert!(enquiry.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_updates_on_missing_id_fail() {
        let store = MemoryEnquiryStore::new();
        assert!(matches!(
            store.update_status(42, EnquiryStatus::Completed).await,
            Err(StoreError::NotFound(42))
        ));
        assert!(matches!(
            store.update_notes(42, "x").await,
            Err(StoreError::NotFound(42))
        ));
        assert!(matches!(store.fetch(42).await, Err(StoreError::NotFound(42))));
    }
}
