//! In-process store, used for local runs without a database.

use async_trait::async_trait;
use inquiry_application::{InquiryStore, StoreError};
use inquiry_domain::{Inquiry, StoredInquiry};
use std::sync::Mutex;

#[derive(Default)]
pub struct InMemoryInquiryStore {
    records: Mutex<Vec<StoredInquiry>>,
}

impl InMemoryInquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<StoredInquiry> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl InquiryStore for InMemoryInquiryStore {
    async fn insert(&self, inquiry: &Inquiry) -> Result<StoredInquiry, StoreError> {
        let stored = StoredInquiry {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now(),
            inquiry: inquiry.clone(),
        };
        self.records
            .lock()
            .map_err(|e| StoreError::Io(format!("store lock poisoned: {}", e)))?
            .push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquiry_domain::Language;

    #[tokio::test]
    async fn test_insert_is_append_only() {
        let store = InMemoryInquiryStore::new();
        let inquiry = Inquiry {
            name: "Bob".to_string(),
            phone: None,
            email: Some("bob@example.com".to_string()),
            city: None,
            project_type: None,
            area: None,
            budget: None,
            message: None,
            language: Language::En,
        };

        let first = store.insert(&inquiry).await.unwrap();
        let second = store.insert(&inquiry).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.records().len(), 2);
    }
}
