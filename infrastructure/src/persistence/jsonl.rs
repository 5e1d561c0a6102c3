//! Append-only JSONL file store.
//!
//! Each [`StoredInquiry`] is serialized as a single JSON line and appended
//! to the file, flushed before `insert` returns.

use async_trait::async_trait;
use inquiry_application::{InquiryStore, StoreError};
use inquiry_domain::{Inquiry, StoredInquiry};
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// JSONL inquiry store that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Existing lines are never
/// rewritten.
pub struct JsonlInquiryStore {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlInquiryStore {
    /// Open (or create) the store file, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Io(format!(
                    "could not create store directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                StoreError::Io(format!("could not open store file {}: {}", path.display(), e))
            })?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record back, in insertion order.
    pub fn records(&self) -> Result<Vec<StoredInquiry>, StoreError> {
        let file = File::open(&self.path).map_err(|e| StoreError::Io(e.to_string()))?;
        BufReader::new(file)
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| {
                let line = line.map_err(|e| StoreError::Io(e.to_string()))?;
                serde_json::from_str(&line).map_err(|e| StoreError::Serialization(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl InquiryStore for JsonlInquiryStore {
    async fn insert(&self, inquiry: &Inquiry) -> Result<StoredInquiry, StoreError> {
        let stored = StoredInquiry {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now(),
            inquiry: inquiry.clone(),
        };

        let line =
            serde_json::to_string(&stored).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|e| StoreError::Io(format!("store lock poisoned: {}", e)))?;
        writeln!(writer, "{}", line).map_err(|e| StoreError::Io(e.to_string()))?;
        writer.flush().map_err(|e| StoreError::Io(e.to_string()))?;

        debug!("Appended inquiry {} to {}", stored.id, self.path.display());
        Ok(stored)
    }
}

impl Drop for JsonlInquiryStore {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inquiry_domain::Language;

    fn inquiry(name: &str) -> Inquiry {
        Inquiry {
            name: name.to_string(),
            phone: Some("+7 777 000 0000".to_string()),
            email: None,
            city: Some("Almaty".to_string()),
            project_type: None,
            area: None,
            budget: None,
            message: None,
            language: Language::Ru,
        }
    }

    #[tokio::test]
    async fn test_insert_appends_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("inquiries.jsonl");
        let store = JsonlInquiryStore::open(&path).unwrap();

        store.insert(&inquiry("Aliya")).await.unwrap();
        store.insert(&inquiry("Bob")).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.trim().lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["name"], "Aliya");
        assert_eq!(first["language"], "ru");
        assert!(first["email"].is_null());
        assert!(first.get("id").is_some());
        assert!(first.get("created_at").is_some());
    }

    #[tokio::test]
    async fn test_same_inquiry_twice_gives_two_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonlInquiryStore::open(dir.path().join("inquiries.jsonl")).unwrap();

        let a = store.insert(&inquiry("Bob")).await.unwrap();
        let b = store.insert(&inquiry("Bob")).await.unwrap();

        assert_ne!(a.id, b.id);
        let records = store.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].inquiry, records[1].inquiry);
    }

    #[tokio::test]
    async fn test_reopen_keeps_existing_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inquiries.jsonl");

        {
            let store = JsonlInquiryStore::open(&path).unwrap();
            store.insert(&inquiry("Aliya")).await.unwrap();
        }

        let store = JsonlInquiryStore::open(&path).unwrap();
        store.insert(&inquiry("Bob")).await.unwrap();

        let names: Vec<String> = store
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.inquiry.name)
            .collect();
        assert_eq!(names, vec!["Aliya".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn test_open_fails_on_directory_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = JsonlInquiryStore::open(dir.path());
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
