//! REST table store
//!
//! Inserts rows into a hosted table through a PostgREST-style endpoint:
//! `POST {base}/rest/v1/{table}` authenticated with the service credential.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use inquiry_application::{InquiryStore, StoreError};
use inquiry_domain::{Inquiry, StoredInquiry};
use serde::Deserialize;
use tracing::debug;

/// Row fields the table generates on insert
#[derive(Debug, Deserialize)]
struct InsertedRow {
    id: serde_json::Value,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

/// Store adapter for a hosted `inquiries` table
pub struct RestInquiryStore {
    client: reqwest::Client,
    endpoint: String,
    service_key: String,
}

impl RestInquiryStore {
    pub fn new(base_url: &str, table: &str, service_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, table, service_key)
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: &str,
        table: &str,
        service_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: table_endpoint(base_url, table),
            service_key: service_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn table_endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

/// Extract the generated id and timestamp from a `return=representation` body.
fn parse_inserted_row(body: &str) -> Result<(String, Option<DateTime<Utc>>), StoreError> {
    let rows: Vec<InsertedRow> = serde_json::from_str(body)
        .map_err(|e| StoreError::UnexpectedResponse(format!("{}: {}", e, body)))?;
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| StoreError::UnexpectedResponse("insert returned no rows".to_string()))?;
    let id = match row.id {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        other => {
            return Err(StoreError::UnexpectedResponse(format!(
                "unsupported id value: {}",
                other
            )));
        }
    };
    Ok((id, row.created_at))
}

#[async_trait]
impl InquiryStore for RestInquiryStore {
    async fn insert(&self, inquiry: &Inquiry) -> Result<StoredInquiry, StoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(inquiry)
            .send()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let (id, created_at) = parse_inserted_row(&body)?;
        debug!("Inserted row {} via {}", id, self.endpoint);

        Ok(StoredInquiry {
            id,
            created_at: created_at.unwrap_or_else(Utc::now),
            inquiry: inquiry.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let store = RestInquiryStore::new("https://project.example.co/", "inquiries", "key");
        assert_eq!(store.endpoint(), "https://project.example.co/rest/v1/inquiries");
    }

    #[test]
    fn test_parse_uuid_row() {
        let body = r#"[{"id":"6f1c7c2e-0000-4000-8000-000000000001","created_at":"2026-03-01T10:00:00+00:00","name":"Bob"}]"#;
        let (id, created_at) = parse_inserted_row(body).unwrap();
        assert_eq!(id, "6f1c7c2e-0000-4000-8000-000000000001");
        assert!(created_at.is_some());
    }

    #[test]
    fn test_parse_numeric_id_without_timestamp() {
        let (id, created_at) = parse_inserted_row(r#"[{"id":42}]"#).unwrap();
        assert_eq!(id, "42");
        assert!(created_at.is_none());
    }

    #[test]
    fn test_parse_empty_body_is_error() {
        assert!(matches!(
            parse_inserted_row("[]"),
            Err(StoreError::UnexpectedResponse(_))
        ));
        assert!(matches!(
            parse_inserted_row("not json"),
            Err(StoreError::UnexpectedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connection_error() {
        let store = RestInquiryStore::new("http://127.0.0.1:1", "inquiries", "key");
        let inquiry = Inquiry {
            name: "Bob".to_string(),
            phone: Some("1".to_string()),
            email: None,
            city: None,
            project_type: None,
            area: None,
            budget: None,
            message: None,
            language: inquiry_domain::Language::En,
        };
        let err = store.insert(&inquiry).await.unwrap_err();
        assert!(matches!(err, StoreError::ConnectionError(_)));
    }
}
