use std::future::Future;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use crate::config::Config;
use crate::data_models::KitespotRecord;
use crate::error::AgentError;

/// Table names as constants for consistency
pub mod tables {
    pub const KITESPOTS: &str = "kitespots";
}

/// Inserts a record into a named table and hands back whatever the store returns.
pub trait RecordStore {
    fn insert(
        &self,
        table: &str,
        record: &KitespotRecord,
    ) -> impl Future<Output = Result<Value, AgentError>> + Send;
}

impl<T: RecordStore + Sync> RecordStore for &T {
    fn insert(
        &self,
        table: &str,
        record: &KitespotRecord,
    ) -> impl Future<Output = Result<Value, AgentError>> + Send {
        (**self).insert(table, record)
    }
}

/// Client for a Supabase project's PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(client, &config.supabase_url, &config.supabase_api_key)
    }

    /// REST endpoint for a table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

impl RecordStore for SupabaseStore {
    async fn insert(&self, table: &str, record: &KitespotRecord) -> Result<Value, AgentError> {
        let res = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "return=representation")
            .json(record)
            .send()
            .await
            .map_err(|e| AgentError::persistence(table, e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| AgentError::persistence(table, e.to_string()))?;

        if !status.is_success() {
            return Err(AgentError::persistence(
                table,
                format!("status {status}: {}", body.trim()),
            ));
        }

        log::info!("inserted into {table}: status {status}");

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| {
            AgentError::persistence(table, format!("invalid response body: {e}"))
        })
    }
}
