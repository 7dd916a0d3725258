use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::Config;
use crate::crawler::{CrawlResult, crawl_kitespot};
use crate::data_models::ResultEnvelope;
use crate::db::{RecordStore, SupabaseStore};
use crate::error::AgentError;
use crate::fetcher::{HttpFetcher, PageFetcher};

pub const STATUS_OK: u16 = 200;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Response object of one invocation, shaped the way serverless runtimes expect it.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    fn json(status_code: u16, envelope: &ResultEnvelope) -> InvocationResponse {
        let (status_code, body) = match serde_json::to_string(envelope) {
            Ok(body) => (status_code, body),
            Err(e) => {
                log::error!("failed to encode response envelope: {e}");
                (
                    STATUS_INTERNAL_ERROR,
                    r#"{"error":"failed to encode response"}"#.to_string(),
                )
            }
        };
        InvocationResponse {
            status_code,
            headers: BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

/// Collapse a pipeline outcome into a response. Every error kind maps to 500.
pub fn respond(outcome: Result<CrawlResult, AgentError>) -> InvocationResponse {
    match outcome {
        Ok(result) => InvocationResponse::json(
            STATUS_OK,
            &ResultEnvelope::Success {
                data: result.data,
                storage_response: result.storage_response,
            },
        ),
        Err(e) => {
            log::error!("invocation failed ({}): {:#}", e.kind(), e);
            InvocationResponse::json(
                STATUS_INTERNAL_ERROR,
                &ResultEnvelope::Failure {
                    error: e.to_string(),
                },
            )
        }
    }
}

/// Run one invocation against an already resolved config.
///
/// `connect` is only called once the config is known to be valid, so a config
/// error never builds or touches a fetcher or store.
pub async fn handle_with<F, S, C>(config: Result<Config, AgentError>, connect: C) -> InvocationResponse
where
    F: PageFetcher + Sync,
    S: RecordStore + Sync,
    C: FnOnce(&Config) -> (F, S),
{
    let config = match config {
        Ok(config) => config,
        Err(e) => return respond(Err(e)),
    };
    let (fetcher, store) = connect(&config);
    respond(crawl_kitespot(&fetcher, &store, &config.source_url, &config.table).await)
}

/// Run one invocation over real HTTP, sharing `client` between fetcher and store.
pub async fn handle_with_client(
    config: Result<Config, AgentError>,
    client: reqwest::Client,
) -> InvocationResponse {
    handle_with(config, |config| {
        (
            HttpFetcher::new(client.clone()),
            SupabaseStore::from_config(client, config),
        )
    })
    .await
}

/// Entry point for a single invocation. Reads the environment and builds a
/// fresh HTTP client each time.
pub async fn handler() -> InvocationResponse {
    handle_with_client(Config::from_env(), reqwest::Client::new()).await
}
