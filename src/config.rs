use dotenvy::dotenv;
use std::env;

use crate::db::tables;
use crate::error::AgentError;

pub const DEFAULT_SOURCE_URL: &str = "https://www.example-kitespot.com";
pub const DEFAULT_TABLE: &str = tables::KITESPOTS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_api_key: String,
    pub source_url: String,
    pub table: String,
}

impl Config {
    /// Read configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Config, AgentError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, AgentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let supabase_url = get("SUPABASE_URL");
        let supabase_api_key = get("SUPABASE_API_KEY");
        let (Some(supabase_url), Some(supabase_api_key)) = (supabase_url, supabase_api_key) else {
            return Err(AgentError::Configuration(
                "Supabase environment variables (SUPABASE_URL and SUPABASE_API_KEY) are not set"
                    .to_string(),
            ));
        };

        Ok(Config {
            supabase_url,
            supabase_api_key,
            source_url: get("KITESPOT_SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.to_string()),
            table: get("KITESPOT_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
        })
    }
}
