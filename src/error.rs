use thiserror::Error;

/// Every way a single invocation can fail.
///
/// The request handler collapses all of these into one error envelope, the
/// variant only shows up in logs via [`AgentError::kind`].
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to insert into {table}: {reason}")]
    Persistence { table: String, reason: String },
}

impl AgentError {
    pub fn kind(&self) -> &'static str {
        match self {
            AgentError::Configuration(_) => "configuration",
            AgentError::Fetch { .. } => "fetch",
            AgentError::Persistence { .. } => "persistence",
        }
    }

    pub(crate) fn persistence(table: &str, reason: impl Into<String>) -> Self {
        AgentError::Persistence {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}
