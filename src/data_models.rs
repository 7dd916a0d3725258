use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available";

/// Raw body of a fetched page. Only lives between fetching and extraction.
#[derive(Debug, Clone)]
pub struct PageContent(String);

impl PageContent {
    pub fn new(body: impl Into<String>) -> PageContent {
        PageContent(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fields extracted from a page, before provenance is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitespotDraft {
    pub name: String,
    pub description: String,
}

/// One row of the `kitespots` table. Serializes to exactly these three columns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KitespotRecord {
    pub name: String,
    pub description: String,
    pub source_url: String,
}

/// Body of the invocation response.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ResultEnvelope {
    Success {
        data: KitespotRecord,
        storage_response: Value,
    },
    Failure {
        error: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_has_exactly_three_columns() {
        let record = KitespotRecord {
            name: "Tarifa".into(),
            description: "Levante all summer".into(),
            source_url: "https://example.test/tarifa".into(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "name": "Tarifa",
                "description": "Levante all summer",
                "source_url": "https://example.test/tarifa",
            })
        );
    }

    #[test]
    fn test_envelope_shapes() {
        let ok = ResultEnvelope::Success {
            data: KitespotRecord {
                name: "Tarifa".into(),
                description: "Windy".into(),
                source_url: "https://example.test/tarifa".into(),
            },
            storage_response: json!([{ "id": 1 }]),
        };
        let value = serde_json::to_value(&ok).unwrap();
        assert_eq!(value["data"]["name"], "Tarifa");
        assert_eq!(value["storage_response"], json!([{ "id": 1 }]));

        let failed = ResultEnvelope::Failure {
            error: "boom".into(),
        };
        assert_eq!(serde_json::to_value(&failed).unwrap(), json!({ "error": "boom" }));
    }
}
