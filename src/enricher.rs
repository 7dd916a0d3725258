use crate::data_models::{KitespotDraft, KitespotRecord};

/// Attach provenance to a record. Overwrites any existing `source_url`.
pub trait Enrich {
    fn enrich(self, source_url: &str) -> KitespotRecord;
}

impl Enrich for KitespotDraft {
    fn enrich(self, source_url: &str) -> KitespotRecord {
        KitespotRecord {
            name: self.name,
            description: self.description,
            source_url: source_url.to_string(),
        }
    }
}

impl Enrich for KitespotRecord {
    fn enrich(mut self, source_url: &str) -> KitespotRecord {
        self.source_url = source_url.to_string();
        self
    }
}

pub fn enrich<R: Enrich>(record: R, source_url: &str) -> KitespotRecord {
    record.enrich(source_url)
}
