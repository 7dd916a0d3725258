use serde_json::Value;

use crate::data_models::KitespotRecord;
use crate::db::RecordStore;
use crate::enricher::enrich;
use crate::error::AgentError;
use crate::extractor::extract;
use crate::fetcher::PageFetcher;

/// What one successful run produced: the row we sent and what the store sent back.
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlResult {
    pub data: KitespotRecord,
    pub storage_response: Value,
}

/// fetch -> parse -> enrich -> persist, stopping at the first failure.
///
/// Network calls are awaited one after the other. Nothing is written unless the
/// fetch succeeded.
pub async fn crawl_kitespot<F, S>(
    fetcher: &F,
    store: &S,
    source_url: &str,
    table: &str,
) -> Result<CrawlResult, AgentError>
where
    F: PageFetcher + Sync,
    S: RecordStore + Sync,
{
    let page = fetcher.fetch(source_url).await?;

    let draft = extract(&page);
    log::info!(
        "parsed {source_url} ({} bytes): name={:?}",
        page.len(),
        draft.name
    );
    drop(page);

    let record = enrich(draft, source_url);

    let storage_response = store.insert(table, &record).await?;

    Ok(CrawlResult {
        data: record,
        storage_response,
    })
}
