use std::future::Future;

use crate::data_models::PageContent;
use crate::error::AgentError;

/// Retrieves the raw body of a page.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<PageContent, AgentError>> + Send;
}

impl<T: PageFetcher + Sync> PageFetcher for &T {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<PageContent, AgentError>> + Send {
        (**self).fetch(url)
    }
}

/// Plain GET over a `reqwest::Client`. No retries, any non-2xx status is an error.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> HttpFetcher {
        HttpFetcher { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<PageContent, AgentError> {
        let wrap = |source| AgentError::Fetch {
            url: url.to_string(),
            source,
        };

        log::info!("fetching page: {url}");
        let res = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(wrap)?;
        let status = res.status();
        let body = res.text().await.map_err(wrap)?;
        log::info!("fetched {url}: status {status}, {} bytes", body.len());

        Ok(PageContent::new(body))
    }
}
