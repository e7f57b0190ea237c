use async_trait::async_trait;

use crate::errors::CoreError;
use crate::sources::traits::TableSource;

/// Fetches table resources over HTTP relative to a base URL.
pub struct HttpTableSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTableSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl TableSource for HttpTableSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_table(&self, resource: &str) -> Result<String, CoreError> {
        let url = self.url_for(resource);
        tracing::debug!(%url, "fetching table");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
