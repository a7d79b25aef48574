use crate::error::ScrapeError;
use log::debug;
use reqwest::Client;
use std::time::Duration;

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ScrapeError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// GET the page and return its body; any non-success status is an error.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
