use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::blocking::Client;

use crate::model::summary::{SummaryEntry, SummaryResponse};
use crate::repository::traits::SummaryRepository;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpSummaryRepository {
    client: Client,
    base_url: String,
}

impl HttpSummaryRepository {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(Self { client, base_url })
    }
}

impl SummaryRepository for HttpSummaryRepository {
    fn fetch_summary(&self) -> Result<Vec<SummaryEntry>> {
        let url = format!("{}/summary", self.base_url);
        debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("{} answered with an error status", url))?;

        let body: SummaryResponse = response
            .json()
            .context("summary response was not valid JSON")?;

        let entries: Vec<SummaryEntry> = body
            .summary
            .into_iter()
            .map(|record| record.into_entry())
            .collect();
        debug!("received {} summary entries", entries.len());
        Ok(entries)
    }
}
