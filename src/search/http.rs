use crate::filter::FilterState;
use crate::models::{Property, Source};
use crate::search::traits::PropertySearch;
use crate::search::types::{SearchQuery, SearchResponse};
use crate::session::SessionContext;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Property search against the remote REST API
pub struct HttpPropertySearch {
    client: Client,
    endpoint: Url,
    bearer: Option<String>,
}

impl HttpPropertySearch {
    /// Create a client for `base_url`, authorised with the session's token
    pub fn new(base_url: &str, session: &SessionContext) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: Self::endpoint(base_url)?,
            bearer: session.bearer(),
        })
    }

    fn endpoint(base_url: &str) -> Result<Url> {
        let base = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Url::parse(&base)
            .and_then(|u| u.join("properties"))
            .with_context(|| format!("Invalid API base URL: {base_url}"))
    }
}

#[async_trait]
impl PropertySearch for HttpPropertySearch {
    async fn search(&self, filter: &FilterState) -> Result<Vec<Property>> {
        let query = SearchQuery::from_filter(filter);
        debug!(endpoint = %self.endpoint, params = query.pairs().len(), "searching properties");

        let mut request = self.client.get(self.endpoint.clone()).query(query.pairs());
        if let Some(bearer) = &self.bearer {
            request = request.header(AUTHORIZATION, bearer);
        }

        let response = request
            .send()
            .await
            .context("Failed to reach property search API")?;

        if !response.status().is_success() {
            warn!("Property search returned status: {}", response.status());
            anyhow::bail!("Property search failed: {}", response.status());
        }

        let body: SearchResponse = response
            .json()
            .await
            .context("Failed to decode search response")?;

        let mut properties = body.data;
        for p in &mut properties {
            p.source = Source::Api;
        }
        info!("Found {} properties", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "API"
    }
}
