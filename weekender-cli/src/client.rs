//! HTTP client for the planner API

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use weekender_core::config::Settings;
use weekender_core::events::EventsResponse;
use weekender_core::food::{FoodSearch, FoodSearchResponse};
use weekender_core::itinerary::{ItineraryOptionsResponse, ItineraryRequest, ItineraryResponse};

/// HTTP client for the planner API
pub struct Client {
    http: reqwest::Client,
    root: String,
    itinerary_timeout: Duration,
}

#[derive(Debug, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
}

impl Client {
    pub fn new(settings: &Settings) -> Result<Self> {
        let root = settings.api_root();
        Url::parse(&root).with_context(|| format!("Invalid API base URL '{}'", root))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            root,
            itinerary_timeout: Duration::from_secs(settings.itinerary_timeout_secs),
        })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.root, path)
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthStatus> {
        let resp = self
            .http
            .get(self.url("/health"))
            .send()
            .await
            .context("Failed to connect to planner API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("{}", error_message(status, &body));
        }

        // Any 2xx is healthy; the body is informational.
        let body = resp.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    /// POST /itinerary
    pub async fn create_itinerary(&self, req: &ItineraryRequest) -> Result<ItineraryResponse> {
        let resp = self
            .http
            .post(self.url("/itinerary"))
            .timeout(self.itinerary_timeout)
            .json(req)
            .send()
            .await
            .context("Failed to connect to planner API")?;

        parse_response(resp).await
    }

    /// POST /itinerary/options
    pub async fn create_itinerary_options(
        &self,
        req: &ItineraryRequest,
    ) -> Result<ItineraryOptionsResponse> {
        let resp = self
            .http
            .post(self.url("/itinerary/options"))
            .timeout(self.itinerary_timeout)
            .json(req)
            .send()
            .await
            .context("Failed to connect to planner API")?;

        parse_response(resp).await
    }

    /// GET /events/this-week
    pub async fn events_this_week(&self) -> Result<EventsResponse> {
        let resp = self
            .http
            .get(self.url("/events/this-week"))
            .send()
            .await
            .context("Failed to connect to planner API")?;

        parse_response(resp).await
    }

    /// GET /food/search
    pub async fn search_food(&self, search: &FoodSearch) -> Result<FoodSearchResponse> {
        let resp = self
            .http
            .get(self.url("/food/search"))
            .query(search)
            .send()
            .await
            .context("Failed to connect to planner API")?;

        parse_response(resp).await
    }
}

async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    let url = resp.url().clone();
    tracing::debug!(%status, %url, "planner API response");

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("{}", error_message(status, &body));
    }

    resp.json()
        .await
        .with_context(|| format!("Unexpected response from {}", url.path()))
}

/// Pull a readable message out of an error body.
/// Understands `{"detail": ...}` and `{"error": ...}`, falls back to the status line.
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let detail = parsed.as_ref().and_then(|v| v.get("detail").or_else(|| v.get("error")));

    match detail {
        Some(serde_json::Value::String(message)) => format!("{} ({})", message, status),
        Some(other) => format!("{} ({})", other, status),
        None => format!("Request failed with {}", status),
    }
}
