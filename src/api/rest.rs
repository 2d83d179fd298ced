use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::RestConfig;
use crate::domain::{NamedRegion, Order, Restaurant};

const USER_AGENT: &str = "dronepath/0.1.0";

/// A JSON value that the service sends either bare or wrapped in an array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.into_iter().next(),
        }
    }
}

/// Blocking client for the restaurant/order/airspace REST service
pub struct RestClient {
    base_url: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
}

impl RestClient {
    pub fn new(base_url: &str, config: &RestConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            max_retries: config.max_retries.max(1),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// True if the service answers `/isAlive` with `true`
    pub fn is_alive(&self) -> Result<bool> {
        let body = self.get_text("isAlive")?;
        Ok(body.trim() == "true")
    }

    pub fn restaurants(&self) -> Result<Vec<Restaurant>> {
        self.get_json("restaurants")
    }

    pub fn orders(&self, date: NaiveDate) -> Result<Vec<Order>> {
        self.get_json(&format!("orders/{}", date.format("%Y-%m-%d")))
    }

    pub fn no_fly_zones(&self) -> Result<Vec<NamedRegion>> {
        self.get_json("noFlyZones")
    }

    pub fn central_area(&self) -> Result<NamedRegion> {
        let regions: OneOrMany<NamedRegion> = self.get_json("centralArea")?;
        regions
            .into_first()
            .ok_or_else(|| anyhow::anyhow!("Service returned no central area"))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_text(path)?;
        serde_json::from_str(&body).with_context(|| format!("Failed to parse JSON from /{}", path))
    }

    /// GET with retry on rate limiting and gateway errors
    fn get_text(&self, path: &str) -> Result<String> {
        let url = self.endpoint(path);
        let mut last_error = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                let wait_secs = 2 * attempt as u64;
                tracing::warn!(
                    "{} unavailable, retrying in {} seconds (attempt {}/{})",
                    url,
                    wait_secs,
                    attempt + 1,
                    self.max_retries
                );
                std::thread::sleep(Duration::from_secs(wait_secs));
            }

            let response = self
                .client
                .get(&url)
                .send()
                .with_context(|| format!("Failed to send request to {}", url))?;

            match response.status().as_u16() {
                200 => {
                    return response
                        .text()
                        .with_context(|| format!("Failed to read response body from {}", url));
                }
                429 | 502 | 503 | 504 => {
                    last_error = Some(format!(
                        "{} returned status {} (attempt {})",
                        url,
                        response.status(),
                        attempt + 1
                    ));
                    continue;
                }
                status => {
                    bail!("Incorrect response code ({}) for URL: {}", status, url);
                }
            }
        }

        bail!(
            "Request failed after {} attempts: {}",
            self.max_retries,
            last_error.unwrap_or_else(|| "Unknown error".to_string())
        )
    }
}
