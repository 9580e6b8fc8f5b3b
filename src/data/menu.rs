//! Commons menu API client
//!
//! This module fetches the menu document for a meal period and pulls the item
//! list out of it. The document is kept as an untyped `serde_json::Value`; only
//! the fields the widget shows are ever looked at.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Base URL of the menu API
pub const DEFAULT_BASE_URL: &str = "http://api.lucagiannotti.com";

/// Errors that can occur when fetching or reading a menu
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: StatusCode },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response did not have the expected shape
    #[error("Unexpected menu shape: {0} did not resolve")]
    Shape(String),
}

/// Source of menu documents
#[async_trait]
pub trait MenuFetcher: Send + Sync {
    /// Fetches `url` and parses the body as JSON
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Client for the Commons menu API
#[derive(Debug, Clone)]
pub struct MenuClient {
    client: Client,
}

impl Default for MenuClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuClient {
    /// Create a new MenuClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new MenuClient with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Create a new MenuClient whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client))
    }
}

#[async_trait]
impl MenuFetcher for MenuClient {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        info!(url, "fetching menu");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response.text().await?;
        let menu: Value = serde_json::from_str(&text)?;
        debug!(%menu, "received menu");

        Ok(menu)
    }
}

/// Extracts the first list of items, `menu_items[0]`, from a menu document
pub fn menu_items(menu: &Value) -> Result<Vec<String>, FetchError> {
    let lists = menu
        .get("menu_items")
        .ok_or_else(|| FetchError::Shape("menu_items".to_string()))?;

    let first = lists
        .as_array()
        .and_then(|lists| lists.first())
        .ok_or_else(|| FetchError::Shape("menu_items[0]".to_string()))?;

    let entries = first
        .as_array()
        .ok_or_else(|| FetchError::Shape("menu_items[0]".to_string()))?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            entry
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| FetchError::Shape(format!("menu_items[0][{}]", i)))
        })
        .collect()
}
