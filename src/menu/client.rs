//! HTTP client for the remote menu document.
//!
//! One GET per process; no retries, no caching. Failures are typed so the
//! diagnostic log can name the cause, but callers treat them all the same.

use reqwest::Client;

use super::types::{MenuDocument, MenuResponse};

/// Published menu document for the Aahaar restaurant.
pub const DEFAULT_MENU_URL: &str =
    "https://raw.githubusercontent.com/Ripple-Relaef/restaurant-data/refs/heads/main/aahaar.json";

/// Errors from fetching the menu.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid menu document: {0}")]
    Parse(String),
}

/// Fetches the menu JSON from a fixed endpoint.
#[derive(Debug)]
pub struct MenuClient {
    http: Client,
    url: String,
}

impl MenuClient {
    /// Create a client pointed at the published menu URL.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_MENU_URL.into())
    }

    /// Create a client with a custom URL (for testing with mock servers).
    pub fn with_url(url: String) -> Self {
        Self {
            http: Client::new(),
            url,
        }
    }

    /// Fetch and decode the menu document.
    pub async fn fetch_menu(&self) -> Result<MenuDocument, MenuError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(MenuError::Status { status, body });
        }

        let resp: MenuResponse = response
            .json()
            .await
            .map_err(|e| MenuError::Parse(format!("failed to parse menu: {e}")))?;

        Ok(resp.categories)
    }
}

impl Default for MenuClient {
    fn default() -> Self {
        Self::new()
    }
}
