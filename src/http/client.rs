//! Authenticated client for the orders API

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::model::OrdersPage;
use crate::pagination::PageSource;
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Path of the orders endpoint, relative to the API origin.
const ORDERS_PATH: &str = "/v3/orders";

/// Longest response-body prefix carried in an HTTP status error.
const BODY_SNIPPET_LEN: usize = 1024;

/// HTTP client for the orders API.
///
/// Issues one authenticated GET per page. No retries, no rate limiting, no
/// local state; every failure maps onto the crate error taxonomy so the
/// driver can tell "no more pages" apart from "the request failed".
pub struct OrdersClient {
    http: Client,
    base_url: String,
    session_token: String,
}

impl OrdersClient {
    /// Create a client from the run configuration.
    pub fn new(config: &ExportConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            session_token: config.session_token.clone(),
        })
    }

    /// Fetch one page of orders by 1-based index.
    pub async fn fetch_page(&self, page: u32) -> Result<OrdersPage> {
        let url = self.orders_url()?;
        debug!(page, %url, "requesting orders page");

        let response = self
            .http
            .get(url)
            .query(&[("page", page.to_string())])
            .header("X-Client-Identifier", "web")
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Accept-Language", "en-US,en;q=0.9")
            .header("Referer", format!("{}/store/account/orders", self.base_url))
            .header(
                "Cookie",
                format!("_instacart_session_id={};", self.session_token),
            )
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), snippet(&body)));
        }

        let body = response.text().await.map_err(Error::Http)?;
        serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("orders page {page}: {e}")))
    }

    fn orders_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(ORDERS_PATH)?)
    }
}

#[async_trait]
impl PageSource for OrdersClient {
    async fn fetch_page(&self, page: u32) -> Result<OrdersPage> {
        OrdersClient::fetch_page(self, page).await
    }
}

impl std::fmt::Debug for OrdersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the session credential
        f.debug_struct("OrdersClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Truncate a response body for diagnostics.
fn snippet(body: &str) -> &str {
    match body.char_indices().nth(BODY_SNIPPET_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
