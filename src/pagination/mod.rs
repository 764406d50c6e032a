//! Pagination driver
//!
//! Walks the orders endpoint page by page, following the API's next-page
//! signal, and accumulates every order across pages.

mod driver;

pub use driver::{PageWalker, DEFAULT_MAX_PAGES};

use crate::error::Result;
use crate::model::OrdersPage;
use async_trait::async_trait;

/// A source of order pages.
///
/// The HTTP client implements this; tests substitute an in-memory source.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a single page by 1-based index.
    async fn fetch_page(&self, page: u32) -> Result<OrdersPage>;
}
