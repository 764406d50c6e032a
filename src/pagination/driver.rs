//! Page walking over a `PageSource`

use super::PageSource;
use crate::error::{Error, Result};
use crate::model::Order;
use tracing::debug;

/// Ceiling on pages fetched per run.
///
/// Guards against metadata that keeps promising another page forever.
pub const DEFAULT_MAX_PAGES: u32 = 100;

/// Walks pages in increasing order, accumulating orders until the API
/// signals no further pages.
#[derive(Debug, Clone)]
pub struct PageWalker {
    max_pages: u32,
}

impl Default for PageWalker {
    fn default() -> Self {
        Self::new()
    }
}

impl PageWalker {
    /// Create a walker with the default page ceiling.
    pub fn new() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the page ceiling.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch all orders across all pages, in page-then-within-page order.
    ///
    /// A single failed fetch aborts the whole retrieval: a silently
    /// truncated order history is worse than a failed run. Inconsistent
    /// metadata (a next-page pointer that does not advance) and
    /// non-terminating metadata both fail with [`Error::Pagination`].
    pub async fn collect_orders(&self, source: &dyn PageSource) -> Result<Vec<Order>> {
        let mut orders = Vec::new();
        let mut page: u32 = 1;
        let mut pages_fetched: u32 = 0;

        loop {
            let fetched = source.fetch_page(page).await?;
            pages_fetched += 1;
            debug!(page, orders = fetched.orders.len(), "fetched page");
            orders.extend(fetched.orders);

            match fetched.meta.pagination.next_page {
                None => break,
                Some(next) if next <= i64::from(page) => {
                    return Err(Error::pagination(format!(
                        "next_page {next} does not advance past page {page}"
                    )));
                }
                Some(next) => {
                    if pages_fetched >= self.max_pages {
                        return Err(Error::pagination(format!(
                            "no termination after {pages_fetched} pages (ceiling {})",
                            self.max_pages
                        )));
                    }
                    page = next as u32;
                }
            }
        }

        debug!(pages = pages_fetched, orders = orders.len(), "pagination complete");
        Ok(orders)
    }
}
