#![allow(clippy::must_use_candidate)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # instacart-export
//!
//! Fetches a user's paginated order history from the Instacart orders API
//! and exports it as a timestamped CSV file.
//!
//! ## Pipeline
//!
//! ```text
//! OrdersClient ──► PageWalker ──► flatten_orders ──► write_export
//!  (per-page GET)   (follow         (Order → row)      (CSV sink)
//!                    next_page)
//! ```
//!
//! The API is loosely typed: the same counter arrives as a number on one
//! page and a numeric string on the next, and the response schema drifts.
//! Decoding is therefore partial and tolerant: only the fields the export
//! needs are modeled, unknown fields are ignored, and only malformed
//! required fields reject a page.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use instacart_export::config::ExportConfig;
//! use instacart_export::flatten::flatten_orders;
//! use instacart_export::http::OrdersClient;
//! use instacart_export::output::write_export;
//! use instacart_export::pagination::PageWalker;
//!
//! #[tokio::main]
//! async fn main() -> instacart_export::Result<()> {
//!     let config = ExportConfig::from_env()?;
//!     let client = OrdersClient::new(&config)?;
//!     let orders = PageWalker::new().collect_orders(&client).await?;
//!     let rows = flatten_orders(&orders);
//!     write_export(&config.output_dir, &rows)?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Run configuration and credential resolution
pub mod config;

/// Partial data model for the orders API
pub mod model;

/// Tolerant decoding of loosely typed fields
pub mod decode;

/// HTTP page fetcher
pub mod http;

/// Pagination driver
pub mod pagination;

/// Flattening of nested orders into export rows
pub mod flatten;

/// CSV export sink
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
