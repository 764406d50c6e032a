//! Partial data model for the orders API response
//!
//! The upstream schema is large and drifts; rather than mirroring it
//! field-for-field, these types decode only what the pagination driver and
//! the flattener need. Unknown fields are ignored, non-mandatory fields fall
//! back to defaults, and only malformed required fields (order identity,
//! pagination metadata) reject the page.

use crate::decode::{flex_int, flex_int_opt, rfc3339_opt};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// One page of the orders endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersPage {
    /// Orders in this page, in API order
    #[serde(default)]
    pub orders: Vec<Order>,
    /// Response metadata; mandatory
    pub meta: Meta,
}

/// Response metadata envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    /// Pagination metadata; mandatory
    pub pagination: PageMeta,
}

/// Pagination metadata for a page.
///
/// The API has been observed sending these counters as both numbers and
/// numeric strings, hence the flexible decoders.
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// Current page number (1-based)
    #[serde(deserialize_with = "flex_int")]
    pub page: i64,
    /// Next page number; absent or null on the last page
    #[serde(default, deserialize_with = "flex_int_opt")]
    pub next_page: Option<i64>,
    /// Total record count, when the API reports one
    #[serde(default, deserialize_with = "flex_int_opt")]
    pub total: Option<i64>,
}

/// One purchase transaction with one or more deliveries.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order identity; mandatory
    pub id: String,
    #[serde(default)]
    pub status: String,
    /// Currency-formatted total, passed through verbatim
    #[serde(default)]
    pub total: String,
    /// Creation timestamp in the source offset
    #[serde(default, deserialize_with = "rfc3339_opt")]
    pub created_at: Option<DateTime<FixedOffset>>,
    #[serde(default, rename = "order_deliveries")]
    pub deliveries: Vec<Delivery>,
}

/// One retailer-fulfilled shipment within an order.
#[derive(Debug, Clone, Deserialize)]
pub struct Delivery {
    #[serde(default)]
    pub retailer: Retailer,
    #[serde(default, rename = "order_items")]
    pub items: Vec<LineItem>,
}

/// The fulfilling retailer of a delivery.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Retailer {
    #[serde(default)]
    pub name: String,
}

/// One item line entry within a delivery.
///
/// Only the presence of the entry matters to the export; the quantity is
/// decoded because fractional values (weighed produce) are valid upstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub qty: f64,
}
