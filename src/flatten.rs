//! Flattening of nested orders into export rows
//!
//! Pure projection, no I/O. Each order becomes exactly one row; the
//! delivery/item nesting collapses into a pipe-joined retailer list and a
//! line-entry count.

use crate::model::Order;
use serde::Serialize;

/// Column headers for the export, in row order.
pub const CSV_HEADER: [&str; 6] = ["id", "status", "total", "createdAt", "retailers", "numItems"];

/// The flat tabular projection of one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatRow {
    pub id: String,
    pub status: String,
    /// Verbatim currency string from the API, not reformatted
    pub total: String,
    /// `YYYY-MM-DD` in the source timestamp's own offset; empty if absent
    pub created_at: String,
    /// Every delivery's retailer name in delivery order, `|`-joined.
    /// Duplicates are preserved: a retailer fulfilling two deliveries of the
    /// same order appears twice.
    pub retailers: String,
    /// Count of item line entries across all deliveries, not a quantity sum
    pub num_items: usize,
}

/// Flatten orders into rows, preserving input order.
pub fn flatten_orders(orders: &[Order]) -> Vec<FlatRow> {
    orders.iter().map(flatten_order).collect()
}

fn flatten_order(order: &Order) -> FlatRow {
    let retailers = order
        .deliveries
        .iter()
        .map(|d| d.retailer.name.as_str())
        .collect::<Vec<_>>()
        .join("|");

    let num_items = order.deliveries.iter().map(|d| d.items.len()).sum();

    let created_at = order
        .created_at
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    FlatRow {
        id: order.id.clone(),
        status: order.status.clone(),
        total: order.total.clone(),
        created_at,
        retailers,
        num_items,
    }
}
