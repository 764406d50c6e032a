//! HTTP page fetcher for the orders endpoint

mod client;

pub use client::OrdersClient;

#[cfg(test)]
mod tests;
