//! CSV export sink

mod writer;

pub use writer::{export_filename, write_export, write_rows, ExportReport};

#[cfg(test)]
mod tests;
