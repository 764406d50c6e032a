//! CLI argument parsing

use crate::config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use crate::pagination::DEFAULT_MAX_PAGES;
use clap::Parser;
use std::path::PathBuf;

/// Export your Instacart order history to CSV
#[derive(Parser, Debug)]
#[command(name = "instacart-export")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Session credential; falls back to the INSTACART_SESSION_TOKEN
    /// environment variable
    #[arg(long)]
    pub session_token: Option<String>,

    /// Directory the CSV export is written into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Ceiling on pages fetched per run
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Orders API origin
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
