//! CLI runner - executes the export

use crate::cli::commands::Cli;
use crate::config::{resolve_session_token, ExportConfig, SESSION_TOKEN_ENV};
use crate::error::Result;
use crate::flatten::flatten_orders;
use crate::http::OrdersClient;
use crate::output;
use crate::pagination::PageWalker;
use std::env;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the export: fetch all pages, flatten, write the CSV.
    ///
    /// Either the full order history is exported or nothing is written;
    /// every failure propagates out of here and the process exits non-zero.
    pub async fn run(&self) -> Result<()> {
        // credential resolution happens before any network activity
        let config = self.build_config()?;
        config.validate()?;

        info!("fetching order history");
        let client = OrdersClient::new(&config)?;
        let walker = PageWalker::new().with_max_pages(config.max_pages);
        let orders = walker.collect_orders(&client).await?;

        info!(orders = orders.len(), "processing orders");
        let rows = flatten_orders(&orders);

        let report = output::write_export(&config.output_dir, &rows)?;
        info!(
            path = %report.path.display(),
            rows = report.rows_written,
            "export complete"
        );

        Ok(())
    }

    fn build_config(&self) -> Result<ExportConfig> {
        let token = resolve_session_token(
            self.cli.session_token.clone(),
            env::var(SESSION_TOKEN_ENV).ok(),
        )?;

        Ok(ExportConfig::new(token)
            .with_base_url(&self.cli.base_url)
            .with_output_dir(self.cli.output_dir.clone())
            .with_max_pages(self.cli.max_pages))
    }
}
