//! Run configuration
//!
//! A run needs one opaque session credential plus a handful of knobs with
//! sensible defaults. The credential is resolved before any network
//! activity; a missing credential is a fatal configuration error.

use crate::error::{Error, Result};
use crate::pagination::DEFAULT_MAX_PAGES;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the session credential.
pub const SESSION_TOKEN_ENV: &str = "INSTACART_SESSION_TOKEN";

/// Default orders API origin.
pub const DEFAULT_BASE_URL: &str = "https://www.instacart.com";

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Opaque session credential
    pub session_token: String,
    /// API origin (overridable for testing)
    pub base_url: String,
    /// Directory the CSV file is written into
    pub output_dir: PathBuf,
    /// Page ceiling for the pagination driver
    pub max_pages: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ExportConfig {
    /// Create a config with defaults for everything but the credential.
    pub fn new(session_token: impl Into<String>) -> Self {
        Self {
            session_token: session_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_pages: DEFAULT_MAX_PAGES,
            timeout: Duration::from_secs(30),
        }
    }

    /// Create a config with the credential taken from the environment.
    pub fn from_env() -> Result<Self> {
        let token = resolve_session_token(None, env::var(SESSION_TOKEN_ENV).ok())?;
        Ok(Self::new(token))
    }

    /// Set the API origin
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the page ceiling
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.session_token.is_empty() {
            return Err(Error::missing_credential(SESSION_TOKEN_ENV));
        }
        if self.base_url.is_empty() {
            return Err(Error::config("base URL must not be empty"));
        }
        if self.max_pages == 0 {
            return Err(Error::config("max_pages must be at least 1"));
        }
        Ok(())
    }
}

/// Resolve the session credential from an explicit flag or the environment.
///
/// The flag wins; empty strings count as absent.
pub fn resolve_session_token(flag: Option<String>, env_value: Option<String>) -> Result<String> {
    flag.filter(|s| !s.is_empty())
        .or_else(|| env_value.filter(|s| !s.is_empty()))
        .ok_or_else(|| Error::missing_credential(SESSION_TOKEN_ENV))
}
