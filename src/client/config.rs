use std::time::Duration;

use crate::error::{config::ConfigError, Error};

/// API base URL used when none is given at build time
pub const DEFAULT_API_URL: &str = "/api";
/// How long a notice stays on screen
pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_secs(5);
/// How many historical records the history tab renders
pub const DEFAULT_RECORDS_DISPLAY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub notice_timeout: Duration,
    pub records_display_limit: usize,
}

impl ClientConfig {
    pub fn new(
        api_base_url: &str,
        notice_timeout: Duration,
        records_display_limit: usize,
    ) -> Result<Self, Error> {
        let api_base_url = api_base_url.trim().trim_end_matches('/');
        if api_base_url.is_empty() {
            return Err(ConfigError::EmptyApiUrl.into());
        }
        if records_display_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "records_display_limit".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(Self {
            api_base_url: api_base_url.to_string(),
            notice_timeout,
            records_display_limit,
        })
    }

    /// Builds the config from values baked in at compile time.
    ///
    /// `PRESENSI_API_URL` overrides the API base URL; the web bundle has no
    /// runtime environment to read from.
    pub fn from_build_env() -> Result<Self, Error> {
        Self::new(
            option_env!("PRESENSI_API_URL").unwrap_or(DEFAULT_API_URL),
            DEFAULT_NOTICE_TIMEOUT,
            DEFAULT_RECORDS_DISPLAY_LIMIT,
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            notice_timeout: DEFAULT_NOTICE_TIMEOUT,
            records_display_limit: DEFAULT_RECORDS_DISPLAY_LIMIT,
        }
    }
}
