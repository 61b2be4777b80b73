use std::env;
use std::time::Duration;

use tracing::info;

use crate::banner::DEFAULT_HIDE_AFTER;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3030";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub api_url: String,
    pub message_timeout: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            api_url: DEFAULT_API_URL.to_string(),
            message_timeout: DEFAULT_HIDE_AFTER,
        }
    }
}

impl WidgetConfig {
    /// Reads `ACTIVITIES_API_URL` and `MESSAGE_TIMEOUT_SECS`, falling back to
    /// the defaults for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = WidgetConfig::default();

        if let Ok(url) = env::var("ACTIVITIES_API_URL") {
            config.api_url = url;
        }

        if let Ok(secs) = env::var("MESSAGE_TIMEOUT_SECS") {
            config.message_timeout = Duration::from_secs(secs.parse()?);
        }

        Ok(config)
    }

    pub fn log(&self) {
        info!("ACTIVITIES_API_URL: {}", self.api_url);
        info!("MESSAGE_TIMEOUT_SECS: {}", self.message_timeout.as_secs());
    }
}
