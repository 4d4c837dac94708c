use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, FORM_URLENCODED_UTF8, LOGIN_PATH,
    LOGIN_REDIRECT_DELAY_MS, NOTIFICATION_DURATION_MS,
};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration of the admin HTTP client
pub struct Config {
    /// Base URL every relative request path is joined to
    pub base_url: String,
    /// Upper bound for a single request, in milliseconds
    pub timeout_ms: u64,
    /// `Content-Type` applied to POST requests that do not set their own
    pub post_content_type: String,
    /// Route of the login page used by the redirect helper
    pub login_path: String,
    /// How long notifications stay on screen, in milliseconds
    pub notification_ms: u64,
    /// Delay before redirecting to login after a session expiry, in milliseconds
    pub redirect_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and `.env`), falling back to
    /// the fixed defaults for anything not set
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `ADMIN_HTTP_BASE_URL` | `http://localhost:9000/admin/api` |
    /// | `ADMIN_HTTP_TIMEOUT_MS` | `12000` |
    /// | `ADMIN_HTTP_LOGIN_PATH` | `/login` |
    /// | `ADMIN_HTTP_NOTIFICATION_MS` | `1000` |
    /// | `ADMIN_HTTP_REDIRECT_DELAY_MS` | `1000` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let config = Config {
            base_url: get_env_or_default("ADMIN_HTTP_BASE_URL", String::from(DEFAULT_BASE_URL)),
            timeout_ms: get_env_or_default("ADMIN_HTTP_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
            post_content_type: String::from(FORM_URLENCODED_UTF8),
            login_path: get_env_or_default("ADMIN_HTTP_LOGIN_PATH", String::from(LOGIN_PATH)),
            notification_ms: get_env_or_default(
                "ADMIN_HTTP_NOTIFICATION_MS",
                NOTIFICATION_DURATION_MS,
            ),
            redirect_delay_ms: get_env_or_default(
                "ADMIN_HTTP_REDIRECT_DELAY_MS",
                LOGIN_REDIRECT_DELAY_MS,
            ),
        };

        if config.timeout_ms == 0 {
            warn!("ADMIN_HTTP_TIMEOUT_MS is 0, requests will time out immediately");
        }
        config
    }

    /// Replaces the base URL, keeping every other value
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Notification display time as a `Duration`
    #[must_use]
    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Delay before the login redirect that follows a session expiry
    #[must_use]
    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}
