// Common utilities for the integration tests
#![allow(dead_code)]

use admin_http::constants::FORM_URLENCODED_UTF8;
use admin_http::prelude::*;
use std::sync::Arc;

pub const START_PATH: &str = "/settings/profile";

pub struct Harness {
    pub session: Arc<MemorySessionStore>,
    pub navigator: Arc<HistoryNavigator>,
    pub storage: Arc<MemoryStorage>,
    pub notifier: Arc<RecordingNotifier>,
    pub connectivity: Arc<StaticConnectivity>,
}

impl Harness {
    pub fn new() -> Self {
        setup_logger();
        Self {
            session: Arc::new(MemorySessionStore::new()),
            navigator: Arc::new(HistoryNavigator::new(Route::parse(START_PATH))),
            storage: Arc::new(MemoryStorage::new()),
            notifier: Arc::new(RecordingNotifier::new()),
            connectivity: Arc::new(StaticConnectivity::new(true)),
        }
    }

    pub fn logged_in(token: &str) -> Self {
        let harness = Self::new();
        harness.session.set_token(Some(token.to_string()));
        harness.storage.set_item("token", token).unwrap();
        harness
    }

    /// Client against `base_url` through the reqwest transport
    pub fn client(&self, base_url: &str) -> HttpClient {
        let collaborators = Collaborators {
            session: self.session.clone(),
            navigator: self.navigator.clone(),
            storage: self.storage.clone(),
            notifier: self.notifier.clone(),
            connectivity: self.connectivity.clone(),
        };
        HttpClient::new(config_for(base_url), collaborators).expect("Failed to create client")
    }
}

pub fn config_for(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        timeout_ms: 12_000,
        post_content_type: FORM_URLENCODED_UTF8.to_string(),
        login_path: "/login".to_string(),
        notification_ms: 1000,
        redirect_delay_ms: 1000,
    }
}

/// Base URL of the admin API mounted on a mock server
pub fn api_base(server: &mockito::ServerGuard) -> String {
    format!("{}/admin/api", server.url())
}
