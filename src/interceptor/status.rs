/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Response hook: resolution rule and status driven side effects.
//!
//! | Transport result | Side effect | Outcome |
//! |---|---|---|
//! | `200` | none | resolved |
//! | other 2xx | none | rejected |
//! | `401` | login redirect | rejected |
//! | `403` | toast, token removed from storage and store, delayed login redirect | rejected |
//! | `404` | toast | rejected |
//! | other status | error log | rejected |
//! | no response, offline | network flag cleared | suppressed |
//! | no response, online | none | rejected |

use crate::config::Config;
use crate::constants::{
    REDIRECT_QUERY_KEY, RESOURCE_NOT_FOUND_MESSAGE, SESSION_EXPIRED_MESSAGE, TOKEN_STORAGE_KEY,
};
use crate::interceptor::ResponseInterceptor;
use crate::model::outcome::{Outcome, Rejection, TransportError};
use crate::model::response::HttpResponse;
use crate::session::{Collaborators, Navigator, Notification, Notifier, Route};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// How an error status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 401: the user must log in
    LoginRequired,
    /// 403: the session token expired
    SessionExpired,
    /// 404: the resource does not exist
    NotFound,
    /// Anything else: logged only
    Other,
}

impl StatusClass {
    /// Classifies `status`
    #[must_use]
    pub fn of(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => StatusClass::LoginRequired,
            StatusCode::FORBIDDEN => StatusClass::SessionExpired,
            StatusCode::NOT_FOUND => StatusClass::NotFound,
            _ => StatusClass::Other,
        }
    }
}

/// Replaces the current route with the login page, passing the current full
/// path as the `redirect` query parameter
pub fn redirect_to_login(navigator: &dyn Navigator, login_path: &str) {
    let current = navigator.current_full_path();
    info!("Redirecting to {login_path} (return to {current})");
    navigator.replace(Route::new(login_path).with_query(REDIRECT_QUERY_KEY, current));
}

/// Shows a click-blocking toast for `duration`
pub fn notify(notifier: &dyn Notifier, message: &str, duration: Duration) {
    notifier.show(Notification {
        message: message.to_string(),
        duration,
        forbid_click: true,
    });
}

/// Default response hook
pub struct StatusInterceptor {
    collaborators: Collaborators,
    login_path: String,
    notification_duration: Duration,
    redirect_delay: Duration,
}

impl StatusInterceptor {
    /// Creates the hook acting on `collaborators` with the timings and login
    /// route of `config`
    pub fn new(collaborators: Collaborators, config: &Config) -> Self {
        Self {
            collaborators,
            login_path: config.login_path.clone(),
            notification_duration: config.notification_duration(),
            redirect_delay: config.redirect_delay(),
        }
    }

    /// Runs the side effect of an error status
    ///
    /// For a `403` the login redirect is spawned on the current tokio runtime
    /// and runs after the configured delay; a runtime shut down before then
    /// drops it. Called outside any tokio runtime, the redirect happens
    /// before this returns.
    pub fn handle_status(&self, response: &HttpResponse) {
        match StatusClass::of(response.status) {
            StatusClass::LoginRequired => self.redirect_to_login(),
            StatusClass::SessionExpired => self.expire_session(),
            StatusClass::NotFound => self.notify(RESOURCE_NOT_FOUND_MESSAGE),
            StatusClass::Other => {
                let detail = response
                    .message()
                    .unwrap_or_else(|| response.text().into_owned());
                error!(
                    "Request to {} failed with status {}: {}",
                    response.url, response.status, detail
                );
            }
        }
    }

    /// Login redirect through the injected router
    pub fn redirect_to_login(&self) {
        redirect_to_login(self.collaborators.navigator.as_ref(), &self.login_path);
    }

    /// Toast through the injected notifier
    pub fn notify(&self, message: &str) {
        notify(
            self.collaborators.notifier.as_ref(),
            message,
            self.notification_duration,
        );
    }

    // The token is gone from both places before this returns; only the
    // redirect is deferred.
    fn expire_session(&self) {
        self.notify(SESSION_EXPIRED_MESSAGE);
        if let Err(e) = self.collaborators.storage.remove_item(TOKEN_STORAGE_KEY) {
            warn!("Failed to remove '{TOKEN_STORAGE_KEY}' from local storage: {e}");
        }
        self.collaborators.session.set_token(None);

        let navigator = Arc::clone(&self.collaborators.navigator);
        let login_path = self.login_path.clone();
        let delay = self.redirect_delay;
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    redirect_to_login(navigator.as_ref(), &login_path);
                });
            }
            Err(_) => {
                warn!("No tokio runtime for the delayed login redirect, redirecting now");
                redirect_to_login(navigator.as_ref(), &login_path);
            }
        }
    }

    fn handle_transport_error(&self, error: TransportError) -> Outcome {
        if self.collaborators.connectivity.is_online() {
            warn!("Request failed without a response: {error}");
            return Outcome::Rejected(Rejection::Transport(error));
        }
        warn!("Network unreachable: {error}");
        self.collaborators.session.set_network_reachable(false);
        Outcome::Suppressed
    }
}

#[async_trait]
impl ResponseInterceptor for StatusInterceptor {
    async fn on_complete(&self, completion: Result<HttpResponse, TransportError>) -> Outcome {
        match completion {
            // Exactly 200: other 2xx codes reject without side effects.
            Ok(response) if response.status.is_success() => {
                if response.is_ok() {
                    Outcome::Resolved(response)
                } else {
                    Outcome::Rejected(Rejection::Status(response))
                }
            }
            Ok(response) => {
                self.handle_status(&response);
                Outcome::Rejected(Rejection::Status(response))
            }
            Err(error) => self.handle_transport_error(error),
        }
    }
}
