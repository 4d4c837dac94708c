use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Shared application state read and written by the hooks
///
/// Holds the session token and the network reachability flag the rest of the
/// application renders (for instance an "offline" banner).
pub trait SessionStore: Send + Sync {
    /// Current session token, if any
    fn token(&self) -> Option<String>;

    /// Sets or clears the session token
    fn set_token(&self, token: Option<String>);

    /// Whether the network is believed to be reachable
    fn network_reachable(&self) -> bool;

    /// Updates the network reachability flag
    fn set_network_reachable(&self, reachable: bool);
}

/// Snapshot of a [`MemorySessionStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Session token
    pub token: Option<String>,
    /// Network reachability flag
    pub network_reachable: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            token: None,
            network_reachable: true,
        }
    }
}

/// In-process [`SessionStore`]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    state: RwLock<SessionState>,
}

impl MemorySessionStore {
    /// Creates an empty store (no token, network reachable)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            state: RwLock::new(SessionState {
                token: Some(token.into()),
                ..SessionState::default()
            }),
        }
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    fn set_token(&self, token: Option<String>) {
        debug!("Session token {}", if token.is_some() { "set" } else { "cleared" });
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .token = token;
    }

    fn network_reachable(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .network_reachable
    }

    fn set_network_reachable(&self, reachable: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .network_reachable = reachable;
    }
}
