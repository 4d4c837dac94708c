/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Application collaborators the hooks act on.
//!
//! The adapter owns none of this state: the session store, router, local storage,
//! toast display and connectivity probe belong to the host application and are
//! injected through [`Collaborators`].

/// Connectivity probe
pub mod connectivity;
/// Router abstraction
pub mod navigator;
/// Toast display
pub mod notifier;
/// Persistent key/value storage
pub mod storage;
/// Session token and network flag
pub mod store;

pub use connectivity::{Connectivity, StaticConnectivity};
pub use navigator::{HistoryNavigator, Navigator, Route};
pub use notifier::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
pub use store::{MemorySessionStore, SessionState, SessionStore};

use std::sync::Arc;

/// Everything the hooks read from or act on
#[derive(Clone)]
pub struct Collaborators {
    /// Session token and network reachability flag
    pub session: Arc<dyn SessionStore>,
    /// Router
    pub navigator: Arc<dyn Navigator>,
    /// Persistent storage holding the token
    pub storage: Arc<dyn LocalStorage>,
    /// Toast display
    pub notifier: Arc<dyn Notifier>,
    /// Connectivity probe
    pub connectivity: Arc<dyn Connectivity>,
}

impl Collaborators {
    /// In-memory collaborators: empty session, router at `/`, logging notifier, online
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            session: Arc::new(MemorySessionStore::new()),
            navigator: Arc::new(HistoryNavigator::default()),
            storage: Arc::new(MemoryStorage::new()),
            notifier: Arc::new(TracingNotifier),
            connectivity: Arc::new(StaticConnectivity::default()),
        }
    }
}
