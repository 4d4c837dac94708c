use std::sync::atomic::{AtomicBool, Ordering};

/// Reports whether the host currently has network connectivity
pub trait Connectivity: Send + Sync {
    /// `true` when the host believes it is online
    fn is_online(&self) -> bool;
}

/// [`Connectivity`] backed by a flag the host updates
#[derive(Debug)]
pub struct StaticConnectivity {
    online: AtomicBool,
}

impl Default for StaticConnectivity {
    fn default() -> Self {
        Self::new(true)
    }
}

impl StaticConnectivity {
    /// Creates the flag with an initial state
    #[must_use]
    pub fn new(online: bool) -> Self {
        Self {
            online: AtomicBool::new(online),
        }
    }

    /// Updates the flag
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }
}

impl Connectivity for StaticConnectivity {
    fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }
}
