/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Prelude
//!
//! Everything needed to build a client and issue requests:
//!
//! ```rust
//! use admin_http::prelude::*;
//!
//! let config = Config::new();
//! let collaborators = Collaborators::in_memory();
//! let client = HttpClient::new(config, collaborators);
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CLIENT AND CONFIGURATION
// ============================================================================

pub use crate::client::{HttpClient, init_shared, shared};
pub use crate::config::Config;
pub use crate::{VERSION, version};

// ============================================================================
// ERRORS AND OUTCOMES
// ============================================================================

pub use crate::error::AppError;
pub use crate::model::outcome::{
    Outcome, Rejection, RequestError, TransportError, TransportErrorKind,
};

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

pub use crate::model::request::{HttpRequest, RequestBody};
pub use crate::model::response::HttpResponse;

// ============================================================================
// HOOKS AND TRANSPORT
// ============================================================================

pub use crate::interceptor::{
    AuthInterceptor, RequestInterceptor, ResponseInterceptor, StatusClass, StatusInterceptor,
};
pub use crate::transport::{ReqwestTransport, Transport};

// ============================================================================
// COLLABORATORS
// ============================================================================

pub use crate::session::{
    Collaborators, Connectivity, FileStorage, HistoryNavigator, LocalStorage, MemorySessionStore,
    MemoryStorage, Navigator, Notification, Notifier, RecordingNotifier, Route, SessionStore,
    StaticConnectivity, TracingNotifier,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
