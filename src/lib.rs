/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # admin-http
//!
//! Shared HTTP client for the admin front-end.
//!
//! Every request goes through two hooks wrapped around the transport:
//!
//! - a request hook that attaches the session token as the `Authorization` header
//! - a response hook that resolves on `200 OK`, rejects everything else, and turns
//!   error statuses into side effects (login redirect, session cleanup, notifications,
//!   network reachability flag)
//!
//! The application state the hooks touch (session store, router, local storage,
//! toasts, connectivity) is injected through [`session::Collaborators`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use admin_http::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let collaborators = Collaborators::in_memory();
//! collaborators.session.set_token(Some("secret-token".to_string()));
//!
//! let client = HttpClient::new(Config::new(), collaborators)?;
//! match client.get("/users").await {
//!     Ok(response) => println!("{}", response.text()),
//!     Err(rejection) => eprintln!("request rejected: {rejection}"),
//! }
//! # Ok(())
//! # }
//! ```

/// HTTP client adapter and the process-wide shared instance
pub mod client;
/// Client configuration
pub mod config;
/// Fixed values used across the crate
pub mod constants;
/// Crate level error type
pub mod error;
/// Request and response hooks
pub mod interceptor;
/// Request, response and outcome models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Application collaborators: session store, router, storage, notifications
pub mod session;
/// Transport abstraction and the reqwest implementation
pub mod transport;
/// Utilities: env parsing, logging, ids
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
