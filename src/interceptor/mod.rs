/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Hooks run around every transport call.
//!
//! The client runs [`RequestInterceptor::before_send`], hands the request to the
//! transport, then passes whatever the transport produced to
//! [`ResponseInterceptor::on_complete`]. The outcome of the latter is what the
//! caller receives.

/// Session token injection
pub mod auth;
/// Status based side effects
pub mod status;

pub use auth::AuthInterceptor;
pub use status::{StatusClass, StatusInterceptor, notify, redirect_to_login};

use crate::model::outcome::{Outcome, Rejection, TransportError};
use crate::model::request::HttpRequest;
use crate::model::response::HttpResponse;
use async_trait::async_trait;

/// Hook run on every outgoing request
#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    /// Returns the (possibly modified) request, or the rejection to forward
    /// to the caller instead of sending
    async fn before_send(&self, request: HttpRequest) -> Result<HttpRequest, Rejection>;
}

/// Hook run on every completed or failed call
#[async_trait]
pub trait ResponseInterceptor: Send + Sync {
    /// Turns the transport result into the outcome seen by the caller
    async fn on_complete(&self, completion: Result<HttpResponse, TransportError>) -> Outcome;
}
