/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// reqwest backed transport
pub mod http;

pub use http::ReqwestTransport;

use crate::model::outcome::TransportError;
use crate::model::request::HttpRequest;
use crate::model::response::HttpResponse;
use async_trait::async_trait;

/// Sends a request and returns the response, whatever its status
///
/// Only a call that produced no response at all is an `Err`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request`
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
