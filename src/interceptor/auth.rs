use crate::interceptor::RequestInterceptor;
use crate::model::outcome::{Rejection, RequestError};
use crate::model::request::HttpRequest;
use crate::session::SessionStore;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::sync::Arc;
use tracing::{trace, warn};

/// Attaches the session token to outgoing requests
///
/// The token is sent verbatim as the `Authorization` header. Its validity is
/// the server's business: no expiry check happens here, an expired token is
/// answered with a 403 that the response hook handles.
pub struct AuthInterceptor {
    session: Arc<dyn SessionStore>,
}

impl AuthInterceptor {
    /// Creates the hook reading tokens from `session`
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl RequestInterceptor for AuthInterceptor {
    async fn before_send(&self, mut request: HttpRequest) -> Result<HttpRequest, Rejection> {
        let Some(token) = self.session.token().filter(|token| !token.is_empty()) else {
            trace!("[{}] no session token, sending anonymously", request.id);
            return Ok(request);
        };

        let mut value = HeaderValue::from_str(&token).map_err(|e| {
            warn!("[{}] session token is not a valid header value", request.id);
            Rejection::Request(RequestError::InvalidHeader(format!("authorization: {e}")))
        })?;
        value.set_sensitive(true);
        request.headers.insert(AUTHORIZATION, value);
        Ok(request)
    }
}
