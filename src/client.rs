/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::config::Config;
use crate::error::AppError;
use crate::interceptor::{
    AuthInterceptor, RequestInterceptor, ResponseInterceptor, StatusInterceptor,
};
use crate::model::outcome::{Outcome, Rejection};
use crate::model::request::HttpRequest;
use crate::model::response::HttpResponse;
use crate::session::Collaborators;
use crate::transport::{ReqwestTransport, Transport};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

static SHARED: OnceCell<HttpClient> = OnceCell::new();

/// HTTP client for the admin API
///
/// Every request goes through:
/// - the request hook (session token as `Authorization`)
/// - the transport (base URL, 12 second timeout, form encoded POST by default)
/// - the response hook (resolve on `200`, reject otherwise, status driven side effects)
///
/// No request is ever retried.
pub struct HttpClient {
    config: Arc<Config>,
    collaborators: Collaborators,
    transport: Arc<dyn Transport>,
    request_interceptor: Arc<dyn RequestInterceptor>,
    response_interceptor: Arc<dyn ResponseInterceptor>,
}

impl HttpClient {
    /// Creates a client sending through reqwest
    ///
    /// # Arguments
    /// * `config` - Base URL, timeout and side effect timings
    /// * `collaborators` - Session store, router, storage, notifier and connectivity probe
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to use
    /// * `Err(AppError)` - If the transport cannot be built
    pub fn new(config: Config, collaborators: Collaborators) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, collaborators, Arc::new(transport)))
    }

    /// Creates a client over any transport, with the default hooks
    pub fn with_transport(
        config: Config,
        collaborators: Collaborators,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let request_interceptor = Arc::new(AuthInterceptor::new(Arc::clone(&collaborators.session)));
        let response_interceptor = Arc::new(StatusInterceptor::new(collaborators.clone(), &config));

        Self {
            config: Arc::new(config),
            collaborators,
            transport,
            request_interceptor,
            response_interceptor,
        }
    }

    /// Replaces the request hook
    #[must_use]
    pub fn with_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptor = interceptor;
        self
    }

    /// Replaces the response hook
    #[must_use]
    pub fn with_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptor = interceptor;
        self
    }

    /// Client configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Injected collaborators
    #[must_use]
    pub fn collaborators(&self) -> &Collaborators {
        &self.collaborators
    }

    /// Runs `request` through the request hook, the transport and the response hook
    ///
    /// A rejection from the request hook is returned as is and nothing is sent.
    pub async fn request(&self, request: HttpRequest) -> Outcome {
        let id = request.id.clone();
        let request = match self.request_interceptor.before_send(request).await {
            Ok(request) => request,
            Err(rejection) => {
                warn!("[{id}] Request not sent: {rejection}");
                return Outcome::Rejected(rejection);
            }
        };

        let completion = self.transport.send(request).await;
        let outcome = self.response_interceptor.on_complete(completion).await;
        match &outcome {
            Outcome::Resolved(response) => debug!("[{id}] Resolved ({})", response.status),
            Outcome::Rejected(rejection) => debug!("[{id}] Rejected: {rejection}"),
            Outcome::Suppressed => debug!("[{id}] Suppressed"),
        }
        outcome
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str) -> Result<HttpResponse, Rejection> {
        self.request(HttpRequest::get(path)).await.into_result()
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<HttpResponse, Rejection> {
        let request = query
            .iter()
            .fold(HttpRequest::get(path), |request, (key, value)| {
                request.with_query(*key, *value)
            });
        self.request(request).await.into_result()
    }

    /// Makes a POST request with a url-encoded form body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &B,
    ) -> Result<HttpResponse, Rejection> {
        let request = HttpRequest::post(path)
            .with_form(form)
            .map_err(Rejection::Request)?;
        self.request(request).await.into_result()
    }

    /// Makes a POST request with a JSON body
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, Rejection> {
        let request = HttpRequest::post(path)
            .with_json(body)
            .map_err(Rejection::Request)?;
        self.request(request).await.into_result()
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpResponse, Rejection> {
        let request = HttpRequest::put(path)
            .with_json(body)
            .map_err(Rejection::Request)?;
        self.request(request).await.into_result()
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, Rejection> {
        self.request(HttpRequest::delete(path)).await.into_result()
    }
}

/// Installs the process-wide client
///
/// # Returns
/// * `Ok(&HttpClient)` - The installed client
/// * `Err(AppError::AlreadyInitialized)` - A client was installed before; it is kept
pub fn init_shared(client: HttpClient) -> Result<&'static HttpClient, AppError> {
    SHARED
        .set(client)
        .map_err(|_| AppError::AlreadyInitialized)?;
    shared()
}

/// The process-wide client installed by [`init_shared`]
pub fn shared() -> Result<&'static HttpClient, AppError> {
    SHARED.get().ok_or(AppError::NotInitialized)
}
