/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::outcome::{TransportError, TransportErrorKind};
use crate::model::request::{HttpRequest, RequestBody};
use crate::model::response::HttpResponse;
use crate::transport::Transport;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method};
use tracing::debug;

/// [`Transport`] over a shared `reqwest::Client`
///
/// The client is built once with the configured timeout; relative request
/// paths are joined to the configured base URL. POST requests that carry a
/// body but no `Content-Type` of their own get the configured default, except
/// JSON bodies which keep `application/json`. A POST without a body is sent
/// without `Content-Type`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    post_content_type: HeaderValue,
}

impl ReqwestTransport {
    /// Builds the transport from `config`
    ///
    /// # Returns
    /// * `Ok(ReqwestTransport)` - ready to send
    /// * `Err(AppError)` - the HTTP client could not be built or the default
    ///   content type is not a valid header value
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let post_content_type = HeaderValue::from_str(&config.post_content_type).map_err(|e| {
            AppError::InvalidInput(format!(
                "post content type '{}': {e}",
                config.post_content_type
            ))
        })?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            post_content_type,
        })
    }

    /// Base URL relative paths are joined to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build(&self, request: HttpRequest) -> Result<reqwest::Request, TransportError> {
        let url = request.url(&self.base_url);
        let explicit_content_type = request.headers.contains_key(CONTENT_TYPE);
        let is_post = request.method == Method::POST;

        let mut builder = self
            .client
            .request(request.method, &url)
            .headers(request.headers);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let has_body = request.body.is_some();
        let keeps_own_type = matches!(request.body, Some(RequestBody::Json(_)));
        builder = match request.body {
            Some(RequestBody::Form(pairs)) => builder.form(&pairs),
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::Bytes(bytes)) => builder.body(bytes),
            None => builder,
        };

        let mut built = builder.build().map_err(TransportError::from)?;
        if is_post && has_body && !explicit_content_type && !keeps_own_type {
            built
                .headers_mut()
                .insert(CONTENT_TYPE, self.post_content_type.clone());
        }
        Ok(built)
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let id = request.id.clone();
        let built = self.build(request)?;
        debug!("[{id}] {} {}", built.method(), built.url());

        let response = self.client.execute(built).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().to_string();
        debug!("[{id}] Response status: {status}");

        let body = response.bytes().await.map_err(|e| {
            TransportError::new(TransportErrorKind::Body, format!("reading body: {e}"))
                .with_source(e)
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
            url,
        })
    }
}
