/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Outgoing request description.
//!
//! `HttpRequest` is the mutable request config handed to the request hook
//! before the transport sends it.

use crate::model::outcome::RequestError;
use crate::utils::id::request_id;
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Key/value pairs sent url-encoded
    Form(Vec<(String, String)>),
    /// JSON document
    Json(Value),
    /// Plain text
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
}

/// Outgoing HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Correlation id used in the logs
    pub id: String,
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, or an absolute `http(s)://` URL
    pub path: String,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// Request headers
    pub headers: HeaderMap,
    /// Optional body
    pub body: Option<RequestBody>,
    /// Per-request timeout overriding the client default
    pub timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a request without headers or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            id: request_id(),
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    /// GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets a header, replacing any previous value
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Appends a query pair
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Overrides the client timeout for this request
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a url-encoded form body from any value serializing to a flat object
    ///
    /// Strings are sent as-is, numbers and booleans in their JSON spelling, `null`
    /// fields are skipped. Nested arrays or objects cannot be form encoded.
    pub fn with_form<T: Serialize + ?Sized>(mut self, form: &T) -> Result<Self, RequestError> {
        let value =
            serde_json::to_value(form).map_err(|e| RequestError::InvalidBody(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(RequestError::InvalidBody(
                "form body must serialize to an object".to_string(),
            ));
        };

        let mut pairs = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            match value {
                Value::Null => continue,
                Value::String(s) => pairs.push((key, s)),
                Value::Bool(_) | Value::Number(_) => pairs.push((key, value.to_string())),
                Value::Array(_) | Value::Object(_) => {
                    return Err(RequestError::InvalidBody(format!(
                        "form field '{key}' is not a scalar"
                    )));
                }
            }
        }
        self.body = Some(RequestBody::Form(pairs));
        Ok(self)
    }

    /// Sets a JSON body
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, RequestError> {
        let value =
            serde_json::to_value(body).map_err(|e| RequestError::InvalidBody(e.to_string()))?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    /// Sets a plain text body
    #[must_use]
    pub fn with_text(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Text(body.into()));
        self
    }

    /// Value of the `Authorization` header, if set and valid UTF-8
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
    }

    /// Resolves the request path against `base_url`
    ///
    /// Absolute URLs are returned untouched; relative paths are joined with
    /// exactly one `/` between base and path.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        if self.path.starts_with("http://") || self.path.starts_with("https://") {
            return self.path.clone();
        }
        let base = base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}
