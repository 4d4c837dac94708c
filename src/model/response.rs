use crate::error::AppError;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;

/// Completed HTTP exchange as received from the transport
///
/// The adapter never modifies a response: the value handed to the response hook
/// is the value the caller gets back, on both the resolved and the rejected path.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// Status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body
    pub body: Vec<u8>,
    /// Final URL of the request
    pub url: String,
}

impl HttpResponse {
    /// Creates a response with no headers
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
            url: String::new(),
        }
    }

    /// Sets the final URL
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// `true` only for status `200 OK`
    ///
    /// Other 2xx codes are not considered OK by the adapter.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Body as text, invalid UTF-8 replaced
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The `message` field of a JSON error payload, if there is one
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match serde_json::from_slice::<Value>(&self.body).ok()? {
            Value::Object(mut fields) => match fields.remove("message")? {
                Value::String(message) => Some(message),
                Value::Null => None,
                other => Some(other.to_string()),
            },
            _ => None,
        }
    }
}
