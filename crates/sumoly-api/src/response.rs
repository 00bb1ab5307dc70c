use reqwest::StatusCode;
use reqwest::header::{self, HeaderMap};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Raw response from a management API call: status, headers, body.
///
/// The client never interprets HTTP status codes -- a 404 or a 412 comes
/// back through here exactly like a 200, and deciding what to do with it is
/// the caller's job. [`error_for_status`](Self::error_for_status) converts
/// to a typed error for callers that prefer failing fast.
#[derive(Debug)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self { status, headers, body }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// All response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The `ETag` header, if the server sent one. Feed it back as
    /// `If-Match` for conditional updates.
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(header::ETAG).and_then(|v| v.to_str().ok())
    }

    /// The raw body bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// The body as (lossily decoded) text.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body: self.text(),
        })
    }

    /// `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Convert a non-2xx response into [`Error::RemoteApi`], passing 2xx
    /// responses through unchanged.
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(Error::RemoteApi {
                status: self.status.as_u16(),
                body: self.text(),
            })
        }
    }
}
