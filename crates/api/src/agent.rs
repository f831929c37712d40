// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The HTTP collaborator.
//!
//! Transport, serialization of the wire format and header handling belong
//! to the implementor. Every failure, including a dropped connection, is
//! reported as a [`RequestError`]; status `0` means no response arrived.

use bookit::RequestError;
use bookit_domain::UploadedFile;
use serde_json::Value;
use std::future::Future;

/// HTTP method of a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl Method {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Performs requests against the booking backend.
///
/// Paths are relative to the backend base URL and may carry a query
/// string. Bodies and responses are JSON; an empty response body is
/// reported as `Value::Null`.
pub trait Agent: Send + Sync + 'static {
    /// Sends a `GET`.
    fn get(&self, path: &str) -> impl Future<Output = Result<Value, RequestError>> + Send;

    /// Sends a `POST` with a JSON body.
    fn post(&self, path: &str, body: Value)
    -> impl Future<Output = Result<Value, RequestError>> + Send;

    /// Sends a `PUT` with a JSON body.
    fn put(&self, path: &str, body: Value)
    -> impl Future<Output = Result<Value, RequestError>> + Send;

    /// Sends a `DELETE`.
    fn delete(&self, path: &str) -> impl Future<Output = Result<Value, RequestError>> + Send;

    /// Uploads a file and returns its stored location.
    fn upload(
        &self,
        file: FileUpload,
    ) -> impl Future<Output = Result<UploadedFile, RequestError>> + Send;

    /// Sets or clears the bearer token sent with every request.
    fn authorize(&self, token: Option<&str>);

    /// Dispatches on `method`. `body` is ignored for `GET` and `DELETE`.
    fn send(
        &self,
        method: Method,
        path: &str,
        body: Value,
    ) -> impl Future<Output = Result<Value, RequestError>> + Send {
        async move {
            match method {
                Method::Get => self.get(path).await,
                Method::Post => self.post(path, body).await,
                Method::Put => self.put(path, body).await,
                Method::Delete => self.delete(path).await,
            }
        }
    }
}
