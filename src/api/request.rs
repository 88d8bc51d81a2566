//! Request descriptors
//!
//! A [`Request`] is the verb, resource path, query parameters and optional
//! JSON body of a single API call. It is built with the constructor for its
//! verb and consumed by [`Client::execute`](super::Client::execute).

use reqwest::Method;
use serde::Serialize;

use super::{Error, Params};

/// A single API call, ready to execute
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    params: Params,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Create a request with no parameters and no body
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
            body: None,
        }
    }

    /// GET `path`
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST `path`
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT `path`
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// DELETE `path`
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add query parameters. Keys already present are overwritten.
    #[must_use]
    pub fn params(mut self, params: Params) -> Self {
        self.params = Params::merge([self.params, params]);
        self
    }

    /// Attach a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, Error> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| Error::validation(format!("encoding request: {e}")))?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// HTTP verb
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Resource path, relative to the API base
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Caller-supplied query parameters (without authentication)
    #[must_use]
    pub const fn query(&self) -> &Params {
        &self.params
    }

    /// Serialized JSON body, if any
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}
