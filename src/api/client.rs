//! Authenticated HTTP client for the Trello API

use std::time::Duration;

use log::debug;
use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use super::{Credentials, Error, Params, Request};

/// Base URL of the Trello REST API
pub const API_BASE_URL: &str = "https://api.trello.com/1";

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const JSON_CONTENT_TYPE: &str = "application/json";

/// Blocking Trello API client
///
/// Holds the credentials for the lifetime of the invocation and adds them
/// to every request. Calls are never retried.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    credentials: Credentials,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a client for the public Trello API
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_base_url(credentials, API_BASE_URL)
    }

    /// Create a client for another base URL (a proxy or a test server)
    pub fn with_base_url(credentials: Credentials, base_url: &str) -> Result<Self, Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            http,
        })
    }

    /// The base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for a request: base, path, then the authentication
    /// parameters merged with the request's own parameters.
    pub fn url(&self, request: &Request) -> Result<Url, Error> {
        let query = Params::merge([self.credentials.params(), request.query().clone()]);
        Url::parse_with_params(&format!("{}{}", self.base_url, request.path()), query.iter())
            .map_err(|e| Error::validation(format!("invalid request URL: {e}")))
    }

    /// Execute a request and return the raw response body
    pub fn execute(&self, request: &Request) -> Result<Vec<u8>, Error> {
        let url = self.url(request)?;
        debug!("{} {}", request.method(), request.path());

        let mut builder = self
            .http
            .request(request.method().clone(), url)
            .header(ACCEPT, JSON_CONTENT_TYPE);
        if let Some(body) = request.body() {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body.to_vec());
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        debug!("{} {} -> {status} ({} bytes)", request.method(), request.path(), body.len());

        if status >= 400 {
            return Err(Error::Api {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body.to_vec())
    }

    /// Execute a request and decode the response into `T`
    pub fn send<T: DeserializeOwned>(&self, request: &Request) -> Result<T, Error> {
        let body = self.execute(request)?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Execute a request and ignore the response body
    pub fn send_unit(&self, request: &Request) -> Result<(), Error> {
        self.execute(request).map(|_| ())
    }
}
