//! HTTP helper shared by every Comercia service client

use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, RequestBuilder, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

use crate::auth::SessionHandle;
use crate::error::Error;
use crate::response::ApiResponse;

/// Helper for building and executing HTTP requests
pub struct FetchBuilder<'a> {
    client: &'a Client,
    url: String,
    method: Method,
    headers: HeaderMap,
    query_params: Option<HashMap<String, String>>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
    session: Option<SessionHandle>,
}

impl<'a> FetchBuilder<'a> {
    /// Create a new FetchBuilder
    pub fn new(client: &'a Client, url: &str, method: Method) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        Self {
            client,
            url: url.to_string(),
            method,
            headers,
            query_params: None,
            body: None,
            timeout: None,
            session: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            reqwest::header::HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Add bearer token authentication to the request
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Add query parameters to the request
    pub fn query(mut self, params: HashMap<String, String>) -> Self {
        self.query_params = Some(params);
        self
    }

    /// Set a per-request timeout
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Attach the shared session. A held token is sent as a bearer header
    /// and a 401 response discards the session before surfacing the error.
    pub(crate) fn with_session(mut self, session: &SessionHandle) -> Self {
        self.session = Some(session.clone());
        self
    }

    /// Add a JSON body to the request
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let json = serde_json::to_vec(body)?;
        self.body = Some(json);
        Ok(self)
    }

    /// Build the request
    fn build(&self) -> Result<RequestBuilder, Error> {
        let mut url = Url::parse(&self.url)?;

        // Add query parameters if present
        if let Some(params) = &self.query_params {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params {
                query_pairs.append_pair(key, value);
            }
        }

        let mut req = self.client.request(self.method.clone(), url.as_str());
        req = req.headers(self.headers.clone());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        // The login and register calls carry no session; everything else
        // attaches the held token unless one was set explicitly.
        if !self.headers.contains_key(AUTHORIZATION) {
            if let Some(token) = self.session.as_ref().and_then(|s| s.bearer_token()) {
                req = req.bearer_auth(token);
            }
        }

        if let Some(body) = &self.body {
            req = req.body(body.clone());
        }

        Ok(req)
    }

    /// Execute the request and unwrap the `{success, message, data, timestamp}`
    /// envelope, returning the `data` payload
    pub async fn execute_api<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let envelope = self.send_envelope::<T>().await?;
        envelope
            .data
            .ok_or_else(|| Error::unexpected("successful envelope carried no data"))
    }

    /// Execute the request for operations whose envelope carries no payload
    pub async fn execute_empty(&self) -> Result<(), Error> {
        self.send_envelope::<serde_json::Value>().await.map(|_| ())
    }

    async fn send_envelope<T: DeserializeOwned>(&self) -> Result<ApiResponse<T>, Error> {
        let req = self.build()?;
        debug!("{} {}", self.method, self.url);

        let response = req.send().await?;
        let status = response.status();
        debug!("{} {} -> {}", self.method, self.url, status);

        if status == StatusCode::UNAUTHORIZED {
            if let Some(session) = &self.session {
                session.invalidate();
            }
            return Err(Error::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }

        let text = response.text().await?;
        if !status.is_success() {
            let message = match ApiResponse::<serde_json::Value>::from_json(&text) {
                Ok(envelope) if !envelope.message.is_empty() => envelope.message,
                _ if !text.is_empty() => text,
                _ => status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
            return Err(Error::api(status.as_u16(), message));
        }

        let envelope: ApiResponse<T> = ApiResponse::from_json(&text)?;
        if !envelope.success {
            return Err(Error::api(status.as_u16(), envelope.message));
        }
        Ok(envelope)
    }
}

/// Helper for creating HTTP requests
pub struct Fetch;

impl Fetch {
    /// Create a GET request
    pub fn get<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::GET)
    }

    /// Create a POST request
    pub fn post<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::POST)
    }

    /// Create a PUT request
    pub fn put<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::PUT)
    }

    /// Create a DELETE request
    pub fn delete<'a>(client: &'a Client, url: &str) -> FetchBuilder<'a> {
        FetchBuilder::new(client, url, Method::DELETE)
    }
}
