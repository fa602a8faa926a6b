//! The seam between `IbgeClient` and the network.
//!
//! # Design
//! `Transport` has a single required capability: perform one request and hand
//! back the response as data. `UreqTransport` is the production
//! implementation; tests implement the trait with canned responses so no
//! network access is needed.
//!
//! Status codes are never treated as failures here. A `TransportError` means
//! the exchange itself broke: the host could not be resolved, the connection
//! was refused, or the body stream could not be read.

use std::sync::Arc;

use thiserror::Error;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// I/O failure while performing a request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or no response headers arrived.
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    /// Headers arrived but the body stream could not be read.
    #[error("reading response body from {url} failed: {message}")]
    Body { url: String, message: String },
}

/// Performs HTTP requests on behalf of `IbgeClient`.
pub trait Transport {
    /// Execute `request` and return the full response, body included.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;

    /// Execute `request` and return only the status code.
    ///
    /// Implementations that can skip reading the body should override this.
    fn status(&self, request: &HttpRequest) -> Result<u16, TransportError> {
        self.execute(request).map(|response| response.status)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }

    fn status(&self, request: &HttpRequest) -> Result<u16, TransportError> {
        (**self).status(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }

    fn status(&self, request: &HttpRequest) -> Result<u16, TransportError> {
        (**self).status(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }

    fn status(&self, request: &HttpRequest) -> Result<u16, TransportError> {
        (**self).status(request)
    }
}

/// Blocking transport backed by a `ureq::Agent`.
///
/// The agent is configured so 4xx/5xx responses come back as data rather than
/// `Err`, leaving status interpretation to the caller. Cloning shares the
/// agent's connection pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl std::fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    fn send(&self, request: &HttpRequest) -> Result<ureq::http::Response<ureq::Body>, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(&request.url),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder.call().map_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "IBGE request failed");
            TransportError::Request {
                url: request.url.clone(),
                message: e.to_string(),
            }
        })
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut response = self.send(request)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(|e| {
            tracing::warn!(url = %request.url, error = %e, "reading IBGE response body failed");
            TransportError::Body {
                url: request.url.clone(),
                message: e.to_string(),
            }
        })?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn status(&self, request: &HttpRequest) -> Result<u16, TransportError> {
        // Dropping the response releases the connection without reading the body.
        self.send(request).map(|response| response.status().as_u16())
    }
}
