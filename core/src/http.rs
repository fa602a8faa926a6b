//! HTTP request and response types exchanged with a [`Transport`].
//!
//! # Design
//! Requests and responses are plain owned data. `IbgeClient` builds an
//! `HttpRequest`, hands it to the injected transport and receives an
//! `HttpResponse` back, so the client itself never touches a socket and tests
//! can substitute a fixture transport.
//!
//! [`Transport`]: crate::transport::Transport

/// HTTP method for a request. The IBGE localidades API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `IbgeClient::build_*` methods and executed by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// `body` is the response stream read to the end as UTF-8 text, untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
