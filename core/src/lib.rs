//! Blocking client for the IBGE localidades REST API.
//!
//! # Overview
//! Queries `/estados/{sigla}` and `/distritos/{id}` and hands the response
//! body back as text, or reports the HTTP status of the same request.
//!
//! # Design
//! - `IbgeClient` is stateless; it holds only `base_url` and a transport.
//! - The network sits behind the `Transport` trait so tests can substitute a
//!   canned response. `UreqTransport` is the production implementation.
//! - Bodies are returned verbatim. Typed decoding (`estado`, `distrito`) is
//!   opt-in and never applied on the raw path.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::IbgeClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::IbgeError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{Transport, TransportError, UreqTransport};
pub use types::{Distrito, Estado, Municipio, Regiao};
