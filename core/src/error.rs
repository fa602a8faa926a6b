//! Error types for the IBGE client.
//!
//! # Design
//! The raw `consultar_*` and `status_*` operations only ever fail with
//! `Transport`: the body is handed back verbatim whatever the status. The
//! remaining variants are produced by the typed helpers (`estado`, `distrito`)
//! and by configuration validation.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by `IbgeClient`.
#[derive(Debug, Error)]
pub enum IbgeError {
    /// The request could not be performed or its body could not be read.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered with an empty list, or 404.
    #[error("resource not found")]
    NotFound,

    /// The API returned a status other than 200 or 404.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The client configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}
