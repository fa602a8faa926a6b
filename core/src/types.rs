//! Typed views of IBGE payloads.
//!
//! # Design
//! The raw client operations never deserialize; these types back the opt-in
//! `IbgeClient::estado` / `IbgeClient::distrito` helpers. Field order follows
//! the API so that serializing an `Estado` reproduces the service's payload
//! byte for byte. Unknown fields are ignored on input.

use serde::{Deserialize, Serialize};

/// Macro-region a state belongs to (e.g. Sudeste).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Regiao {
    pub id: u32,
    pub sigla: String,
    pub nome: String,
}

/// A federative unit as returned by `/estados/{sigla}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Estado {
    pub id: u32,
    pub sigla: String,
    pub nome: String,
    pub regiao: Regiao,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Municipio {
    pub id: u32,
    pub nome: String,
}

/// An administrative district as returned by `/distritos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Distrito {
    pub id: u32,
    pub nome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipio: Option<Municipio>,
}
