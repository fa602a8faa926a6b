//! In-process stand-in for the IBGE localidades API.
//!
//! Serves `/api/v1/localidades/estados/{sigla}` and
//! `/api/v1/localidades/distritos/{id}` from fixture data, answering unknown
//! keys with `200 []` the way the live service does.

pub mod fixtures;

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Path prefix the live API mounts its resources under.
pub const BASE_PATH: &str = "/api/v1/localidades";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Regiao {
    pub id: u32,
    pub sigla: String,
    pub nome: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Estado {
    pub id: u32,
    pub sigla: String,
    pub nome: String,
    pub regiao: Regiao,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Microrregiao {
    pub id: u32,
    pub nome: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Municipio {
    pub id: u32,
    pub nome: String,
    pub microrregiao: Microrregiao,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Distrito {
    pub id: u32,
    pub nome: String,
    pub municipio: Municipio,
}

/// Read-only lookup tables keyed the way the routes address them.
pub struct Localidades {
    estados: HashMap<String, Estado>,
    distritos: HashMap<u32, Distrito>,
}

impl Localidades {
    pub fn new(estados: Vec<Estado>, distritos: Vec<Distrito>) -> Self {
        Self {
            estados: estados.into_iter().map(|e| (e.sigla.to_uppercase(), e)).collect(),
            distritos: distritos.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    pub fn estado(&self, sigla: &str) -> Option<&Estado> {
        self.estados.get(&sigla.to_uppercase())
    }

    pub fn distrito(&self, id: u32) -> Option<&Distrito> {
        self.distritos.get(&id)
    }
}

impl Default for Localidades {
    fn default() -> Self {
        Self::new(fixtures::estados(), fixtures::distritos())
    }
}

pub type Db = Arc<Localidades>;

pub fn app() -> Router {
    app_with(Localidades::default())
}

pub fn app_with(localidades: Localidades) -> Router {
    let db: Db = Arc::new(localidades);
    Router::new()
        .route(&format!("{BASE_PATH}/estados/{{sigla}}"), get(get_estado))
        .route(&format!("{BASE_PATH}/distritos/{{id}}"), get(get_distrito))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_estado(State(db): State<Db>, Path(sigla): Path<String>) -> Response {
    match db.estado(&sigla) {
        Some(estado) => Json(estado.clone()).into_response(),
        None => {
            tracing::debug!(%sigla, "unknown state");
            Json(Vec::<Estado>::new()).into_response()
        }
    }
}

async fn get_distrito(State(db): State<Db>, Path(id): Path<u32>) -> Json<Vec<Distrito>> {
    let found: Vec<Distrito> = db.distrito(id).cloned().into_iter().collect();
    if found.is_empty() {
        tracing::debug!(id, "unknown district");
    }
    Json(found)
}
