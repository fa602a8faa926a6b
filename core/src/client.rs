//! Blocking client for the IBGE localidades endpoints.
//!
//! # Design
//! `IbgeClient` holds a normalized `base_url` and an injected `Transport`; it
//! carries no mutable state between calls. Each query is split into a
//! `build_*` method that produces the `HttpRequest` and an operation that
//! runs it through the transport. The content operations return the body
//! verbatim, whatever the status, and the `status_*` operations return only
//! the status code.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::error::IbgeError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{Distrito, Estado};

/// Client for `/estados/{sigla}` and `/distritos/{id}`.
#[derive(Debug, Clone)]
pub struct IbgeClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl IbgeClient<UreqTransport> {
    /// Client for `base_url` using the blocking ureq transport.
    pub fn with_default_transport(base_url: &str) -> Self {
        Self::new(base_url, UreqTransport::new())
    }
}

impl Default for IbgeClient<UreqTransport> {
    fn default() -> Self {
        Self::with_default_transport(DEFAULT_BASE_URL)
    }
}

impl<T: Transport> IbgeClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Validate `config` and build a client from it.
    pub fn from_config(config: &ClientConfig, transport: T) -> Result<Self, IbgeError> {
        config.validate()?;
        Ok(Self::new(&config.base_url, transport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_consultar_estado(&self, sigla: &str) -> HttpRequest {
        get(format!(
            "{}/estados/{}",
            self.base_url,
            urlencoding::encode(sigla)
        ))
    }

    pub fn build_consultar_distrito(&self, identificador: u32) -> HttpRequest {
        get(format!("{}/distritos/{identificador}", self.base_url))
    }

    /// Fetch the state identified by `sigla` and return the body unmodified.
    pub fn consultar_estado(&self, sigla: &str) -> Result<String, IbgeError> {
        let response = self.execute(&self.build_consultar_estado(sigla))?;
        Ok(response.body)
    }

    /// Fetch the district `identificador` and return the body unmodified.
    pub fn consultar_distrito(&self, identificador: u32) -> Result<String, IbgeError> {
        let response = self.execute(&self.build_consultar_distrito(identificador))?;
        Ok(response.body)
    }

    /// HTTP status the states endpoint answers for `sigla`.
    pub fn status_estado(&self, sigla: &str) -> Result<u16, IbgeError> {
        self.status(&self.build_consultar_estado(sigla))
    }

    /// HTTP status the districts endpoint answers for `identificador`.
    pub fn status_distrito(&self, identificador: u32) -> Result<u16, IbgeError> {
        self.status(&self.build_consultar_distrito(identificador))
    }

    /// Fetch and decode a state.
    ///
    /// The live API answers unknown codes with `200 []`, which maps to
    /// `IbgeError::NotFound`.
    pub fn estado(&self, sigla: &str) -> Result<Estado, IbgeError> {
        let response = self.execute(&self.build_consultar_estado(sigla))?;
        decode_single(response)
    }

    /// Fetch and decode a district. The API wraps it in a one-element array.
    pub fn distrito(&self, identificador: u32) -> Result<Distrito, IbgeError> {
        let response = self.execute(&self.build_consultar_distrito(identificador))?;
        decode_single(response)
    }

    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, IbgeError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "querying IBGE");
        let response = self.transport.execute(request)?;
        tracing::debug!(
            url = %request.url,
            status = response.status,
            bytes = response.body.len(),
            "IBGE response received"
        );
        Ok(response)
    }

    fn status(&self, request: &HttpRequest) -> Result<u16, IbgeError> {
        tracing::debug!(method = request.method.as_str(), url = %request.url, "probing IBGE status");
        let status = self.transport.status(request)?;
        tracing::debug!(url = %request.url, status, "IBGE status received");
        Ok(status)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

/// Payloads come either as a bare object or wrapped in an array.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<V> {
    One(V),
    Many(Vec<V>),
}

fn decode_single<V: DeserializeOwned>(response: HttpResponse) -> Result<V, IbgeError> {
    check_status(&response)?;
    let decoded: OneOrMany<V> = serde_json::from_str(&response.body)
        .map_err(|e| IbgeError::Deserialization(e.to_string()))?;
    match decoded {
        OneOrMany::One(value) => Ok(value),
        OneOrMany::Many(values) => values.into_iter().next().ok_or(IbgeError::NotFound),
    }
}

/// Map non-200 status codes to the appropriate `IbgeError` variant.
fn check_status(response: &HttpResponse) -> Result<(), IbgeError> {
    match response.status {
        200 => Ok(()),
        404 => Err(IbgeError::NotFound),
        status => Err(IbgeError::HttpStatus {
            status,
            body: response.body.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::transport::TransportError;

    const JSON_RESPONSE: &str = r#"{"id":33,"sigla":"RJ","nome":"Rio de Janeiro","regiao":{"id":3,"sigla":"SE","nome":"Sudeste"}}"#;

    /// Answers every request with the same canned response and records the
    /// URLs it was asked for.
    struct FixtureTransport {
        status: u16,
        body: String,
        seen: Mutex<Vec<String>>,
    }

    impl FixtureTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Transport for FixtureTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.seen.lock().unwrap().push(request.url.clone());
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.clone(),
            })
        }
    }

    #[derive(Debug)]
    struct BrokenTransport;

    impl Transport for BrokenTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Request {
                url: request.url.clone(),
                message: "connection refused".to_string(),
            })
        }
    }

    fn client(transport: &FixtureTransport) -> IbgeClient<&FixtureTransport> {
        IbgeClient::new(DEFAULT_BASE_URL, transport)
    }

    #[test]
    fn build_consultar_estado_produces_correct_request() {
        let transport = FixtureTransport::new(200, "");
        let req = client(&transport).build_consultar_estado("SP");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP"
        );
        assert_eq!(
            req.headers,
            vec![("accept".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_consultar_distrito_produces_correct_request() {
        let transport = FixtureTransport::new(200, "");
        let req = client(&transport).build_consultar_distrito(520005005);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "https://servicodados.ibge.gov.br/api/v1/localidades/distritos/520005005"
        );
    }

    #[test]
    fn sigla_cannot_escape_its_path_segment() {
        let transport = FixtureTransport::new(200, "");
        let req = client(&transport).build_consultar_estado("../distritos/1");
        assert_eq!(
            req.url,
            "https://servicodados.ibge.gov.br/api/v1/localidades/estados/..%2Fdistritos%2F1"
        );
    }

    #[test]
    fn sigla_case_is_preserved() {
        let transport = FixtureTransport::new(200, "");
        let req = client(&transport).build_consultar_estado("rj");
        assert!(req.url.ends_with("/estados/rj"));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let transport = FixtureTransport::new(200, "");
        let c = IbgeClient::new("http://localhost:3000/api/v1/localidades//", &transport);
        assert_eq!(c.base_url(), "http://localhost:3000/api/v1/localidades");
        assert_eq!(
            c.build_consultar_distrito(1).url,
            "http://localhost:3000/api/v1/localidades/distritos/1"
        );
    }

    #[test]
    fn consultar_estado_returns_body_verbatim() {
        let transport = FixtureTransport::new(200, JSON_RESPONSE);
        let resposta = client(&transport).consultar_estado("RJ").unwrap();
        assert_eq!(resposta, JSON_RESPONSE);
        assert_eq!(
            transport.seen(),
            vec!["https://servicodados.ibge.gov.br/api/v1/localidades/estados/RJ"]
        );
    }

    #[test]
    fn consultar_distrito_returns_body_verbatim() {
        let body = r#"[{"id":520005005,"nome":"Abadia de Goiás"}]"#;
        let transport = FixtureTransport::new(200, body);
        let resposta = client(&transport).consultar_distrito(520005005).unwrap();
        assert_eq!(resposta, body);
        assert!(!resposta.is_empty());
    }

    #[test]
    fn consultar_does_not_special_case_error_statuses() {
        let transport = FixtureTransport::new(500, "upstream exploded");
        let resposta = client(&transport).consultar_estado("SP").unwrap();
        assert_eq!(resposta, "upstream exploded");
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let transport = FixtureTransport::new(200, JSON_RESPONSE);
        let c = client(&transport);
        let first = c.consultar_estado("RJ").unwrap();
        for _ in 0..5 {
            assert_eq!(c.consultar_estado("RJ").unwrap(), first);
        }
        let seen = transport.seen();
        assert_eq!(seen.len(), 6);
        assert!(seen.iter().all(|url| url == &seen[0]));
    }

    #[test]
    fn status_goes_through_the_injected_transport() {
        let transport = FixtureTransport::new(200, JSON_RESPONSE);
        let c = client(&transport);
        assert_eq!(c.status_estado("SP").unwrap(), 200);
        assert_eq!(c.status_distrito(520005005).unwrap(), 200);
        assert_eq!(
            transport.seen(),
            vec![
                "https://servicodados.ibge.gov.br/api/v1/localidades/estados/SP",
                "https://servicodados.ibge.gov.br/api/v1/localidades/distritos/520005005",
            ]
        );
    }

    #[test]
    fn status_reports_non_200_as_data() {
        let transport = FixtureTransport::new(404, "");
        assert_eq!(client(&transport).status_distrito(1).unwrap(), 404);
    }

    #[test]
    fn transport_failure_propagates() {
        let c = IbgeClient::new(DEFAULT_BASE_URL, BrokenTransport);
        assert!(matches!(
            c.consultar_estado("SP").unwrap_err(),
            IbgeError::Transport(TransportError::Request { .. })
        ));
        assert!(matches!(
            c.consultar_distrito(520005005).unwrap_err(),
            IbgeError::Transport(_)
        ));
        assert!(matches!(c.status_estado("SP").unwrap_err(), IbgeError::Transport(_)));
    }

    #[test]
    fn estado_decodes_object_payload() {
        let transport = FixtureTransport::new(200, JSON_RESPONSE);
        let estado = client(&transport).estado("RJ").unwrap();
        assert_eq!(estado.id, 33);
        assert_eq!(estado.nome, "Rio de Janeiro");
        assert_eq!(estado.regiao.sigla, "SE");
    }

    #[test]
    fn estado_empty_array_is_not_found() {
        let transport = FixtureTransport::new(200, "[]");
        let err = client(&transport).estado("XX").unwrap_err();
        assert!(matches!(err, IbgeError::NotFound));
    }

    #[test]
    fn distrito_decodes_array_payload() {
        let body = r#"[{"id":310010405,"nome":"Abaeté","municipio":{"id":3100104,"nome":"Abaeté"}}]"#;
        let transport = FixtureTransport::new(200, body);
        let distrito = client(&transport).distrito(310010405).unwrap();
        assert_eq!(distrito.id, 310010405);
        assert_eq!(distrito.nome, "Abaeté");
    }

    #[test]
    fn distrito_bad_json() {
        let transport = FixtureTransport::new(200, "not json");
        let err = client(&transport).distrito(1).unwrap_err();
        assert!(matches!(err, IbgeError::Deserialization(_)));
    }

    #[test]
    fn typed_helpers_check_status() {
        let transport = FixtureTransport::new(503, "maintenance");
        let err = client(&transport).estado("SP").unwrap_err();
        assert!(matches!(err, IbgeError::HttpStatus { status: 503, .. }));

        let transport = FixtureTransport::new(404, "");
        let err = client(&transport).distrito(1).unwrap_err();
        assert!(matches!(err, IbgeError::NotFound));
    }

    #[test]
    fn from_config_rejects_invalid_base_url() {
        let err = IbgeClient::from_config(&ClientConfig::new("ftp://example"), BrokenTransport)
            .unwrap_err();
        assert!(matches!(err, IbgeError::Config(_)));
    }

    #[test]
    fn default_client_targets_public_api() {
        assert_eq!(IbgeClient::<UreqTransport>::default().base_url(), DEFAULT_BASE_URL);
    }
}
