//! Provider Payloads
//!
//! Native response shapes of the upstream services, as they arrive on the wire.

use serde::Deserialize;

/// BrasilAPI `GET /api/cep/v1/{cep}` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrasilApiPayload {
    pub cep: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub street: Option<String>,
    /// Backend BrasilAPI itself queried; not our source identifier.
    pub service: Option<String>,
}

/// ViaCEP `GET /ws/{cep}/json/` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ViaCepPayload {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
    pub ibge: Option<String>,
    pub gia: Option<String>,
    pub ddd: Option<String>,
    pub siafi: Option<String>,
    /// Set to `true` (or `"true"`) when the code does not exist.
    pub erro: Option<serde_json::Value>,
}

impl ViaCepPayload {
    pub fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}
