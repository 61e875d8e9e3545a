//! Address Normalizer
//!
//! Pure domain logic turning provider payloads into the canonical address.
//! No I/O happens here; the same payload always yields the same address.

use crate::domain::entities::Address;
use crate::domain::errors::LookupError;
use crate::domain::payloads::{BrasilApiPayload, ViaCepPayload};
use crate::domain::value_objects::ProviderId;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoding and normalization for every supported provider.
///
/// The source identifier is passed in by the adapter, since providers
/// never identify themselves in the payload.
pub struct Normalizer;

impl Normalizer {
    /// Decode a BrasilAPI response body.
    pub fn decode_brasil_api(body: &[u8]) -> Result<BrasilApiPayload, LookupError> {
        Self::decode(body)
    }

    /// Decode a ViaCEP response body.
    ///
    /// A payload carrying the `erro` flag is reported as [`LookupError::NotFound`].
    pub fn decode_via_cep(body: &[u8]) -> Result<ViaCepPayload, LookupError> {
        let payload: ViaCepPayload = Self::decode(body)?;
        if payload.is_not_found() {
            return Err(LookupError::NotFound);
        }
        Ok(payload)
    }

    /// street←street, neighborhood←neighborhood, city←city, region←state
    pub fn from_brasil_api(payload: BrasilApiPayload, source: ProviderId) -> Address {
        Address {
            street: non_empty(payload.street),
            neighborhood: non_empty(payload.neighborhood),
            city: non_empty(payload.city),
            region_code: non_empty(payload.state),
            source,
        }
    }

    /// street←logradouro, neighborhood←bairro, city←localidade, region←uf
    pub fn from_via_cep(payload: ViaCepPayload, source: ProviderId) -> Address {
        Address {
            street: non_empty(payload.logradouro),
            neighborhood: non_empty(payload.bairro),
            city: non_empty(payload.localidade),
            region_code: non_empty(payload.uf),
            source,
        }
    }

    /// Both providers answer with a JSON object; any other shape is rejected
    /// before field mapping, since derived struct decoding also accepts arrays.
    fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, LookupError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| LookupError::Decode(e.to_string()))?;
        if !value.is_object() {
            return Err(LookupError::Decode(format!(
                "expected a JSON object, got {}",
                json_type(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| LookupError::Decode(e.to_string()))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
