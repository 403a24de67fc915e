//! Warehouse request/response types.

use std::collections::{BTreeMap, HashMap};

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use serde::Serialize;
use serde_json::value::RawValue;

use warehouse_core::{parse_raw_number_or, Snapshot};

use crate::error::ApiError;
use crate::registry::WarehouseId;

pub const CAPACITY: &str = "capacity";
pub const INITIAL_BALANCE: &str = "initialBalance";
pub const AMOUNT: &str = "amount";

/// A JSON object request body with its field values left unparsed.
///
/// Values are only interpreted when a handler asks for them, so a field
/// that `serde_json` cannot represent (`1e400`) is coerced like any other
/// bad number instead of failing the whole request.
#[derive(Debug)]
pub struct JsonFields(HashMap<String, Box<RawValue>>);

impl JsonFields {
    pub fn parse(bytes: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(bytes).map(JsonFields).map_err(|e| {
            ApiError::BadRequest(format!(
                "Failed to parse the request body as a JSON object: {e}"
            ))
        })
    }

    /// Reads a numeric field, defaulting to `0.0` when absent or unparseable.
    pub fn number(&self, key: &str) -> f64 {
        parse_raw_number_or(self.0.get(key).map(|raw| &**raw), 0.0)
    }
}

impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !json_content_type(req.headers()) {
            return Err(ApiError::BadRequest(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Self::parse(&bytes)
    }
}

/// `application/json`, or any `application/*+json` type.
fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Response for `GET /warehouses`: id -> state.
pub type WarehouseListResponse = BTreeMap<String, Snapshot>;

/// Response from creating a warehouse.
#[derive(Debug, Clone, Serialize)]
pub struct CreateWarehouseResponse {
    pub id: WarehouseId,
    #[serde(flatten)]
    pub state: Snapshot,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeCapacityResponse {
    pub free_capacity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddResponse {
    pub balance: f64,
    pub free_capacity: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawResponse {
    /// Amount actually taken. Negative when a negative amount was requested.
    pub withdrawn: f64,
    pub balance: f64,
    pub free_capacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}
