use axum::Json;
use serde::{Deserialize, Serialize};

use crate::crypto;

use super::{ApiError, ApiJson};

/// Shared by the strict and diagnostic verification endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub public_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(rename = "match")]
    pub is_match: bool,
}

pub async fn handler(
    ApiJson(req): ApiJson<VerifyRequest>,
) -> Result<Json<VerifyResponse>, ApiError> {
    let is_match = crypto::verify(&req.message, &req.signature, &req.public_key)?;
    tracing::debug!(is_match, "verified signature");
    Ok(Json(VerifyResponse { is_match }))
}
