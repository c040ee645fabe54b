use axum::Json;
use serde::{Deserialize, Serialize};

use crate::crypto;

use super::{ApiError, ApiJson};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub private_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: String,
}

pub async fn handler(
    ApiJson(req): ApiJson<SignRequest>,
) -> Result<Json<SignResponse>, ApiError> {
    let signature = crypto::sign(&req.message, &req.private_key)?;
    Ok(Json(SignResponse { signature }))
}
