use axum::Json;
use serde::{Deserialize, Serialize};

use crate::codec;

use super::ApiJson;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashResponse {
    /// Hex SHA-512.
    pub hash: String,
}

pub async fn handler(ApiJson(req): ApiJson<HashRequest>) -> Json<HashResponse> {
    Json(HashResponse {
        hash: codec::digest(&req.message).to_hex(),
    })
}
