use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::crypto;
use crate::error::{ErrorClass, ErrorCode};

use super::verify::VerifyRequest;
use super::{ApiError, ApiJson};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    /// Hex SHA-512 of the message.
    pub decrypted_hash: String,
    /// The same digest, base64.
    pub hashed_message: String,
    #[serde(rename = "match")]
    pub is_match: bool,
}

/// Returned with 200 when the signature is well formed but does not match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MismatchResponse {
    pub error: String,
    pub code: ErrorCode,
    #[serde(rename = "match")]
    pub is_match: bool,
}

/// Diagnostic verification: echoes the locally computed digest on success and
/// reports a forged or altered signature as `Signature invalid`.
pub async fn handler(ApiJson(req): ApiJson<VerifyRequest>) -> Result<Response, ApiError> {
    let verification = crypto::verify_detailed(&req.message, &req.signature, &req.public_key)?;

    match verification.into_result() {
        Ok(digest) => Ok((
            StatusCode::OK,
            Json(CompareResponse {
                decrypted_hash: digest.to_hex(),
                hashed_message: digest.to_base64(),
                is_match: true,
            }),
        )
            .into_response()),
        Err(err) if err.class() == ErrorClass::Mismatch => {
            tracing::debug!(code = %err.code(), "signature does not match");
            Ok((
                StatusCode::OK,
                Json(MismatchResponse {
                    error: err.to_string(),
                    code: err.code(),
                    is_match: false,
                }),
            )
                .into_response())
        }
        Err(err) => Err(err.into()),
    }
}
