use axum::extract::State;
use axum::Json;

use crate::crypto;
use crate::error::Error;
use crate::http_server::ServiceState;
use crate::types::keys::KeyPair;

use super::ApiError;

/// Serve the provisioned key pair, or generate a fresh one.
pub async fn handler(State(state): State<ServiceState>) -> Result<Json<KeyPair>, ApiError> {
    if let Some(keys) = state.provisioned_keys() {
        tracing::debug!(path = %keys.path().display(), "serving provisioned key pair");
        return Ok(Json(keys.key_pair().clone()));
    }

    let pair = tokio::task::spawn_blocking(crypto::generate_key_pair)
        .await
        .map_err(|e| Error::Crypto(format!("key generation task failed: {}", e)))??;
    tracing::info!("generated RSA key pair");
    Ok(Json(pair))
}
