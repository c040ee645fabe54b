use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http_server::ServiceState;
use crate::types::envelope::Envelope;

use super::relay::StatusResponse;
use super::{ApiError, ApiJson};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Peer address as `host:port`.
    pub ip: String,
}

/// Forward an already signed envelope to a peer's relay.
pub async fn handler(
    State(state): State<ServiceState>,
    ApiJson(req): ApiJson<SendRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.forwarder().forward(&req.envelope, &req.ip).await?;
    tracing::info!(peer = %req.ip, "envelope forwarded");
    Ok(Json(StatusResponse::success()))
}
