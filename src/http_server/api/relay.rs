use axum::extract::State;
use axum::http::header;
use axum::response::sse::{Event, Sse};
use axum::response::IntoResponse;
use axum::Json;
use futures::StreamExt;
use serde::{Deserialize, Serialize};

use crate::http_server::ServiceState;
use crate::relay::RelayEvent;
use crate::types::envelope::Envelope;

use super::{ApiError, ApiJson};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Queue an incoming envelope for the local listener.
pub async fn deliver_handler(
    State(state): State<ServiceState>,
    ApiJson(envelope): ApiJson<Envelope>,
) -> Result<Json<StatusResponse>, ApiError> {
    state.relay().deliver(envelope)?;
    Ok(Json(StatusResponse::success()))
}

/// Push queued envelopes to the client as server-sent events, with an empty
/// `{}` event as heartbeat. The subscription ends when the client goes away
/// (axum drops the stream) or the server shuts down.
pub async fn stream_handler(State(state): State<ServiceState>) -> impl IntoResponse {
    let events = state
        .relay()
        .subscribe()
        .take_until(state.shutdown_signal())
        .map(|event| match event {
            RelayEvent::Envelope(envelope) => Event::default().json_data(envelope),
            RelayEvent::Heartbeat => Ok(Event::default().data("{}")),
        });

    (
        [
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Sse::new(events),
    )
}
