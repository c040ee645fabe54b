use axum::routing::{get, post};
use axum::Router;

mod compare;
mod error;
mod hash;
mod keys;
mod relay;
mod send;
mod sign;
mod verify;

pub use error::{ApiError, ApiJson, ErrorBody};

use super::ServiceState;

pub fn router() -> Router<ServiceState> {
    Router::new()
        .route("/keys", get(keys::handler))
        .route("/hash", post(hash::handler))
        .route("/sign", post(sign::handler))
        .route("/verify", post(verify::handler))
        .route("/compare", post(compare::handler))
        .route("/send", post(send::handler))
        .route("/relay/deliver", post(relay::deliver_handler))
        .route("/relay/stream", get(relay::stream_handler))
}
