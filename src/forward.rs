//! Outbound delivery of envelopes to a peer's relay.

use std::time::Duration;

use crate::error::Error;
use crate::types::envelope::Envelope;

/// Path of the deliver endpoint on a peer.
pub const DELIVER_PATH: &str = "/api/relay/deliver";

/// Default timeout for a single outbound delivery.
pub const DEFAULT_FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

/// Build the deliver URL for a peer given as `host:port`.
pub fn construct_deliver_url(address: &str) -> String {
    format!("http://{}{}", address.trim_end_matches('/'), DELIVER_PATH)
}

/// Something that can hand an envelope to a remote relay.
#[async_trait::async_trait]
pub trait EnvelopeForwarder: Send + Sync {
    async fn forward(&self, envelope: &Envelope, address: &str) -> Result<(), Error>;
}

/// Forwards over plain HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    client: reqwest::Client,
}

impl HttpForwarder {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| Error::Delivery(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl EnvelopeForwarder for HttpForwarder {
    async fn forward(&self, envelope: &Envelope, address: &str) -> Result<(), Error> {
        if address.is_empty() {
            return Err(Error::Delivery("peer address is empty".to_string()));
        }
        let url = construct_deliver_url(address);
        tracing::debug!(%url, "forwarding envelope");

        let resp = self
            .client
            .post(&url)
            .json(envelope)
            .send()
            .await
            .map_err(|e| Error::Delivery(format!("failed to reach {}: {}", url, e)))?;

        if !resp.status().is_success() {
            return Err(Error::Delivery(format!(
                "HTTP {} from {}",
                resp.status(),
                url
            )));
        }
        Ok(())
    }
}
