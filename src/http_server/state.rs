use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

use crate::forward::EnvelopeForwarder;
use crate::keystore::ProvisionedKeys;
use crate::relay::RelayBroker;

/// Everything a request handler can reach. Cheap to clone.
#[derive(Clone)]
pub struct ServiceState {
    relay: RelayBroker,
    forwarder: Arc<dyn EnvelopeForwarder>,
    keys: Option<Arc<ProvisionedKeys>>,
    shutdown_rx: watch::Receiver<()>,
}

impl ServiceState {
    pub fn new(
        relay: RelayBroker,
        forwarder: Arc<dyn EnvelopeForwarder>,
        keys: Option<ProvisionedKeys>,
        shutdown_rx: watch::Receiver<()>,
    ) -> Self {
        Self {
            relay,
            forwarder,
            keys: keys.map(Arc::new),
            shutdown_rx,
        }
    }

    pub fn relay(&self) -> &RelayBroker {
        &self.relay
    }

    pub fn forwarder(&self) -> &dyn EnvelopeForwarder {
        self.forwarder.as_ref()
    }

    pub fn provisioned_keys(&self) -> Option<&ProvisionedKeys> {
        self.keys.as_deref()
    }

    /// Resolves when the server starts shutting down.
    pub fn shutdown_signal(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut shutdown_rx = self.shutdown_rx.clone();
        async move {
            let _ = shutdown_rx.changed().await;
        }
    }
}
