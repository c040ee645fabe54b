//! Bounded mailbox between envelope deliveries and a streaming listener.
//!
//! Deliveries never wait: a full queue is reported as [`Error::RelayBusy`].
//! Subscribers pull envelopes in delivery order and get a heartbeat whenever
//! the queue stays empty for a full heartbeat interval. The queue is a
//! mailbox, not a broadcast: with several subscribers attached, each
//! envelope goes to exactly one of them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::Stream;

use crate::config::RelayConfig;
use crate::error::Error;
use crate::types::envelope::Envelope;

/// One unit pushed to a subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    Envelope(Envelope),
    /// Nothing arrived within the heartbeat interval.
    Heartbeat,
}

/// Handle to the relay queue. Cloning shares the same queue.
#[derive(Debug, Clone)]
pub struct RelayBroker {
    tx: flume::Sender<Envelope>,
    rx: flume::Receiver<Envelope>,
    config: RelayConfig,
    subscribers: Arc<AtomicUsize>,
}

impl RelayBroker {
    pub fn new(config: RelayConfig) -> Self {
        // A zero-capacity flume channel is a rendezvous; the relay always buffers.
        let capacity = config.capacity.max(1);
        tracing::info!(
            capacity,
            heartbeat_ms = config.heartbeat_interval.as_millis() as u64,
            "creating relay queue"
        );
        let (tx, rx) = flume::bounded(capacity);
        Self {
            tx,
            rx,
            config: RelayConfig { capacity, ..config },
            subscribers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Enqueue an envelope without waiting.
    pub fn deliver(&self, envelope: Envelope) -> Result<(), Error> {
        self.tx.try_send(envelope).map_err(|e| match e {
            flume::TrySendError::Full(_) => {
                tracing::warn!(capacity = self.config.capacity, "relay queue is full");
                Error::RelayBusy
            }
            // Unreachable while `self` holds a receiver.
            flume::TrySendError::Disconnected(_) => Error::RelayBusy,
        })?;
        tracing::debug!(pending = self.rx.len(), "envelope queued");
        Ok(())
    }

    /// Attach a listener.
    ///
    /// The stream never ends on its own while any broker handle is alive;
    /// drop it to detach.
    pub fn subscribe(&self) -> impl Stream<Item = RelayEvent> + Send + 'static {
        self.subscribers.fetch_add(1, Ordering::SeqCst);
        tracing::info!(
            subscribers = self.subscribers.load(Ordering::SeqCst),
            "relay subscriber attached"
        );
        let subscriber = Subscriber {
            rx: self.rx.clone(),
            heartbeat: self.config.heartbeat_interval,
            _attachment: Attachment(self.subscribers.clone()),
        };
        futures::stream::unfold(subscriber, |subscriber| async move {
            let event = subscriber.next_event().await?;
            Some((event, subscriber))
        })
    }

    /// Envelopes waiting for a subscriber.
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn heartbeat_interval(&self) -> Duration {
        self.config.heartbeat_interval
    }

    /// Subscriber streams currently alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.load(Ordering::SeqCst)
    }
}

impl Default for RelayBroker {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}

struct Subscriber {
    rx: flume::Receiver<Envelope>,
    heartbeat: Duration,
    _attachment: Attachment,
}

impl Subscriber {
    /// `None` once every sender is gone.
    async fn next_event(&self) -> Option<RelayEvent> {
        tokio::select! {
            biased;

            received = self.rx.recv_async() => match received {
                Ok(envelope) => Some(RelayEvent::Envelope(envelope)),
                Err(flume::RecvError::Disconnected) => {
                    tracing::info!("relay queue closed");
                    None
                }
            },

            _ = tokio::time::sleep(self.heartbeat) => Some(RelayEvent::Heartbeat),
        }
    }
}

/// Counts a live subscriber until the stream holding it is dropped.
struct Attachment(Arc<AtomicUsize>);

impl Drop for Attachment {
    fn drop(&mut self) {
        let remaining = self.0.fetch_sub(1, Ordering::SeqCst) - 1;
        tracing::info!(subscribers = remaining, "relay subscriber detached");
    }
}
