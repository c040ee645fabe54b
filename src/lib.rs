//! # sigrelay
//!
//! RSA message signing and verification, plus a relay that passes signed
//! envelopes from one peer to a live listener on another.
//!
//! A sender signs a message with its private key and forwards the envelope
//! (message, signature, public key) to a peer. The peer queues the envelope
//! and streams it to whoever is listening, and anyone holding the envelope
//! can check it without a shared secret.
//!
//! ## Features
//!
//! - **Signing**: RSASSA-PKCS1-v1_5 over a SHA-512 digest, base64 output
//! - **Verification**: accepts public keys as PKCS#1 (`RSA PUBLIC KEY`) or
//!   SubjectPublicKeyInfo (`PUBLIC KEY`), and tells malformed input apart
//!   from a signature that simply does not match
//! - **Relay** (`relay` feature): a bounded FIFO mailbox with a heartbeat
//!   stream for idle listeners
//! - **Service** (`server` feature): the HTTP API and the `sigrelay` binary
//!
//! ## Quick Start
//!
//! ```rust
//! use sigrelay::crypto::{generate_key_pair, sign, verify};
//!
//! let key_pair = generate_key_pair().unwrap();
//!
//! let signature = sign("hello", &key_pair.private_key).unwrap();
//! assert!(verify("hello", &signature, &key_pair.public_key).unwrap());
//! assert!(!verify("goodbye", &signature, &key_pair.public_key).unwrap());
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, Error>`. [`Error::class`] groups
//! failures into bad input, a negative verification answer, relay
//! backpressure, delivery failures and internal errors, and
//! [`Error::code`] gives a stable reason string for each kind.

pub mod codec;
pub mod config;
pub mod crypto;
pub mod error;
pub mod keystore;
pub mod types;
pub mod validation;

#[cfg(feature = "relay")]
pub mod relay;

#[cfg(feature = "server")]
pub mod forward;
#[cfg(feature = "server")]
pub mod http_server;

#[cfg(test)]
mod testkit;

pub use error::{Error, ErrorClass, ErrorCode};
pub use types::envelope::Envelope;
pub use types::keys::KeyPair;
