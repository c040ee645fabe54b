use serde::{Deserialize, Serialize};

/// A message, a signature over it, and the signer's public key.
///
/// The relay treats an envelope as opaque; nothing is verified on delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope {
    pub message: String,
    /// Base64 signature.
    pub signature: String,
    /// PEM public key, in either recognized container.
    pub public_key: String,
}
