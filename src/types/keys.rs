use serde::{Deserialize, Serialize};

/// An RSA key pair in armored text form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyPair {
    /// PEM `RSA PRIVATE KEY` (PKCS#1).
    pub private_key: String,
    /// PEM public key.
    pub public_key: String,
}
