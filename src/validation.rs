//! Structural checks applied before any cryptographic work, so a caller can
//! tell a badly shaped request from a forged one.
//!
//! Key validators return the parsed key rather than `()`; callers should use
//! the returned value instead of decoding the text again.

use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::codec::{self, ContainerKind};
use crate::error::Error;

pub fn validate_message(message: &str) -> Result<(), Error> {
    if message.is_empty() {
        return Err(Error::EmptyMessage);
    }
    Ok(())
}

pub fn validate_signature_text(signature: &str) -> Result<(), Error> {
    if signature.is_empty() {
        return Err(Error::EmptySignature);
    }
    Ok(())
}

/// Accept only an `RSA PRIVATE KEY` block holding a PKCS#1 key.
pub fn validate_private_key_text(text: &str) -> Result<RsaPrivateKey, Error> {
    let (kind, raw) =
        codec::decode_key(text).map_err(|e| Error::InvalidPrivateKey(e.to_string()))?;
    if kind != ContainerKind::RsaPrivateKey {
        return Err(Error::InvalidPrivateKey(format!(
            "expected a {} block, found {}",
            ContainerKind::RsaPrivateKey.label(),
            kind.label()
        )));
    }
    codec::parse_private_key(&raw).map_err(|e| Error::InvalidPrivateKey(e.to_string()))
}

/// Accept only an `RSA PUBLIC KEY` block holding a PKCS#1 key.
///
/// This is the strict path for keys this service generated itself. Keys
/// supplied by other producers go through [`codec::parse_public_key`], which
/// also accepts SubjectPublicKeyInfo.
pub fn validate_public_key_text(text: &str) -> Result<RsaPublicKey, Error> {
    let (kind, raw) =
        codec::decode_key(text).map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
    if kind != ContainerKind::RsaPublicKey {
        return Err(Error::InvalidPublicKey(format!(
            "expected a {} block, found {}",
            ContainerKind::RsaPublicKey.label(),
            kind.label()
        )));
    }
    RsaPublicKey::from_pkcs1_der(&raw).map_err(|e| Error::InvalidPublicKey(e.to_string()))
}
