//! Armor, digest and signature encodings.
//!
//! Keys travel as PEM text; signatures travel as standard base64. The digest
//! is SHA-512 everywhere in the system.

use base64::{engine::general_purpose, Engine as _};
use pem::{EncodeConfig, LineEnding, Pem};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{spki::SubjectPublicKeyInfoRef, DecodePublicKey, ObjectIdentifier};
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha512};

use crate::error::Error;

/// Length in bytes of a [`MessageDigest`].
pub const DIGEST_LEN: usize = 64;

/// `rsaEncryption` from PKCS#1.
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
const RSA_PUBLIC_KEY_LABEL: &str = "RSA PUBLIC KEY";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// The label of a PEM block, which says what kind of key material it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerKind {
    /// PKCS#1 `RSAPrivateKey`.
    RsaPrivateKey,
    /// PKCS#1 `RSAPublicKey`, the legacy fixed-field container.
    RsaPublicKey,
    /// X.509 `SubjectPublicKeyInfo`, the algorithm-tagged container.
    PublicKey,
    /// Any other well-formed label.
    Other(String),
}

impl ContainerKind {
    pub fn label(&self) -> &str {
        match self {
            ContainerKind::RsaPrivateKey => RSA_PRIVATE_KEY_LABEL,
            ContainerKind::RsaPublicKey => RSA_PUBLIC_KEY_LABEL,
            ContainerKind::PublicKey => PUBLIC_KEY_LABEL,
            ContainerKind::Other(label) => label,
        }
    }

    fn from_label(label: &str) -> Self {
        match label {
            RSA_PRIVATE_KEY_LABEL => ContainerKind::RsaPrivateKey,
            RSA_PUBLIC_KEY_LABEL => ContainerKind::RsaPublicKey,
            PUBLIC_KEY_LABEL => ContainerKind::PublicKey,
            other => ContainerKind::Other(other.to_string()),
        }
    }
}

/// Wrap raw key material in a PEM block labelled for `kind`.
pub fn encode_key(raw: &[u8], kind: &ContainerKind) -> String {
    let block = Pem::new(kind.label(), raw.to_vec());
    pem::encode_config(&block, EncodeConfig::new().set_line_ending(LineEnding::LF))
}

/// Unwrap the first PEM block in `text`.
pub fn decode_key(text: &str) -> Result<(ContainerKind, Vec<u8>), Error> {
    let block = pem::parse(text).map_err(|e| Error::MalformedArmor(e.to_string()))?;
    let kind = ContainerKind::from_label(block.tag());
    Ok((kind, block.into_contents()))
}

/// Which binary container a public key was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyContainer {
    Pkcs1,
    Spki,
}

/// Outcome of a single parser attempt.
enum Attempt {
    Parsed(RsaPublicKey),
    /// Structurally valid, but tagged with a non-RSA algorithm.
    NotRsa,
    Unrecognized,
}

/// Tried in order; the first `Parsed` wins.
const PUBLIC_KEY_ATTEMPTS: [(PublicKeyContainer, fn(&[u8]) -> Attempt); 2] = [
    (PublicKeyContainer::Pkcs1, attempt_pkcs1),
    (PublicKeyContainer::Spki, attempt_spki),
];

fn attempt_pkcs1(raw: &[u8]) -> Attempt {
    match RsaPublicKey::from_pkcs1_der(raw) {
        Ok(key) => Attempt::Parsed(key),
        Err(_) => Attempt::Unrecognized,
    }
}

fn attempt_spki(raw: &[u8]) -> Attempt {
    let info = match SubjectPublicKeyInfoRef::try_from(raw) {
        Ok(info) => info,
        Err(_) => return Attempt::Unrecognized,
    };
    if info.algorithm.oid != RSA_ENCRYPTION_OID {
        return Attempt::NotRsa;
    }
    match RsaPublicKey::from_public_key_der(raw) {
        Ok(key) => Attempt::Parsed(key),
        Err(_) => Attempt::Unrecognized,
    }
}

/// Parse a DER public key in either recognized container, reporting which one matched.
pub fn parse_public_key_tagged(raw: &[u8]) -> Result<(PublicKeyContainer, RsaPublicKey), Error> {
    let mut saw_non_rsa = false;
    for (container, attempt) in PUBLIC_KEY_ATTEMPTS {
        match attempt(raw) {
            Attempt::Parsed(key) => return Ok((container, key)),
            Attempt::NotRsa => saw_non_rsa = true,
            Attempt::Unrecognized => {}
        }
    }
    if saw_non_rsa {
        Err(Error::NotRsaKey)
    } else {
        Err(Error::UnsupportedKeyFormat)
    }
}

/// Parse a DER public key in either recognized container.
pub fn parse_public_key(raw: &[u8]) -> Result<RsaPublicKey, Error> {
    parse_public_key_tagged(raw).map(|(_, key)| key)
}

/// Parse a DER PKCS#1 private key.
pub fn parse_private_key(raw: &[u8]) -> Result<RsaPrivateKey, Error> {
    RsaPrivateKey::from_pkcs1_der(raw).map_err(|e| Error::MalformedPrivateKey(e.to_string()))
}

/// SHA-512 digest of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDigest([u8; DIGEST_LEN]);

impl MessageDigest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(self.0)
    }
}

/// Hash the UTF-8 bytes of `message`.
pub fn digest(message: &str) -> MessageDigest {
    let hash = Sha512::digest(message.as_bytes());
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&hash);
    MessageDigest(bytes)
}

pub fn encode_signature(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

pub fn decode_signature(text: &str) -> Result<Vec<u8>, Error> {
    Ok(general_purpose::STANDARD.decode(text.trim())?)
}
