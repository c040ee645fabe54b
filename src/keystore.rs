//! Pre-provisioned signing keys read from disk.
//!
//! The file is a JSON object `{"private_key": "...", "public_key": "..."}`
//! holding PEM text. It is read once at startup; nothing writes it back.

use std::path::{Path, PathBuf};

use rsa::RsaPublicKey;

use crate::codec;
use crate::error::Error;
use crate::types::keys::KeyPair;
use crate::validation;

/// A key pair loaded from a file and checked to belong together.
#[derive(Debug, Clone)]
pub struct ProvisionedKeys {
    path: PathBuf,
    pair: KeyPair,
}

impl ProvisionedKeys {
    /// Read and validate the key file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        let pair = Self::parse(&data)?;
        tracing::info!(path = %path.display(), "loaded provisioned key pair");
        Ok(Self {
            path: path.to_path_buf(),
            pair,
        })
    }

    /// Parse key file contents without touching the filesystem.
    ///
    /// The private key must be PKCS#1. The public key is supplied material and
    /// may be either container under either label, the same as verification
    /// accepts; it must be the public half of the private key.
    pub fn parse(json: &str) -> Result<KeyPair, Error> {
        let pair: KeyPair = serde_json::from_str(json)?;
        let private_key = validation::validate_private_key_text(&pair.private_key)?;

        let (kind, raw) = codec::decode_key(&pair.public_key)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        let (container, public_key) = codec::parse_public_key_tagged(&raw)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        tracing::debug!(label = kind.label(), ?container, "parsed provisioned public key");

        if RsaPublicKey::from(&private_key) != public_key {
            return Err(Error::InvalidPublicKey(
                "public key does not belong to the private key".to_string(),
            ));
        }
        Ok(pair)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key_pair(&self) -> &KeyPair {
        &self.pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ContainerKind;
    use crate::crypto;
    use crate::testkit;
    use rsa::pkcs8::EncodePublicKey;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");
        let kp = testkit::key_pair();
        std::fs::write(&path, serde_json::to_string_pretty(kp).unwrap()).unwrap();

        let keys = ProvisionedKeys::load(&path).unwrap();
        assert_eq!(keys.key_pair(), kp);
        assert_eq!(keys.path(), path.as_path());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProvisionedKeys::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ProvisionedKeys::parse("{\"private_key\": 1}"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_swapped_keys_rejected() {
        let kp = testkit::key_pair();
        let swapped = KeyPair {
            private_key: kp.public_key.clone(),
            public_key: kp.private_key.clone(),
        };
        let json = serde_json::to_string(&swapped).unwrap();
        assert!(matches!(
            ProvisionedKeys::parse(&json),
            Err(Error::InvalidPrivateKey(_))
        ));
    }

    #[test]
    fn test_spki_public_key_under_legacy_label() {
        // Files written by earlier producers carry SubjectPublicKeyInfo DER
        // inside an `RSA PUBLIC KEY` block.
        let kp = testkit::key_pair();
        let spki = testkit::public_key().to_public_key_der().unwrap();
        let pair = KeyPair {
            private_key: kp.private_key.clone(),
            public_key: codec::encode_key(spki.as_bytes(), &ContainerKind::RsaPublicKey),
        };
        let json = serde_json::to_string(&pair).unwrap();

        let parsed = ProvisionedKeys::parse(&json).unwrap();
        assert_eq!(parsed, pair);

        let signature = crypto::sign("hello", &parsed.private_key).unwrap();
        assert!(crypto::verify("hello", &signature, &parsed.public_key).unwrap());
    }

    #[test]
    fn test_spki_public_key_under_standard_label() {
        let kp = testkit::key_pair();
        let pair = KeyPair {
            private_key: kp.private_key.clone(),
            public_key: crypto::export_public_key_spki(&kp.public_key).unwrap(),
        };
        let json = serde_json::to_string(&pair).unwrap();
        assert!(ProvisionedKeys::parse(&json).is_ok());
    }

    #[test]
    fn test_mismatched_halves_rejected() {
        let kp = testkit::key_pair();
        let other = testkit::unrelated_key_pair();
        let pair = KeyPair {
            private_key: kp.private_key.clone(),
            public_key: other.public_key.clone(),
        };
        let json = serde_json::to_string(&pair).unwrap();
        assert!(matches!(
            ProvisionedKeys::parse(&json),
            Err(Error::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_garbage_public_key_rejected() {
        let kp = testkit::key_pair();
        let pair = KeyPair {
            private_key: kp.private_key.clone(),
            public_key: "not a pem block".to_string(),
        };
        let json = serde_json::to_string(&pair).unwrap();
        assert!(matches!(
            ProvisionedKeys::parse(&json),
            Err(Error::InvalidPublicKey(_))
        ));
    }
}
