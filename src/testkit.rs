//! Shared fixtures for unit tests. RSA key generation is slow in debug
//! builds, so each key pair is generated once per test binary.

use std::sync::OnceLock;

use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::crypto::{self, RSA_KEY_BITS};
use crate::types::keys::KeyPair;

struct Fixture {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
    pem: KeyPair,
}

fn build() -> Fixture {
    let pem = crypto::generate_key_pair().expect("key generation");
    let private_key = crate::validation::validate_private_key_text(&pem.private_key)
        .expect("generated private key parses");
    let public_key = RsaPublicKey::from(&private_key);
    assert_eq!(private_key.size() * 8, RSA_KEY_BITS);
    Fixture {
        private_key,
        public_key,
        pem,
    }
}

fn primary() -> &'static Fixture {
    static FIXTURE: OnceLock<Fixture> = OnceLock::new();
    FIXTURE.get_or_init(build)
}

fn unrelated() -> &'static Fixture {
    static FIXTURE: OnceLock<Fixture> = OnceLock::new();
    FIXTURE.get_or_init(build)
}

pub fn private_key() -> &'static RsaPrivateKey {
    &primary().private_key
}

pub fn public_key() -> &'static RsaPublicKey {
    &primary().public_key
}

/// The primary key pair as armored text.
pub fn key_pair() -> &'static KeyPair {
    &primary().pem
}

/// A second key pair with no relation to [`key_pair`].
pub fn unrelated_key_pair() -> &'static KeyPair {
    &unrelated().pem
}
