//! Cryptographic building blocks for the TLS 1.3 handshake.
//!
//! Only what `TLS_AES_128_GCM_SHA256` over X25519 needs lives here: HKDF with
//! SHA-256, the key schedule, AES-128-GCM record protection and the X25519
//! exchange. Signing is delegated to a [`SigningKey`] supplied by the caller.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

mod aead;
mod kdf;
mod key_exchange;
mod key_schedule;
mod signing;

pub use aead::{Cipher, TAG_LEN};
pub use kdf::{hkdf_expand_label, hkdf_extract, HASH_LEN};
pub use key_exchange::{x25519, KeyExchange};
pub use key_schedule::{
    finished_verify_data, ApplicationSecrets, HandshakeSecrets, KeySchedule, TrafficKeys,
    TrafficSecrets, IV_LEN, KEY_LEN,
};
pub use signing::SigningKey;

/// A SHA-256 sized secret. Zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret([u8; HASH_LEN]);

impl Secret {
    pub(crate) fn new(bytes: [u8; HASH_LEN]) -> Self {
        Secret(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_LEN] {
        &self.0
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}
