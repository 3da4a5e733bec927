//! Ephemeral X25519 key exchange (RFC 7748).

use std::fmt;

use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroize;

use super::Secret;
use crate::rng::SeededRng;
use crate::types::NamedGroup;
use crate::Error;

const X25519_KEY_LEN: usize = 32;

/// Ephemeral key pair for one handshake.
///
/// The private scalar is wiped when the exchange is dropped or completed.
pub struct KeyExchange {
    secret: StaticSecret,
    public_key: PublicKey,
}

impl KeyExchange {
    /// Generate a fresh key pair for `group`.
    pub(crate) fn generate(group: NamedGroup, rng: &mut SeededRng) -> Result<Self, Error> {
        match group {
            NamedGroup::X25519 => {
                let mut private = [0u8; X25519_KEY_LEN];
                rng.fill(&mut private);
                let kx = Self::from_private(private);
                private.zeroize();
                Ok(kx)
            }
            _ => Err(Error::UnsupportedNamedGroup),
        }
    }

    /// Build a key pair from a known private key. The key is clamped on use.
    pub fn from_private(private: [u8; X25519_KEY_LEN]) -> Self {
        let secret = StaticSecret::from(private);
        let public_key = PublicKey::from(&secret);
        KeyExchange { secret, public_key }
    }

    pub fn group(&self) -> NamedGroup {
        NamedGroup::X25519
    }

    pub fn public_key(&self) -> &[u8; X25519_KEY_LEN] {
        self.public_key.as_bytes()
    }

    /// Check that a peer key share has the size its group dictates.
    pub fn check_peer_key(group: NamedGroup, peer_key: &[u8]) -> Result<(), Error> {
        match group {
            NamedGroup::X25519 if peer_key.len() == X25519_KEY_LEN => Ok(()),
            NamedGroup::X25519 => Err(Error::IllegalParameter("X25519 key share length")),
            _ => Err(Error::UnsupportedNamedGroup),
        }
    }

    /// Complete the exchange with the peer's key share.
    ///
    /// Fails with [`Error::IdentityElement`] when the peer sent a low order
    /// point, which would make the shared secret all zeros.
    pub fn complete(self, peer_key: &[u8]) -> Result<Secret, Error> {
        let peer: [u8; X25519_KEY_LEN] = peer_key
            .try_into()
            .map_err(|_| Error::IllegalParameter("X25519 key share length"))?;

        let shared = self.secret.diffie_hellman(&PublicKey::from(peer));
        if !shared.was_contributory() {
            return Err(Error::IdentityElement);
        }

        Ok(Secret::new(shared.to_bytes()))
    }
}

impl fmt::Debug for KeyExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyExchange")
            .field("group", &self.group())
            .finish_non_exhaustive()
    }
}

/// Raw clamped scalar multiplication, `X25519(k, u)`.
pub fn x25519(scalar: [u8; X25519_KEY_LEN], point: [u8; X25519_KEY_LEN]) -> [u8; X25519_KEY_LEN] {
    x25519_dalek::x25519(scalar, point)
}
