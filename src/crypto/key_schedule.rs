//! TLS 1.3 Key Schedule (RFC 8446 Section 7.1)
//!
//! Without PSK support the chain is:
//!
//! ```text
//!              0
//!              |
//!              v
//!        0 -> HKDF-Extract = Early Secret
//!              |
//!              v
//!        Derive-Secret(., "derived", "")
//!              |
//!              v
//!    (EC)DHE -> HKDF-Extract = Handshake Secret
//!              |
//!              +-----> Derive-Secret(., "c hs traffic",
//!              |                     ClientHello...ServerHello)
//!              |
//!              +-----> Derive-Secret(., "s hs traffic",
//!              |                     ClientHello...ServerHello)
//!              v
//!        Derive-Secret(., "derived", "")
//!              |
//!              v
//!        0 -> HKDF-Extract = Master Secret
//!              |
//!              +-----> Derive-Secret(., "c ap traffic",
//!              |                     ClientHello...server Finished)
//!              |
//!              +-----> Derive-Secret(., "s ap traffic",
//!                                    ClientHello...server Finished)
//! ```

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::kdf::{hkdf_expand_label, hkdf_extract, HASH_LEN};
use super::Secret;
use crate::Error;

/// AES-128-GCM key length.
pub const KEY_LEN: usize = 16;

/// AES-GCM nonce length.
pub const IV_LEN: usize = 12;

/// Record protection key and static IV for one direction.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TrafficKeys {
    pub key: [u8; KEY_LEN],
    pub iv: [u8; IV_LEN],
}

impl TrafficKeys {
    /// Derive key and IV from a traffic secret.
    pub fn derive(traffic_secret: &Secret) -> Result<Self, Error> {
        // key = HKDF-Expand-Label(Secret, "key", "", key_length)
        let mut key = [0u8; KEY_LEN];
        hkdf_expand_label(traffic_secret.as_ref(), b"key", &[], &mut key)?;

        // iv = HKDF-Expand-Label(Secret, "iv", "", iv_length)
        let mut iv = [0u8; IV_LEN];
        hkdf_expand_label(traffic_secret.as_ref(), b"iv", &[], &mut iv)?;

        Ok(TrafficKeys { key, iv })
    }
}

impl fmt::Debug for TrafficKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrafficKeys").finish_non_exhaustive()
    }
}

/// Client and server traffic secrets of one stage, with their keys.
#[derive(Debug)]
pub struct TrafficSecrets {
    pub client_secret: Secret,
    pub server_secret: Secret,
    pub client_keys: TrafficKeys,
    pub server_keys: TrafficKeys,
}

impl TrafficSecrets {
    fn new(client_secret: Secret, server_secret: Secret) -> Result<Self, Error> {
        let client_keys = TrafficKeys::derive(&client_secret)?;
        let server_keys = TrafficKeys::derive(&server_secret)?;
        Ok(TrafficSecrets {
            client_secret,
            server_secret,
            client_keys,
            server_keys,
        })
    }
}

/// Handshake traffic secrets (`c hs traffic` / `s hs traffic`).
pub type HandshakeSecrets = TrafficSecrets;

/// First application traffic secrets (`c ap traffic` / `s ap traffic`).
pub type ApplicationSecrets = TrafficSecrets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Early,
    Handshake,
    Master,
}

/// TLS 1.3 Key Schedule.
///
/// Tracks the most recently extracted secret together with the `derived`
/// salt for the next extraction. Traffic secrets are returned to the caller.
#[derive(Debug)]
pub struct KeySchedule {
    stage: Stage,
    /// Early, handshake or master secret, depending on `stage`.
    secret: Secret,
    /// Derive-Secret(secret, "derived", "").
    derived: Secret,
}

fn empty_hash() -> [u8; HASH_LEN] {
    let mut out = [0u8; HASH_LEN];
    out.copy_from_slice(&Sha256::digest(b""));
    out
}

fn derive_secret(secret: &Secret, label: &[u8], transcript_hash: &[u8]) -> Result<Secret, Error> {
    let mut out = [0u8; HASH_LEN];
    hkdf_expand_label(secret.as_ref(), label, transcript_hash, &mut out)?;
    let secret = Secret::new(out);
    out.zeroize();
    Ok(secret)
}

impl KeySchedule {
    /// Start a schedule without PSK.
    ///
    /// Extracts the early secret and immediately derives the salt for the
    /// handshake secret.
    pub fn new() -> Result<Self, Error> {
        let zeros = [0u8; HASH_LEN];

        // Early Secret = HKDF-Extract(0, 0)
        let early_secret = hkdf_extract(&zeros, &zeros);
        let derived = derive_secret(&early_secret, b"derived", &empty_hash())?;

        Ok(KeySchedule {
            stage: Stage::Early,
            secret: early_secret,
            derived,
        })
    }

    /// The most recently extracted secret (early, handshake or master).
    pub fn current_secret(&self) -> &Secret {
        &self.secret
    }

    /// Salt for the next extraction.
    pub fn derived_secret(&self) -> &Secret {
        &self.derived
    }

    /// Inject the ECDHE shared secret and derive the handshake traffic secrets.
    ///
    /// `transcript_hash` covers ClientHello...ServerHello.
    pub fn derive_handshake_secrets(
        &mut self,
        shared_secret: &[u8],
        transcript_hash: &[u8],
    ) -> Result<HandshakeSecrets, Error> {
        if self.stage != Stage::Early {
            return Err(Error::Crypto("Handshake secret already derived".into()));
        }

        // Handshake Secret = HKDF-Extract(derived, ECDHE)
        let handshake_secret = hkdf_extract(self.derived.as_ref(), shared_secret);

        let client = derive_secret(&handshake_secret, b"c hs traffic", transcript_hash)?;
        let server = derive_secret(&handshake_secret, b"s hs traffic", transcript_hash)?;

        self.derived = derive_secret(&handshake_secret, b"derived", &empty_hash())?;
        self.secret = handshake_secret;
        self.stage = Stage::Handshake;

        TrafficSecrets::new(client, server)
    }

    /// Derive the first application traffic secrets.
    ///
    /// `transcript_hash` covers ClientHello...server Finished.
    pub fn derive_application_secrets(
        &mut self,
        transcript_hash: &[u8],
    ) -> Result<ApplicationSecrets, Error> {
        if self.stage != Stage::Handshake {
            return Err(Error::Crypto(format!(
                "Application secrets derived in stage {:?}",
                self.stage
            )));
        }

        // Master Secret = HKDF-Extract(derived, 0)
        let master_secret = hkdf_extract(self.derived.as_ref(), &[0u8; HASH_LEN]);

        let client = derive_secret(&master_secret, b"c ap traffic", transcript_hash)?;
        let server = derive_secret(&master_secret, b"s ap traffic", transcript_hash)?;

        self.secret = master_secret;
        self.stage = Stage::Master;

        TrafficSecrets::new(client, server)
    }
}

/// Finished `verify_data` (RFC 8446 Section 4.4.4).
///
/// ```text
/// finished_key = HKDF-Expand-Label(BaseKey, "finished", "", Hash.length)
/// verify_data  = HMAC(finished_key, Transcript-Hash(...))
/// ```
pub fn finished_verify_data(
    traffic_secret: &Secret,
    transcript_hash: &[u8],
) -> Result<[u8; HASH_LEN], Error> {
    let finished_key = derive_secret(traffic_secret, b"finished", &[])?;

    let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(finished_key.as_ref())
        .map_err(|e| Error::Crypto(format!("Invalid HMAC key: {:?}", e)))?;
    mac.update(transcript_hash);

    let mut verify_data = [0u8; HASH_LEN];
    verify_data.copy_from_slice(&mac.finalize().into_bytes());
    Ok(verify_data)
}
