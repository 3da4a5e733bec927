//! AES-128-GCM record protection (RFC 8446 Section 5.2 and 5.3).

use std::fmt;

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::AeadInPlace;
use aes_gcm::{Aes128Gcm, Key, KeyInit, Tag};

use super::key_schedule::{TrafficKeys, IV_LEN};
use crate::Error;

/// Length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// AEAD cipher for one direction of one traffic stage.
///
/// The per-record nonce is the static IV XOR the 64-bit record sequence
/// number, left padded to the IV length. The sequence number starts at 0
/// and advances once per sealed or opened record.
pub struct Cipher {
    aead: Aes128Gcm,
    iv: [u8; IV_LEN],
    seq: u64,
}

impl Cipher {
    pub fn new(keys: &TrafficKeys) -> Self {
        let aead = Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(&keys.key));
        Cipher {
            aead,
            iv: keys.iv,
            seq: 0,
        }
    }

    /// Sequence number the next record will use.
    pub fn sequence_number(&self) -> u64 {
        self.seq
    }

    fn next_nonce(&mut self) -> Result<[u8; IV_LEN], Error> {
        // RFC 8446 Section 5.5, the sequence number must not wrap.
        if self.seq == u64::MAX {
            return Err(Error::Crypto("Record sequence number exhausted".into()));
        }

        let mut nonce = self.iv;
        for (n, s) in nonce[IV_LEN - 8..].iter_mut().zip(self.seq.to_be_bytes()) {
            *n ^= s;
        }
        self.seq += 1;

        Ok(nonce)
    }

    /// Encrypt `data` in place and return the detached tag.
    pub fn seal(&mut self, aad: &[u8], data: &mut [u8]) -> Result<[u8; TAG_LEN], Error> {
        let nonce = self.next_nonce()?;
        let tag = self
            .aead
            .encrypt_in_place_detached(GenericArray::from_slice(&nonce), aad, data)
            .map_err(|_| Error::Crypto("AES-GCM seal failed".into()))?;

        let mut out = [0u8; TAG_LEN];
        out.copy_from_slice(&tag);
        Ok(out)
    }

    /// Decrypt `data` in place, verifying `tag`.
    pub fn open(&mut self, aad: &[u8], data: &mut [u8], tag: &[u8]) -> Result<(), Error> {
        if tag.len() != TAG_LEN {
            return Err(Error::Decode("AEAD tag length"));
        }
        let nonce = self.next_nonce()?;
        self.aead
            .decrypt_in_place_detached(
                GenericArray::from_slice(&nonce),
                aad,
                data,
                Tag::from_slice(tag),
            )
            .map_err(|_| Error::Crypto("AES-GCM open failed".into()))
    }
}

impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher")
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}
