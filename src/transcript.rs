//! Running handshake transcript hash (RFC 8446 Section 4.4.1).
//!
//! The transcript is fed by wrapping the transport in a [`HashingReader`]
//! or [`HashingWriter`] while handshake messages pass through. Record
//! headers and alerts are never hashed.

use std::io::{self, Read, Write};

use sha2::{Digest, Sha256};

use crate::crypto::HASH_LEN;

/// SHA-256 over every handshake message seen so far, in both directions.
#[derive(Clone, Default)]
pub struct Transcript {
    hasher: Sha256,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// Hash of the transcript so far. The running state is left untouched.
    pub fn current_hash(&self) -> [u8; HASH_LEN] {
        let mut out = [0u8; HASH_LEN];
        out.copy_from_slice(&self.hasher.clone().finalize());
        out
    }
}

impl std::fmt::Debug for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transcript").finish_non_exhaustive()
    }
}

/// Reader that adds every byte it returns to a transcript.
pub struct HashingReader<'t, R> {
    inner: R,
    transcript: &'t mut Transcript,
}

impl<'t, R: Read> HashingReader<'t, R> {
    pub fn new(inner: R, transcript: &'t mut Transcript) -> Self {
        HashingReader { inner, transcript }
    }
}

impl<R: Read> Read for HashingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.transcript.update(&buf[..n]);
        Ok(n)
    }
}

/// Writer that adds every byte it accepts to a transcript.
pub struct HashingWriter<'t, W> {
    inner: W,
    transcript: &'t mut Transcript,
}

impl<'t, W: Write> HashingWriter<'t, W> {
    pub fn new(inner: W, transcript: &'t mut Transcript) -> Self {
        HashingWriter { inner, transcript }
    }
}

impl<W: Write> Write for HashingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.transcript.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
