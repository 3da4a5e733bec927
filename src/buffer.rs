//! Bounded byte buffer used for staging handshake messages and records.
//!
//! [`Buf`] wraps a `Vec<u8>` that is allocated once, up front, to a fixed
//! limit. Every write is checked against that limit so that an overflow
//! surfaces as [`Error::IllegalLength`] instead of silently growing. The
//! contents are zeroed when the buffer is cleared or dropped since staged
//! plaintext is key material adjacent.

use std::fmt;
use std::ops::{Deref, DerefMut};

use zeroize::Zeroize;

use crate::Error;

/// Fixed capacity byte buffer.
pub struct Buf {
    data: Vec<u8>,
    limit: usize,
}

impl Buf {
    /// Allocate a buffer that can hold at most `limit` bytes.
    ///
    /// The whole capacity is reserved immediately. Allocation failure is
    /// reported as [`Error::OutOfMemory`].
    pub fn with_limit(limit: usize) -> Result<Self, Error> {
        let mut data = Vec::new();
        data.try_reserve_exact(limit)
            .map_err(|_| Error::OutOfMemory)?;
        Ok(Buf { data, limit })
    }

    /// Max number of bytes this buffer accepts.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Bytes still available before hitting the limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.data.len()
    }

    fn ensure(&self, additional: usize) -> Result<(), Error> {
        let wanted = self.data.len() + additional;
        if wanted > self.limit {
            return Err(Error::IllegalLength(wanted));
        }
        Ok(())
    }

    /// Append a slice of bytes.
    pub fn extend_from_slice(&mut self, other: &[u8]) -> Result<(), Error> {
        self.ensure(other.len())?;
        self.data.extend_from_slice(other);
        Ok(())
    }

    /// Append a single byte.
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        self.ensure(1)?;
        self.data.push(byte);
        Ok(())
    }

    pub fn put_u16(&mut self, value: u16) -> Result<(), Error> {
        self.extend_from_slice(&value.to_be_bytes())
    }

    /// Append the low 24 bits of `value`, big endian.
    pub fn put_u24(&mut self, value: u32) -> Result<(), Error> {
        if value > 0xFF_FFFF {
            return Err(Error::IllegalLength(value as usize));
        }
        self.extend_from_slice(&value.to_be_bytes()[1..])
    }

    /// Overwrite three bytes at `at` with a 24 bit big endian length.
    ///
    /// Used to back-patch length fields once a body has been written.
    pub fn patch_u24(&mut self, at: usize, value: u32) -> Result<(), Error> {
        if value > 0xFF_FFFF {
            return Err(Error::IllegalLength(value as usize));
        }
        let Some(slot) = self.data.get_mut(at..at + 3) else {
            return Err(Error::IllegalLength(at + 3));
        };
        slot.copy_from_slice(&value.to_be_bytes()[1..]);
        Ok(())
    }

    /// Grow or shrink to exactly `len` bytes, filling with zero.
    pub fn resize(&mut self, len: usize) -> Result<(), Error> {
        if len > self.limit {
            return Err(Error::IllegalLength(len));
        }
        self.data.resize(len, 0);
        Ok(())
    }

    /// Zero the contents and set the length to 0. The capacity is kept.
    pub fn clear(&mut self) {
        // Vec::zeroize also clears.
        self.data.zeroize();
    }
}

impl Drop for Buf {
    fn drop(&mut self) {
        self.data.zeroize();
    }
}

impl Deref for Buf {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Buf {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl AsRef<[u8]> for Buf {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf")
            .field("len", &self.data.len())
            .field("limit", &self.limit)
            .finish()
    }
}
