//! Extension bodies the server looks at.

use std::fmt;
use std::marker::PhantomData;

use nom::bytes::complete::take;
use nom::error::{Error, ErrorKind};
use nom::number::complete::{be_u16, be_u8};
use nom::{Err, IResult};

use crate::types::{NamedGroup, SignatureScheme};

mod key_share;
mod supported_versions;

pub use key_share::{KeyShareClientHello, KeyShareEntries, KeyShareEntry};
pub use supported_versions::{SupportedVersionsClientHello, SupportedVersionsServerHello};

/// `supported_groups` (RFC 8446 Section 4.2.7).
pub type SupportedGroups<'a> = CodeList<'a, NamedGroup>;

/// `signature_algorithms` (RFC 8446 Section 4.2.3).
pub type SignatureAlgorithms<'a> = CodeList<'a, SignatureScheme>;

/// Borrowed, length-prefixed list of 16-bit code points in peer order.
///
/// Nothing is decoded up front. Values are converted as they are iterated,
/// so codes this crate does not know show up as the `Unknown` variant.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CodeList<'a, T> {
    data: &'a [u8],
    _code: PhantomData<T>,
}

impl<'a, T> CodeList<'a, T>
where
    T: From<u16> + PartialEq + Copy + 'a,
{
    fn from_items(input: &'a [u8], items: &'a [u8]) -> IResult<&'a [u8], Self> {
        if items.len() % 2 != 0 {
            return Err(Err::Failure(Error::new(items, ErrorKind::LengthValue)));
        }
        Ok((
            input,
            CodeList {
                data: items,
                _code: PhantomData,
            },
        ))
    }

    /// Parse a list with a one byte length prefix.
    pub fn parse_u8(input: &'a [u8]) -> IResult<&'a [u8], Self> {
        let (input, len) = be_u8(input)?;
        let (input, items) = take(len as usize)(input)?;
        Self::from_items(input, items)
    }

    /// Parse a list with a two byte length prefix.
    pub fn parse_u16(input: &'a [u8]) -> IResult<&'a [u8], Self> {
        let (input, len) = be_u16(input)?;
        let (input, items) = take(len as usize)(input)?;
        Self::from_items(input, items)
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        self.data
            .chunks_exact(2)
            .map(|c| T::from(u16::from_be_bytes([c[0], c[1]])))
    }

    pub fn len(&self) -> usize {
        self.data.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, value: T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// First value in peer order that also appears in `table`.
    pub fn first_supported(&self, table: &[T]) -> Option<T> {
        self.iter().find(|v| table.contains(v))
    }
}

impl<'a, T> fmt::Debug for CodeList<'a, T>
where
    T: From<u16> + PartialEq + Copy + fmt::Debug + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
