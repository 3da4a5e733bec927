use nom::bytes::complete::take;
use nom::error::{Error as NomError, ErrorKind};
use nom::number::complete::be_u16;
use nom::{Err, IResult};

use crate::buffer::Buf;
use crate::types::NamedGroup;
use crate::Error;

/// A single KeyShareEntry (RFC 8446 Section 4.2.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyShareEntry<'a> {
    pub group: NamedGroup,
    pub key_exchange: &'a [u8],
}

impl<'a> KeyShareEntry<'a> {
    pub fn new(group: NamedGroup, key_exchange: &'a [u8]) -> Self {
        KeyShareEntry {
            group,
            key_exchange,
        }
    }

    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], KeyShareEntry<'a>> {
        let (input, group) = NamedGroup::parse(input)?;
        let (input, ke_len) = be_u16(input)?;
        if ke_len == 0 {
            return Err(Err::Failure(NomError::new(input, ErrorKind::LengthValue)));
        }
        let (input, key_exchange) = take(ke_len as usize)(input)?;

        Ok((
            input,
            KeyShareEntry {
                group,
                key_exchange,
            },
        ))
    }

    pub fn encoded_len(&self) -> usize {
        2 + 2 + self.key_exchange.len()
    }

    pub fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        let len = u16::try_from(self.key_exchange.len())
            .map_err(|_| Error::IllegalLength(self.key_exchange.len()))?;
        output.put_u16(self.group.as_u16())?;
        output.put_u16(len)?;
        output.extend_from_slice(self.key_exchange)
    }
}

/// KeyShare extension in ClientHello (RFC 8446 Section 4.2.8).
///
/// The entries are validated when parsed and decoded again on iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyShareClientHello<'a> {
    entries: &'a [u8],
}

impl<'a> KeyShareClientHello<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], KeyShareClientHello<'a>> {
        let (input, list_len) = be_u16(input)?;
        let (input, entries) = take(list_len as usize)(input)?;

        let mut rest = entries;
        while !rest.is_empty() {
            let (r, _) = KeyShareEntry::parse(rest)?;
            rest = r;
        }

        Ok((input, KeyShareClientHello { entries }))
    }

    pub fn entries(&self) -> KeyShareEntries<'a> {
        KeyShareEntries { rest: self.entries }
    }

    /// First entry in client order whose group is in `groups`.
    pub fn first_supported(&self, groups: &[NamedGroup]) -> Option<KeyShareEntry<'a>> {
        self.entries().find(|e| groups.contains(&e.group))
    }
}

/// Iterator over the entries of a [`KeyShareClientHello`].
#[derive(Debug, Clone)]
pub struct KeyShareEntries<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for KeyShareEntries<'a> {
    type Item = KeyShareEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match KeyShareEntry::parse(self.rest) {
            Ok((rest, entry)) => {
                self.rest = rest;
                Some(entry)
            }
            Err(_) => {
                self.rest = &[];
                None
            }
        }
    }
}
