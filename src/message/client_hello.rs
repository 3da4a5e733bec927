use nom::bytes::complete::take;
use nom::number::complete::{be_u16, be_u8};
use nom::IResult;

use super::extensions::CodeList;
use super::{Extensions, Random, SessionId};
use crate::types::{CipherSuite, ProtocolVersion};

/// ClientHello (RFC 8446 Section 4.1.2), borrowed from the message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientHello<'a> {
    pub legacy_version: ProtocolVersion,
    pub random: Random,
    pub legacy_session_id: SessionId,
    pub cipher_suites: CodeList<'a, CipherSuite>,
    extensions: &'a [u8],
}

impl<'a> ClientHello<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], ClientHello<'a>> {
        let (input, legacy_version) = ProtocolVersion::parse(input)?;
        let (input, random) = Random::parse(input)?;
        let (input, legacy_session_id) = SessionId::parse(input)?;
        let (input, cipher_suites) = CodeList::parse_u16(input)?;

        // legacy_compression_methods, read past.
        let (input, compression_len) = be_u8(input)?;
        let (input, _) = take(compression_len as usize)(input)?;

        // Pre TLS 1.3 clients may omit the extensions block entirely.
        let (input, extensions) = if input.is_empty() {
            (input, &input[0..0])
        } else {
            let (input, extensions_len) = be_u16(input)?;
            take(extensions_len as usize)(input)?
        };

        Ok((
            input,
            ClientHello {
                legacy_version,
                random,
                legacy_session_id,
                cipher_suites,
                extensions,
            },
        ))
    }

    /// A fresh iterator over the extensions block.
    pub fn extensions(&self) -> Extensions<'a> {
        Extensions::new(self.extensions)
    }
}
