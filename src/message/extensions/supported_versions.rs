use nom::IResult;

use super::CodeList;
use crate::buffer::Buf;
use crate::types::ProtocolVersion;
use crate::Error;

/// supported_versions in ClientHello (RFC 8446 Section 4.2.1).
pub type SupportedVersionsClientHello<'a> = CodeList<'a, ProtocolVersion>;

/// supported_versions in ServerHello: the one selected version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedVersionsServerHello {
    pub selected_version: ProtocolVersion,
}

impl SupportedVersionsServerHello {
    pub const ENCODED_LEN: usize = 2;

    pub fn parse(input: &[u8]) -> IResult<&[u8], SupportedVersionsServerHello> {
        let (input, selected_version) = ProtocolVersion::parse(input)?;
        Ok((input, SupportedVersionsServerHello { selected_version }))
    }

    pub fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        output.put_u16(self.selected_version.as_u16())
    }
}
