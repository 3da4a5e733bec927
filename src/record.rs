//! TLS record layer framing (RFC 8446 Section 5.1).
//!
//! Only the 5-byte header is handled here. Payload bytes are never
//! interpreted at this layer.

use std::io::{Read, Write};

use nom::number::complete::be_u16;
use nom::IResult;

use crate::types::{AlertDescription, AlertLevel, ContentType, ProtocolVersion};
use crate::Error;

/// Size of the record header on the wire.
pub const HEADER_LEN: usize = 5;

/// Largest plaintext record this server accepts or produces.
pub const MAX_PLAINTEXT_LEN: usize = (1 << 14) - 1;

/// Largest record body that may appear on the wire (RFC 8446 Section 5.2).
pub const MAX_CIPHERTEXT_LEN: usize = (1 << 14) + 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    pub content_type: ContentType,
    pub legacy_version: ProtocolVersion,
    pub length: u16,
}

impl RecordHeader {
    /// Header for a record we send. TLS 1.3 always writes 0x0303.
    pub fn new(content_type: ContentType, length: u16) -> Self {
        RecordHeader {
            content_type,
            legacy_version: ProtocolVersion::TLS1_2,
            length,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], RecordHeader> {
        let (input, content_type) = ContentType::parse(input)?;
        let (input, legacy_version) = ProtocolVersion::parse(input)?;
        let (input, length) = be_u16(input)?;

        Ok((
            input,
            RecordHeader {
                content_type,
                legacy_version,
                length,
            },
        ))
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let version = self.legacy_version.as_u16().to_be_bytes();
        let length = self.length.to_be_bytes();
        [
            self.content_type.as_u8(),
            version[0],
            version[1],
            length[0],
            length[1],
        ]
    }

    /// Read exactly one header.
    ///
    /// A short read is [`Error::EndOfStream`]. Lengths above
    /// [`MAX_CIPHERTEXT_LEN`] are [`Error::IllegalLength`]. The legacy
    /// version is not checked, clients commonly send 0x0301 here.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> Result<Self, Error> {
        let mut bytes = [0u8; HEADER_LEN];
        reader.read_exact(&mut bytes)?;

        let (_, header) =
            Self::parse(&bytes).map_err(|_| Error::Decode("Malformed record header"))?;

        if header.length as usize > MAX_CIPHERTEXT_LEN {
            return Err(Error::IllegalLength(header.length as usize));
        }

        Ok(header)
    }

    /// Write the header only. The caller writes the payload.
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_all(&self.encode())?;
        Ok(())
    }
}

/// Send a plaintext fatal alert record.
pub fn write_alert<W: Write + ?Sized>(
    writer: &mut W,
    description: AlertDescription,
) -> Result<(), Error> {
    RecordHeader::new(ContentType::Alert, 2).write(writer)?;
    writer.write_all(&[AlertLevel::Fatal.as_u8(), description.as_u8()])?;
    writer.flush()?;
    Ok(())
}
