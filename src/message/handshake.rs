use std::io::Read;

use nom::number::complete::{be_u24, be_u8};
use nom::IResult;

use super::ClientHello;
use crate::buffer::Buf;
use crate::Error;

/// Size of the handshake message header.
pub const HEADER_LEN: usize = 4;

/// TLS 1.3 handshake header.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Header {
    pub msg_type: MessageType,
    pub length: u32,
}

impl Header {
    pub fn parse(input: &[u8]) -> IResult<&[u8], Header> {
        let (input, msg_type) = MessageType::parse(input)?;
        let (input, length) = be_u24(input)?;

        Ok((input, Header { msg_type, length }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    ClientHello,
    ServerHello,
    NewSessionTicket,
    EndOfEarlyData,
    EncryptedExtensions,
    Certificate,
    CertificateRequest,
    CertificateVerify,
    Finished,
    KeyUpdate,
    MessageHash,
    Unknown(u8),
}

impl MessageType {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => MessageType::ClientHello,
            2 => MessageType::ServerHello,
            4 => MessageType::NewSessionTicket,
            5 => MessageType::EndOfEarlyData,
            8 => MessageType::EncryptedExtensions,
            11 => MessageType::Certificate,
            13 => MessageType::CertificateRequest,
            15 => MessageType::CertificateVerify,
            20 => MessageType::Finished,
            24 => MessageType::KeyUpdate,
            254 => MessageType::MessageHash,
            _ => MessageType::Unknown(value),
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            MessageType::ClientHello => 1,
            MessageType::ServerHello => 2,
            MessageType::NewSessionTicket => 4,
            MessageType::EndOfEarlyData => 5,
            MessageType::EncryptedExtensions => 8,
            MessageType::Certificate => 11,
            MessageType::CertificateRequest => 13,
            MessageType::CertificateVerify => 15,
            MessageType::Finished => 20,
            MessageType::KeyUpdate => 24,
            MessageType::MessageHash => 254,
            MessageType::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], MessageType> {
        let (input, byte) = be_u8(input)?;
        Ok((input, Self::from_u8(byte)))
    }
}

/// Read one handshake message from `reader`, which must be a ClientHello.
///
/// The body is read into `body`, which bounds the accepted message length,
/// and the returned ClientHello borrows from it. The body must decode
/// exactly, trailing bytes are a decode error.
pub fn read_client_hello<'b, R: Read + ?Sized>(
    reader: &mut R,
    body: &'b mut Buf,
) -> Result<ClientHello<'b>, Error> {
    let mut header_bytes = [0u8; HEADER_LEN];
    reader.read_exact(&mut header_bytes)?;
    let (_, header) =
        Header::parse(&header_bytes).map_err(|_| Error::Decode("Malformed handshake header"))?;

    match header.msg_type {
        MessageType::ClientHello => {}
        MessageType::ServerHello
        | MessageType::NewSessionTicket
        | MessageType::EndOfEarlyData
        | MessageType::EncryptedExtensions
        | MessageType::Certificate
        | MessageType::CertificateRequest
        | MessageType::CertificateVerify
        | MessageType::Finished
        | MessageType::KeyUpdate
        | MessageType::MessageHash
        | MessageType::Unknown(_) => {
            debug!("Expected ClientHello, got {:?}", header.msg_type);
            return Err(Error::UnexpectedMessage);
        }
    }

    let length = header.length as usize;
    if length > body.limit() {
        return Err(Error::Decode("Handshake message does not fit the record"));
    }

    body.clear();
    body.resize(length)?;
    reader.read_exact(&mut body[..])?;

    let body: &'b [u8] = body;
    let (rest, client_hello) =
        ClientHello::parse(body).map_err(|_| Error::Decode("Malformed ClientHello"))?;
    if !rest.is_empty() {
        return Err(Error::Decode("Trailing bytes after ClientHello"));
    }

    Ok(client_hello)
}
