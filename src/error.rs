use std::io;

use thiserror::Error;

use crate::types::{AlertDescription, ContentType};

/// Errors produced while running a server handshake.
///
/// Every variant except [`Error::Io`] and [`Error::EndOfStream`] maps to a
/// fatal alert through [`Error::alert`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected handshake message")]
    UnexpectedMessage,

    #[error("Client does not offer TLS 1.3")]
    UnsupportedVersion,

    #[error("No named group in common with the client")]
    UnsupportedNamedGroup,

    #[error("No cipher suite in common with the client")]
    UnsupportedCipherSuite,

    #[error("No signature algorithm in common with the client")]
    UnsupportedSignatureAlgorithm,

    #[error("Illegal length {0}")]
    IllegalLength(usize),

    #[error("Unexpected record type {0:?}")]
    UnexpectedRecordType(ContentType),

    #[error("Out of memory")]
    OutOfMemory,

    #[error("Key share is an identity or low order point")]
    IdentityElement,

    #[error("Illegal parameter: {0}")]
    IllegalParameter(&'static str),

    #[error("Transport ended in the middle of a record")]
    EndOfStream,

    #[error("Decode error: {0}")]
    Decode(&'static str),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Io(#[source] io::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::EndOfStream
        } else {
            Error::Io(e)
        }
    }
}

impl Error {
    /// The fatal alert to send the peer for this error, if any.
    pub fn alert(&self) -> Option<AlertDescription> {
        let description = match self {
            Error::UnexpectedMessage | Error::UnexpectedRecordType(_) => {
                AlertDescription::UnexpectedMessage
            }
            Error::UnsupportedVersion => AlertDescription::ProtocolVersion,
            Error::UnsupportedNamedGroup
            | Error::UnsupportedCipherSuite
            | Error::UnsupportedSignatureAlgorithm => AlertDescription::HandshakeFailure,
            Error::IllegalLength(_) => AlertDescription::RecordOverflow,
            Error::IdentityElement | Error::IllegalParameter(_) => {
                AlertDescription::IllegalParameter
            }
            Error::Decode(_) => AlertDescription::DecodeError,
            Error::OutOfMemory | Error::Crypto(_) | Error::Config(_) => {
                AlertDescription::InternalError
            }
            Error::EndOfStream | Error::Io(_) => return None,
        };
        Some(description)
    }
}
