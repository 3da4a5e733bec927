use super::extensions::{KeyShareEntry, SupportedVersionsServerHello};
use super::{ExtensionType, MessageType, Random, SessionId, HEADER_LEN, HELLO_RETRY_REQUEST_RANDOM};
use crate::buffer::Buf;
use crate::types::{CipherSuite, NamedGroup, ProtocolVersion};
use crate::Error;

/// key_share content of a ServerHello.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKeyShare<'a> {
    /// The server's share for the selected group.
    Entry(KeyShareEntry<'a>),
    /// HelloRetryRequest: only the group the client should retry with.
    SelectedGroup(NamedGroup),
}

impl ServerKeyShare<'_> {
    fn encoded_len(&self) -> usize {
        match self {
            ServerKeyShare::Entry(entry) => entry.encoded_len(),
            ServerKeyShare::SelectedGroup(_) => 2,
        }
    }

    fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        match self {
            ServerKeyShare::Entry(entry) => entry.serialize(output),
            ServerKeyShare::SelectedGroup(group) => output.put_u16(group.as_u16()),
        }
    }
}

/// ServerHello (RFC 8446 Section 4.1.3).
///
/// Always carries exactly two extensions, key_share followed by
/// supported_versions, so the encoded size is known before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHello<'a> {
    pub random: Random,
    pub legacy_session_id_echo: SessionId,
    pub cipher_suite: CipherSuite,
    pub key_share: ServerKeyShare<'a>,
}

impl<'a> ServerHello<'a> {
    pub fn new(
        random: Random,
        legacy_session_id_echo: SessionId,
        cipher_suite: CipherSuite,
        key_share: KeyShareEntry<'a>,
    ) -> Self {
        ServerHello {
            random,
            legacy_session_id_echo,
            cipher_suite,
            key_share: ServerKeyShare::Entry(key_share),
        }
    }

    /// A HelloRetryRequest asking the client for a share in `group`.
    pub fn hello_retry_request(
        legacy_session_id_echo: SessionId,
        cipher_suite: CipherSuite,
        group: NamedGroup,
    ) -> Self {
        ServerHello {
            random: HELLO_RETRY_REQUEST_RANDOM,
            legacy_session_id_echo,
            cipher_suite,
            key_share: ServerKeyShare::SelectedGroup(group),
        }
    }

    pub fn is_hello_retry_request(&self) -> bool {
        self.random.is_hello_retry_request()
    }

    fn extensions_len(&self) -> usize {
        (2 + 2 + self.key_share.encoded_len()) + (2 + 2 + SupportedVersionsServerHello::ENCODED_LEN)
    }

    /// Length of the body, without the handshake header.
    pub fn body_len(&self) -> usize {
        2 // legacy_version
            + 32 // random
            + 1 + self.legacy_session_id_echo.len()
            + 2 // cipher_suite
            + 1 // legacy_compression_method
            + 2 + self.extensions_len()
    }

    /// Length of the full handshake message.
    pub fn message_len(&self) -> usize {
        HEADER_LEN + self.body_len()
    }

    /// Write the full handshake message, header included.
    pub fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        output.push(MessageType::ServerHello.as_u8())?;
        output.put_u24(self.body_len() as u32)?;

        output.put_u16(ProtocolVersion::TLS1_2.as_u16())?;
        self.random.serialize(output)?;
        self.legacy_session_id_echo.serialize(output)?;
        output.put_u16(self.cipher_suite.as_u16())?;
        output.push(0)?;

        output.put_u16(self.extensions_len() as u16)?;

        output.put_u16(ExtensionType::KeyShare.as_u16())?;
        output.put_u16(self.key_share.encoded_len() as u16)?;
        self.key_share.serialize(output)?;

        let supported_versions = SupportedVersionsServerHello {
            selected_version: ProtocolVersion::TLS1_3,
        };
        output.put_u16(ExtensionType::SupportedVersions.as_u16())?;
        output.put_u16(SupportedVersionsServerHello::ENCODED_LEN as u16)?;
        supported_versions.serialize(output)?;

        Ok(())
    }
}
