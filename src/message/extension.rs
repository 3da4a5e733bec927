use nom::bytes::complete::take;
use nom::combinator::all_consuming;
use nom::number::complete::be_u16;
use nom::IResult;

use super::extensions::{
    KeyShareClientHello, SignatureAlgorithms, SupportedGroups, SupportedVersionsClientHello,
};
use crate::Error;

/// One ClientHello extension.
///
/// Types the server negotiates on are decoded. Everything else is handed
/// back as [`Extension::Unrecognized`] and is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension<'a> {
    SupportedVersions(SupportedVersionsClientHello<'a>),
    SupportedGroups(SupportedGroups<'a>),
    SignatureAlgorithms(SignatureAlgorithms<'a>),
    KeyShare(KeyShareClientHello<'a>),
    Unrecognized {
        extension_type: ExtensionType,
        data: &'a [u8],
    },
}

impl<'a> Extension<'a> {
    pub fn parse(input: &'a [u8]) -> IResult<&'a [u8], Extension<'a>> {
        let (input, extension_type) = ExtensionType::parse(input)?;
        let (input, extension_length) = be_u16(input)?;
        let (input, data) = take(extension_length as usize)(input)?;

        // A known body must fill the extension exactly.
        let extension = match extension_type {
            ExtensionType::SupportedVersions => {
                let (_, v) = all_consuming(SupportedVersionsClientHello::parse_u8)(data)?;
                Extension::SupportedVersions(v)
            }
            ExtensionType::SupportedGroups => {
                let (_, v) = all_consuming(SupportedGroups::parse_u16)(data)?;
                Extension::SupportedGroups(v)
            }
            ExtensionType::SignatureAlgorithms => {
                let (_, v) = all_consuming(SignatureAlgorithms::parse_u16)(data)?;
                Extension::SignatureAlgorithms(v)
            }
            ExtensionType::KeyShare => {
                let (_, v) = all_consuming(KeyShareClientHello::parse)(data)?;
                Extension::KeyShare(v)
            }
            _ => Extension::Unrecognized {
                extension_type,
                data,
            },
        };

        Ok((input, extension))
    }

    pub fn extension_type(&self) -> ExtensionType {
        match self {
            Extension::SupportedVersions(_) => ExtensionType::SupportedVersions,
            Extension::SupportedGroups(_) => ExtensionType::SupportedGroups,
            Extension::SignatureAlgorithms(_) => ExtensionType::SignatureAlgorithms,
            Extension::KeyShare(_) => ExtensionType::KeyShare,
            Extension::Unrecognized { extension_type, .. } => *extension_type,
        }
    }
}

/// Lazy iterator over a raw extensions block.
///
/// Each step decodes one `type | length | body` entry. A malformed entry
/// yields a single `Err(Error::Decode)` after which the iterator is done.
/// Cloning gives an independent cursor, so the block can be walked again.
#[derive(Debug, Clone)]
pub struct Extensions<'a> {
    rest: &'a [u8],
}

impl<'a> Extensions<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Extensions { rest: data }
    }
}

impl<'a> Iterator for Extensions<'a> {
    type Item = Result<Extension<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match Extension::parse(self.rest) {
            Ok((rest, extension)) => {
                self.rest = rest;
                Some(Ok(extension))
            }
            Err(_) => {
                self.rest = &[];
                Some(Err(Error::Decode("Malformed extension")))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionType {
    ServerName,
    MaxFragmentLength,
    StatusRequest,
    SupportedGroups,
    EcPointFormats,
    SignatureAlgorithms,
    UseSrtp,
    Heartbeat,
    ApplicationLayerProtocolNegotiation,
    SignedCertificateTimestamp,
    ClientCertificateType,
    ServerCertificateType,
    Padding,
    EncryptThenMac,
    ExtendedMasterSecret,
    CompressCertificate,
    RecordSizeLimit,
    SessionTicket,
    PreSharedKey,
    EarlyData,
    SupportedVersions,
    Cookie,
    PskKeyExchangeModes,
    CertificateAuthorities,
    OidFilters,
    PostHandshakeAuth,
    SignatureAlgorithmsCert,
    KeyShare,
    EncryptedClientHello,
    RenegotiationInfo,
    Unknown(u16),
}

impl ExtensionType {
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x0000 => ExtensionType::ServerName,
            0x0001 => ExtensionType::MaxFragmentLength,
            0x0005 => ExtensionType::StatusRequest,
            0x000A => ExtensionType::SupportedGroups,
            0x000B => ExtensionType::EcPointFormats,
            0x000D => ExtensionType::SignatureAlgorithms,
            0x000E => ExtensionType::UseSrtp,
            0x000F => ExtensionType::Heartbeat,
            0x0010 => ExtensionType::ApplicationLayerProtocolNegotiation,
            0x0012 => ExtensionType::SignedCertificateTimestamp,
            0x0013 => ExtensionType::ClientCertificateType,
            0x0014 => ExtensionType::ServerCertificateType,
            0x0015 => ExtensionType::Padding,
            0x0016 => ExtensionType::EncryptThenMac,
            0x0017 => ExtensionType::ExtendedMasterSecret,
            0x001B => ExtensionType::CompressCertificate,
            0x001C => ExtensionType::RecordSizeLimit,
            0x0023 => ExtensionType::SessionTicket,
            0x0029 => ExtensionType::PreSharedKey,
            0x002A => ExtensionType::EarlyData,
            0x002B => ExtensionType::SupportedVersions,
            0x002C => ExtensionType::Cookie,
            0x002D => ExtensionType::PskKeyExchangeModes,
            0x002F => ExtensionType::CertificateAuthorities,
            0x0030 => ExtensionType::OidFilters,
            0x0031 => ExtensionType::PostHandshakeAuth,
            0x0032 => ExtensionType::SignatureAlgorithmsCert,
            0x0033 => ExtensionType::KeyShare,
            0xFE0D => ExtensionType::EncryptedClientHello,
            0xFF01 => ExtensionType::RenegotiationInfo,
            _ => ExtensionType::Unknown(value),
        }
    }

    pub fn as_u16(&self) -> u16 {
        match self {
            ExtensionType::ServerName => 0x0000,
            ExtensionType::MaxFragmentLength => 0x0001,
            ExtensionType::StatusRequest => 0x0005,
            ExtensionType::SupportedGroups => 0x000A,
            ExtensionType::EcPointFormats => 0x000B,
            ExtensionType::SignatureAlgorithms => 0x000D,
            ExtensionType::UseSrtp => 0x000E,
            ExtensionType::Heartbeat => 0x000F,
            ExtensionType::ApplicationLayerProtocolNegotiation => 0x0010,
            ExtensionType::SignedCertificateTimestamp => 0x0012,
            ExtensionType::ClientCertificateType => 0x0013,
            ExtensionType::ServerCertificateType => 0x0014,
            ExtensionType::Padding => 0x0015,
            ExtensionType::EncryptThenMac => 0x0016,
            ExtensionType::ExtendedMasterSecret => 0x0017,
            ExtensionType::CompressCertificate => 0x001B,
            ExtensionType::RecordSizeLimit => 0x001C,
            ExtensionType::SessionTicket => 0x0023,
            ExtensionType::PreSharedKey => 0x0029,
            ExtensionType::EarlyData => 0x002A,
            ExtensionType::SupportedVersions => 0x002B,
            ExtensionType::Cookie => 0x002C,
            ExtensionType::PskKeyExchangeModes => 0x002D,
            ExtensionType::CertificateAuthorities => 0x002F,
            ExtensionType::OidFilters => 0x0030,
            ExtensionType::PostHandshakeAuth => 0x0031,
            ExtensionType::SignatureAlgorithmsCert => 0x0032,
            ExtensionType::KeyShare => 0x0033,
            ExtensionType::EncryptedClientHello => 0xFE0D,
            ExtensionType::RenegotiationInfo => 0xFF01,
            ExtensionType::Unknown(value) => *value,
        }
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], ExtensionType> {
        let (input, value) = be_u16(input)?;
        Ok((input, ExtensionType::from_u16(value)))
    }
}
