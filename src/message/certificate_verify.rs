use crate::buffer::Buf;
use crate::types::SignatureScheme;
use crate::Error;

const SERVER_CONTEXT: &[u8] = b"TLS 1.3, server CertificateVerify";

/// CertificateVerify (RFC 8446 Section 4.4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateVerify<'a> {
    pub scheme: SignatureScheme,
    pub signature: &'a [u8],
}

impl<'a> CertificateVerify<'a> {
    pub fn new(scheme: SignatureScheme, signature: &'a [u8]) -> Self {
        CertificateVerify { scheme, signature }
    }

    /// The bytes a server signs: 64 spaces, the context string, a zero
    /// byte and the transcript hash through Certificate.
    pub fn signed_content(transcript_hash: &[u8]) -> Vec<u8> {
        let mut content = Vec::with_capacity(64 + SERVER_CONTEXT.len() + 1 + transcript_hash.len());
        content.extend_from_slice(&[0x20; 64]);
        content.extend_from_slice(SERVER_CONTEXT);
        content.push(0);
        content.extend_from_slice(transcript_hash);
        content
    }

    pub fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        let len = u16::try_from(self.signature.len())
            .map_err(|_| Error::IllegalLength(self.signature.len()))?;
        output.put_u16(self.scheme.as_u16())?;
        output.put_u16(len)?;
        output.extend_from_slice(self.signature)
    }
}
