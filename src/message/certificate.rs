use crate::buffer::Buf;
use crate::Error;

/// Certificate (RFC 8446 Section 4.4.2) carrying one X.509 certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Certificate<'a> {
    pub cert_data: &'a [u8],
}

impl<'a> Certificate<'a> {
    pub fn new(cert_data: &'a [u8]) -> Self {
        Certificate { cert_data }
    }

    pub fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        let cert_len = self.cert_data.len();
        // cert_data length, data, empty extensions
        let entry_len = 3 + cert_len + 2;
        if entry_len > 0xFF_FFFF {
            return Err(Error::IllegalLength(cert_len));
        }

        // Empty certificate_request_context.
        output.push(0)?;
        output.put_u24(entry_len as u32)?;
        output.put_u24(cert_len as u32)?;
        output.extend_from_slice(self.cert_data)?;
        output.put_u16(0)
    }
}
