use crate::buffer::Buf;
use crate::Error;

/// EncryptedExtensions (RFC 8446 Section 4.3.1). This server sends none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncryptedExtensions;

impl EncryptedExtensions {
    pub fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        output.put_u16(0)
    }
}
