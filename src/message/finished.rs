use crate::buffer::Buf;
use crate::crypto::HASH_LEN;
use crate::Error;

/// Finished (RFC 8446 Section 4.4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    pub verify_data: [u8; HASH_LEN],
}

impl Finished {
    pub fn new(verify_data: [u8; HASH_LEN]) -> Self {
        Finished { verify_data }
    }

    pub fn serialize(&self, output: &mut Buf) -> Result<(), Error> {
        output.extend_from_slice(&self.verify_data)
    }
}
