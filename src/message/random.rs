use nom::bytes::complete::take;
use nom::IResult;

use crate::buffer::Buf;
use crate::rng::SeededRng;

/// ServerHello random marking a HelloRetryRequest, SHA-256("HelloRetryRequest").
pub const HELLO_RETRY_REQUEST_RANDOM: Random = Random([
    0xCF, 0x21, 0xAD, 0x74, 0xE5, 0x9A, 0x61, 0x11, 0xBE, 0x1D, 0x8C, 0x02, 0x1E, 0x65, 0xB8, 0x91,
    0xC2, 0xA2, 0x11, 0x16, 0x7A, 0xBB, 0x8C, 0x5E, 0x07, 0x9E, 0x09, 0xE2, 0xC8, 0xA8, 0x33, 0x9C,
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Random(pub [u8; 32]);

impl Random {
    pub(crate) fn new(rng: &mut SeededRng) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill(&mut bytes);
        Random(bytes)
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], Random> {
        let (input, data) = take(32_usize)(input)?;
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(data);
        Ok((input, Random(bytes)))
    }

    pub fn serialize(&self, output: &mut Buf) -> Result<(), crate::Error> {
        output.extend_from_slice(&self.0)
    }

    pub fn is_hello_retry_request(&self) -> bool {
        *self == HELLO_RETRY_REQUEST_RANDOM
    }
}
