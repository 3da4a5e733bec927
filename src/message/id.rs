use std::fmt;
use std::ops::Deref;

use arrayvec::ArrayVec;
use nom::bytes::complete::take;
use nom::error::{Error, ErrorKind};
use nom::number::complete::be_u8;
use nom::{Err, IResult};

use crate::buffer::Buf;

/// `legacy_session_id` of a ClientHello, echoed in the ServerHello.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionId(ArrayVec<u8, 32>);

impl SessionId {
    pub const MAX_LEN: usize = 32;

    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `None` if `data` is longer than 32 bytes.
    pub fn try_new(data: &[u8]) -> Option<Self> {
        ArrayVec::try_from(data).ok().map(SessionId)
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], SessionId> {
        let (input, len) = be_u8(input)?;
        if len as usize > Self::MAX_LEN {
            return Err(Err::Failure(Error::new(input, ErrorKind::LengthValue)));
        }
        let (input, data) = take(len as usize)(input)?;
        let mut id = ArrayVec::new();
        // Length checked above.
        id.extend(data.iter().copied());
        Ok((input, SessionId(id)))
    }

    pub fn serialize(&self, output: &mut Buf) -> Result<(), crate::Error> {
        output.push(self.0.len() as u8)?;
        output.extend_from_slice(&self.0)
    }
}

impl Deref for SessionId {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId(")?;
        for b in self.0.iter() {
            write!(f, "{:02x}", b)?;
        }
        write!(f, ")")
    }
}
