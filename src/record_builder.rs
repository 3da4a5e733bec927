//! Staging of outgoing handshake messages into a single record.
//!
//! Messages are written into a bounded buffer, their 24-bit length fields
//! back-patched when they end, and the whole buffer flushed as one record.
//! The transcript sees every message as soon as it is finished, so a
//! message can depend on the hash of the ones staged before it.

use std::io::Write;

use crate::buffer::Buf;
use crate::crypto::{Cipher, HASH_LEN, TAG_LEN};
use crate::message::{MessageType, HEADER_LEN};
use crate::record::{RecordHeader, MAX_CIPHERTEXT_LEN, MAX_PLAINTEXT_LEN};
use crate::transcript::Transcript;
use crate::types::ContentType;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Message {
    Idle,
    /// Offset of the open message's header in the staging buffer.
    Open(usize),
}

/// Stages handshake messages for one outgoing record.
#[derive(Debug)]
pub struct RecordBuilder<'t> {
    buf: Buf,
    message: Message,
    transcript: &'t mut Transcript,
}

impl<'t> RecordBuilder<'t> {
    pub fn new(transcript: &'t mut Transcript) -> Result<Self, Error> {
        Ok(RecordBuilder {
            buf: Buf::with_limit(MAX_PLAINTEXT_LEN)?,
            message: Message::Idle,
            transcript,
        })
    }

    /// Begin a handshake message by reserving its header.
    ///
    /// # Panics
    ///
    /// If another message is still open.
    pub fn start_message(&mut self, msg_type: MessageType) -> Result<(), Error> {
        if let Message::Open(_) = self.message {
            panic!("start_message({:?}) while a message is open", msg_type);
        }
        let start = self.buf.len();
        self.buf.push(msg_type.as_u8())?;
        self.buf.put_u24(0)?;
        self.message = Message::Open(start);
        Ok(())
    }

    /// Staging buffer to write the open message's body into.
    ///
    /// # Panics
    ///
    /// If no message is open.
    pub fn body(&mut self) -> &mut Buf {
        assert!(
            matches!(self.message, Message::Open(_)),
            "body() without an open message"
        );
        &mut self.buf
    }

    /// Finish the open message: patch its length and add it to the transcript.
    ///
    /// # Panics
    ///
    /// If no message is open.
    pub fn end_message(&mut self) -> Result<(), Error> {
        let Message::Open(start) = self.message else {
            panic!("end_message() without an open message");
        };
        let body_len = self.buf.len() - start - HEADER_LEN;
        self.buf.patch_u24(start + 1, body_len as u32)?;
        self.transcript.update(&self.buf[start..]);
        self.message = Message::Idle;
        Ok(())
    }

    /// Stage one complete message, with `f` writing its body.
    pub fn write_message<F>(&mut self, msg_type: MessageType, f: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Buf) -> Result<(), Error>,
    {
        self.start_message(msg_type)?;
        f(self.body())?;
        self.end_message()
    }

    /// Hash of the transcript including every finished message.
    pub fn transcript_hash(&self) -> [u8; HASH_LEN] {
        self.transcript.current_hash()
    }

    /// Number of staged bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Flush everything staged as one record and rewind.
    ///
    /// Without a cipher the record is written in the clear with
    /// `content_type`. With a cipher the staged bytes get `content_type` as
    /// their TLSInnerPlaintext type, are sealed, and go out as an
    /// application_data record whose header is the AAD.
    ///
    /// # Panics
    ///
    /// If a message is still open.
    pub fn write_record<W: Write + ?Sized>(
        &mut self,
        content_type: ContentType,
        writer: &mut W,
        cipher: Option<&mut Cipher>,
    ) -> Result<(), Error> {
        assert_eq!(
            self.message,
            Message::Idle,
            "write_record() while a message is open"
        );

        match cipher {
            None => {
                let header = RecordHeader::new(content_type, self.buf.len() as u16);
                header.write(writer)?;
                writer.write_all(&self.buf)?;
            }
            Some(cipher) => {
                self.buf.push(content_type.as_u8())?;

                let length = self.buf.len() + TAG_LEN;
                if length > MAX_CIPHERTEXT_LEN {
                    return Err(Error::IllegalLength(length));
                }
                let header = RecordHeader::new(ContentType::ApplicationData, length as u16);
                let aad = header.encode();

                let tag = cipher.seal(&aad, &mut self.buf)?;

                header.write(writer)?;
                writer.write_all(&self.buf)?;
                writer.write_all(&tag)?;
            }
        }
        writer.flush()?;

        trace!("Wrote {:?} record", content_type);
        self.reset();
        Ok(())
    }

    /// Discard everything staged.
    ///
    /// # Panics
    ///
    /// If a message is still open.
    pub fn reset(&mut self) {
        assert_eq!(self.message, Message::Idle, "reset() while a message is open");
        self.buf.clear();
    }
}
