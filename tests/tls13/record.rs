use std::io::{self, Cursor, Write};

use timpl::{Config, ContentType, Error, Server};

use crate::common::*;

const RECORD_OVERFLOW: u8 = 22;
const UNEXPECTED_MESSAGE: u8 = 10;
const DECODE_ERROR: u8 = 50;

#[test]
fn oversized_record_consumes_only_the_header() {
    let _ = env_logger::try_init();

    let mut input = vec![0x16, 0x03, 0x01, 0x40, 0x00];
    input.extend_from_slice(&ClientHelloBuilder::new().message());
    let run = serve(config(), &input);
    assert!(matches!(run.result, Err(Error::IllegalLength(16384))));
    assert_eq!(run.output, alert(RECORD_OVERFLOW));
    assert_eq!(run.consumed, 5);
}

#[test]
fn largest_plaintext_length_is_read() {
    let _ = env_logger::try_init();

    // 16383 bytes of record body. Only the first message is a ClientHello,
    // the bytes after it make the record invalid, not too long.
    let mut record = ClientHelloBuilder::new().record();
    let padding = 16383 - (record.len() - 5);
    record.extend(std::iter::repeat(0).take(padding));
    record[3..5].copy_from_slice(&16383u16.to_be_bytes());

    let run = serve(config(), &record);
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));
}

#[test]
fn application_data_before_client_hello() {
    let _ = env_logger::try_init();

    let input = [0x17, 0x03, 0x03, 0x00, 0x04, 1, 2, 3, 4];
    let run = serve(config(), &input);
    assert!(matches!(
        run.result,
        Err(Error::UnexpectedRecordType(ContentType::ApplicationData))
    ));
    assert_eq!(run.output, alert(UNEXPECTED_MESSAGE));
    assert_eq!(run.consumed, 5);
}

#[test]
fn change_cipher_spec_before_client_hello() {
    let _ = env_logger::try_init();

    let run = serve(config(), &[0x14, 0x03, 0x03, 0x00, 0x01, 0x01]);
    assert!(matches!(
        run.result,
        Err(Error::UnexpectedRecordType(ContentType::ChangeCipherSpec))
    ));
    assert_eq!(run.output, alert(UNEXPECTED_MESSAGE));
}

#[test]
fn truncated_stream_sends_no_alert() {
    let _ = env_logger::try_init();

    let record = ClientHelloBuilder::new().record();
    for cut in [0, 3, 5, 9, record.len() - 1] {
        let run = serve(config(), &record[..cut]);
        assert!(
            matches!(run.result, Err(Error::EndOfStream)),
            "cut at {}: {:?}",
            cut,
            run.result.as_ref().err()
        );
        assert!(run.output.is_empty(), "cut at {}", cut);
    }
}

#[test]
fn record_too_short_for_handshake_header() {
    let _ = env_logger::try_init();

    let run = serve(config(), &[0x16, 0x03, 0x01, 0x00, 0x02, 0x01, 0x00]);
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));
}

#[test]
fn client_hello_split_over_two_records() {
    let _ = env_logger::try_init();

    let message = ClientHelloBuilder::new().message();
    let (first, second) = message.split_at(40);
    let mut input = handshake_record(first);
    input.extend_from_slice(&handshake_record(second));

    let run = serve(config(), &input);
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));
}

/// Accepts `budget` bytes, then fails every write.
struct FailingWriter {
    budget: usize,
    written: Vec<u8>,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.budget == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer gone"));
        }
        let n = buf.len().min(self.budget);
        self.budget -= n;
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn transport_write_failure_is_returned() {
    let _ = env_logger::try_init();

    let mut server = Server::new(config());
    let mut input = Cursor::new(ClientHelloBuilder::new().record());
    let mut writer = FailingWriter {
        budget: 20,
        written: Vec::new(),
    };

    let err = server.accept(&mut input, &mut writer).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.alert(), None);
    assert_eq!(writer.written.len(), 20);
}

#[test]
fn server_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Server>();
    assert_send::<Config>();
}
