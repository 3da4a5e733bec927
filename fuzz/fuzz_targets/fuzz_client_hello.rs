#![no_main]

//! Fuzz target for the server's ClientHello path.
//!
//! The input is fed to a full `accept` twice: once as raw transport bytes,
//! which mostly exercises the record header checks, and once wrapped in a
//! handshake record and handshake header so that the ClientHello decoder
//! and negotiation see the data.
//!
//! TLS record header:
//! - ContentType: 1 byte
//! - ProtocolVersion: 2 bytes
//! - Length: 2 bytes (at most 2^14 - 1 accepted here)

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;
use std::sync::{Arc, OnceLock};

use timpl::{Config, Server};

/// Largest record body the server accepts.
const MAX_RECORD_BODY: usize = 16383;

fn config() -> Arc<Config> {
    static CONFIG: OnceLock<Arc<Config>> = OnceLock::new();
    CONFIG
        .get_or_init(|| {
            let config = Config::builder()
                .certificate(vec![0x30, 0x00])
                .rng_seed(0)
                .build()
                .expect("fuzz config");
            Arc::new(config)
        })
        .clone()
}

fn accept(input: &[u8]) {
    let mut server = Server::new(config());
    let mut output = Vec::new();
    let _ = server.accept(&mut Cursor::new(input), &mut output);
}

fuzz_target!(|data: &[u8]| {
    accept(data);

    // Handshake record around a ClientHello header around the input.
    let body_len = data.len().min(MAX_RECORD_BODY - 4);
    let mut record = Vec::with_capacity(9 + body_len);
    record.extend_from_slice(&[22, 0x03, 0x01]);
    record.extend_from_slice(&((body_len + 4) as u16).to_be_bytes());
    record.push(1); // client_hello
    record.extend_from_slice(&(body_len as u32).to_be_bytes()[1..]);
    record.extend_from_slice(&data[..body_len]);

    accept(&record);
});
