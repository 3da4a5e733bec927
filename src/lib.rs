//! timpl, the server half of a TLS 1.3 handshake.
//!
//! The crate reads a ClientHello from any blocking [`std::io::Read`],
//! negotiates `TLS_AES_128_GCM_SHA256` over X25519, and writes the
//! ServerHello plus the encrypted EncryptedExtensions, Certificate,
//! CertificateVerify and Finished flight to a [`std::io::Write`]. What comes
//! after the server Finished is left to the caller, who gets the application
//! traffic keys in a [`HandshakeOutcome`].
//!
//! ```no_run
//! use std::net::TcpListener;
//! use std::sync::Arc;
//!
//! use timpl::{Config, Server};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let certificate: Vec<u8> = std::fs::read("server.der")?;
//! let config = Arc::new(Config::builder().certificate(certificate).build()?);
//!
//! let listener = TcpListener::bind("127.0.0.1:4433")?;
//! let (mut stream, _) = listener.accept()?;
//! let mut writer = stream.try_clone()?;
//!
//! let mut server = Server::new(config);
//! let outcome = server.accept(&mut stream, &mut writer)?;
//! println!("negotiated {:?}", outcome.cipher_suite);
//! # Ok(())
//! # }
//! ```
//!
//! Signing the CertificateVerify is delegated to a [`crypto::SigningKey`]
//! set on the [`ConfigBuilder`]. Without one the signature is left empty.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

#[macro_use]
extern crate log;

mod buffer;
pub use buffer::Buf;

mod config;
pub use config::{Config, ConfigBuilder};

pub mod crypto;

mod error;
pub use error::Error;

pub mod message;

pub mod record;

mod record_builder;
pub use record_builder::RecordBuilder;

mod rng;

mod server;
pub use server::{HandshakeOutcome, Server};

pub mod transcript;

mod types;
pub use types::{
    AlertDescription, AlertLevel, CipherSuite, ContentType, NamedGroup, ProtocolVersion,
    SignatureScheme,
};

#[cfg(test)]
mod test_vectors;
