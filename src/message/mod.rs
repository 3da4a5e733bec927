//! TLS 1.3 handshake message codecs (RFC 8446 Section 4).
//!
//! The only message this server decodes is ClientHello. Everything is parsed
//! in place: decoded types borrow from the buffer they were read into.

mod certificate;
mod certificate_verify;
mod client_hello;
mod encrypted_extensions;
mod extension;
pub mod extensions;
mod finished;
mod handshake;
mod id;
mod random;
mod server_hello;

pub use certificate::Certificate;
pub use certificate_verify::CertificateVerify;
pub use client_hello::ClientHello;
pub use encrypted_extensions::EncryptedExtensions;
pub use extension::{Extension, ExtensionType, Extensions};
pub use extensions::{CodeList, KeyShareClientHello, KeyShareEntry};
pub use finished::Finished;
pub use handshake::{read_client_hello, Header, MessageType, HEADER_LEN};
pub use id::SessionId;
pub use random::{Random, HELLO_RETRY_REQUEST_RANDOM};
pub use server_hello::{ServerHello, ServerKeyShare};
