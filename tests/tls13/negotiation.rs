use std::sync::Arc;

use timpl::{Config, Error, SignatureScheme};

use crate::common::*;

const HANDSHAKE_FAILURE: u8 = 40;
const ILLEGAL_PARAMETER: u8 = 47;
const DECODE_ERROR: u8 = 50;
const PROTOCOL_VERSION: u8 = 70;
const UNEXPECTED_MESSAGE: u8 = 10;

#[test]
fn no_common_cipher_suite() {
    let _ = env_logger::try_init();

    let client_hello = ClientHelloBuilder::new().cipher_suites(&[0x1302, 0x1303]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedCipherSuite)));
    assert_eq!(run.output, alert(HANDSHAKE_FAILURE));
}

#[test]
fn tls12_only_client() {
    let _ = env_logger::try_init();

    let client_hello = ClientHelloBuilder::new().supported_versions(&[TLS12]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedVersion)));
    assert_eq!(run.output, alert(PROTOCOL_VERSION));

    let client_hello = ClientHelloBuilder::new().without_extension(EXT_SUPPORTED_VERSIONS);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedVersion)));
    assert_eq!(run.output, alert(PROTOCOL_VERSION));
}

#[test]
fn no_common_group() {
    let _ = env_logger::try_init();

    let client_hello = ClientHelloBuilder::new()
        .supported_groups(&[SECP256R1])
        .key_shares(&[(SECP256R1, &[4u8; 65][..])]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedNamedGroup)));
    assert_eq!(run.output, alert(HANDSHAKE_FAILURE));
}

#[test]
fn no_common_signature_scheme() {
    let _ = env_logger::try_init();

    let config = Arc::new(
        Config::builder()
            .certificate(CERTIFICATE)
            .signature_schemes(&[SignatureScheme::ED25519])
            .build()
            .expect("config"),
    );
    let run = serve(config, &ClientHelloBuilder::new().record());
    assert!(matches!(run.result, Err(Error::UnsupportedSignatureAlgorithm)));
    assert_eq!(run.output, alert(HANDSHAKE_FAILURE));
}

#[test]
fn missing_key_share_for_supported_group() {
    let _ = env_logger::try_init();

    let client_hello = ClientHelloBuilder::new().key_shares(&[(SECP256R1, &[4u8; 65][..])]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedNamedGroup)));
    assert_eq!(run.output, alert(HANDSHAKE_FAILURE));

    let client_hello = ClientHelloBuilder::new().without_extension(EXT_KEY_SHARE);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedNamedGroup)));
}

#[test]
fn checks_run_in_fixed_order() {
    let _ = env_logger::try_init();

    // Everything wrong: the version is reported.
    let client_hello = ClientHelloBuilder::new()
        .supported_versions(&[TLS12])
        .supported_groups(&[SECP256R1])
        .signature_algorithms(&[0x0201])
        .key_shares(&[(SECP256R1, &[4u8; 65][..])]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedVersion)));

    // Groups before signature algorithms.
    let client_hello = ClientHelloBuilder::new()
        .supported_groups(&[SECP256R1])
        .signature_algorithms(&[0x0201]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedNamedGroup)));

    // Signature algorithms before the key share.
    let client_hello = ClientHelloBuilder::new()
        .signature_algorithms(&[0x0201])
        .without_extension(EXT_KEY_SHARE);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedSignatureAlgorithm)));

    // The cipher suite comes before any extension.
    let client_hello = ClientHelloBuilder::new()
        .cipher_suites(&[0x1303])
        .supported_versions(&[TLS12]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::UnsupportedCipherSuite)));
}

#[test]
fn low_order_key_share() {
    let _ = env_logger::try_init();

    let client_hello = ClientHelloBuilder::new().key_shares(&[(X25519, &[0u8; 32][..])]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::IdentityElement)));

    // The ServerHello is already out when the exchange fails.
    let records = records(&run.output);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0[0], 0x16);
    assert_eq!(run.output[run.output.len() - 7..], alert(ILLEGAL_PARAMETER)[..]);
}

#[test]
fn truncated_extension_is_a_decode_error() {
    let _ = env_logger::try_init();

    let builder = ClientHelloBuilder::new();
    let mut extensions = builder.extensions_block();
    // Claims 8 bytes of body, has 2.
    extensions.extend_from_slice(&[0x00, 0x15, 0x00, 0x08, 0x00, 0x00]);
    let body = builder.body_with_extensions(&extensions);
    let record = handshake_record(&handshake_message(1, &body));

    let run = serve(config(), &record);
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));
}

#[test]
fn malformed_known_extension_is_a_decode_error() {
    let _ = env_logger::try_init();

    // Odd length group list.
    let client_hello =
        ClientHelloBuilder::new().extension(EXT_SUPPORTED_GROUPS, &[0, 3, 0, 0x1d, 0]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));
}

#[test]
fn non_client_hello_message() {
    let _ = env_logger::try_init();

    let body = ClientHelloBuilder::new().body_with_extensions(&[]);
    let record = handshake_record(&handshake_message(2, &body));
    let run = serve(config(), &record);
    assert!(matches!(run.result, Err(Error::UnexpectedMessage)));
    assert_eq!(run.output, alert(UNEXPECTED_MESSAGE));
}

#[test]
fn session_id_over_32_bytes() {
    let _ = env_logger::try_init();

    let client_hello = ClientHelloBuilder::new().session_id(&[7; 33]);
    let run = serve(config(), &client_hello.record());
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));
}

#[test]
fn wrong_length_key_share_fails_before_server_hello() {
    let _ = env_logger::try_init();

    for len in [31, 33] {
        let share = vec![9u8; len];
        let client_hello = ClientHelloBuilder::new().key_shares(&[(X25519, &share[..])]);
        let run = serve(config(), &client_hello.record());
        assert!(matches!(run.result, Err(Error::IllegalParameter(_))));
        assert_eq!(run.output, alert(ILLEGAL_PARAMETER));
    }
}

#[test]
fn repeated_extension_is_a_decode_error() {
    let _ = env_logger::try_init();

    let builder = ClientHelloBuilder::new();

    // A second supported_versions, offering only TLS 1.2.
    let mut extensions = builder.extensions_block();
    extensions.extend_from_slice(&[0x00, 0x2b, 0x00, 0x03, 0x02, 0x03, 0x03]);
    let body = builder.body_with_extensions(&extensions);
    let run = serve(config(), &handshake_record(&handshake_message(1, &body)));
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));

    // Repeats of extensions the server does not look at count too.
    let mut extensions = builder.extensions_block();
    extensions.extend_from_slice(&[0xfe, 0x0d, 0x00, 0x00, 0xfe, 0x0d, 0x00, 0x00]);
    let body = builder.body_with_extensions(&extensions);
    let run = serve(config(), &handshake_record(&handshake_message(1, &body)));
    assert!(matches!(run.result, Err(Error::Decode(_))));
    assert_eq!(run.output, alert(DECODE_ERROR));
}
