//! Server side of the TLS 1.3 handshake.
//!
//! [`Server::accept`] reads one ClientHello from the transport, negotiates
//! parameters against the [`Config`], answers with a ServerHello and the
//! encrypted EncryptedExtensions, Certificate, CertificateVerify and Finished
//! flight. The client's second flight is left to the caller, who gets the
//! application traffic keys back in the [`HandshakeOutcome`].
//!
//! Internally the handshake is a small state machine. Each state does one
//! step of work and names its successor. Any error ends the machine in
//! `Fatal`, after a best effort plaintext alert to the peer.

use std::io::{Read, Write};
use std::sync::Arc;

use arrayvec::ArrayVec;

use crate::buffer::Buf;
use crate::config::Config;
use crate::crypto::{
    finished_verify_data, Cipher, HandshakeSecrets, KeyExchange, KeySchedule, TrafficKeys,
};
use crate::message::{
    read_client_hello, Certificate, CertificateVerify, ClientHello, EncryptedExtensions,
    Extension, Finished, KeyShareEntry, MessageType, Random, ServerHello, SessionId,
    HEADER_LEN as HANDSHAKE_HEADER_LEN,
};
use crate::record::{self, RecordHeader, MAX_PLAINTEXT_LEN};
use crate::record_builder::RecordBuilder;
use crate::rng::SeededRng;
use crate::transcript::{HashingReader, HashingWriter, Transcript};
use crate::types::{CipherSuite, ContentType, NamedGroup, ProtocolVersion, SignatureScheme};
use crate::Error;

/// A TLS 1.3 server endpoint.
///
/// One `Server` handles one connection at a time. The configuration is
/// shared, so creating a `Server` per accepted socket is cheap.
#[derive(Debug)]
pub struct Server {
    config: Arc<Config>,
    rng: SeededRng,
    state: State,
}

/// Result of a completed server handshake.
///
/// The server Finished has been sent. The client Finished has not been read,
/// that and all application data is up to the caller.
#[derive(Debug)]
pub struct HandshakeOutcome {
    pub cipher_suite: CipherSuite,
    pub named_group: NamedGroup,
    pub signature_scheme: SignatureScheme,
    /// Session id the client sent, echoed in the ServerHello.
    pub client_session_id: SessionId,
    /// Keys protecting records from the client, starting after its Finished.
    pub client_application_keys: TrafficKeys,
    /// Keys protecting application data records sent by the server.
    pub server_application_keys: TrafficKeys,
}

impl HandshakeOutcome {
    /// Cipher for opening application data from the client.
    pub fn client_cipher(&self) -> Cipher {
        Cipher::new(&self.client_application_keys)
    }

    /// Cipher for sealing application data to the client.
    pub fn server_cipher(&self) -> Cipher {
        Cipher::new(&self.server_application_keys)
    }
}

impl Server {
    /// Create a server from a shared configuration.
    pub fn new(config: Arc<Config>) -> Server {
        let rng = SeededRng::new(config.rng_seed());
        Server {
            config,
            rng,
            state: State::AwaitClientHello,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the server handshake over a blocking transport.
    ///
    /// Reads exactly one ClientHello record and writes the ServerHello record
    /// followed by one encrypted handshake record. On error a fatal alert is
    /// written when the error has one, then the error is returned. The
    /// transport is never closed.
    pub fn accept<R, W>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<HandshakeOutcome, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.accept_with(reader, writer, None, None)
    }

    /// Like [`Server::accept`], with the server random and ephemeral key
    /// fixed up front instead of drawn from the rng.
    fn accept_with<R, W>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
        server_random: Option<Random>,
        key_exchange: Option<KeyExchange>,
    ) -> Result<HandshakeOutcome, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.state = State::AwaitClientHello;

        let result = {
            let mut hs = Handshake {
                config: &self.config,
                rng: &mut self.rng,
                reader: &mut *reader,
                writer: &mut *writer,
                transcript: Transcript::new(),
                record: None,
                negotiated: None,
                server_random,
                key_exchange,
                key_schedule: None,
                handshake_secrets: None,
                outcome: None,
            };
            drive(&mut self.state, &mut hs)
        };

        if let Err(e) = &result {
            let prev_state = self.state;
            self.state = State::Fatal;
            trace!("{:?} -> {:?}", prev_state, self.state);

            match e.alert() {
                Some(description) => {
                    warn!("Handshake failed: {}, sending {:?} alert", e, description);
                    if let Err(alert_err) = record::write_alert(writer, description) {
                        debug!("Failed to send alert: {}", alert_err);
                    }
                }
                None => warn!("Handshake failed: {}", e),
            }
        }

        result
    }

    #[cfg(test)]
    pub(crate) fn state_name(&self) -> &'static str {
        self.state.name()
    }
}

fn drive<R, W>(state: &mut State, hs: &mut Handshake<'_, R, W>) -> Result<HandshakeOutcome, Error>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    loop {
        if *state == State::Done {
            return hs
                .outcome
                .take()
                .ok_or_else(|| Error::Crypto("Handshake done without an outcome".to_string()));
        }

        let prev_state = *state;
        let new_state = prev_state.make_progress(hs)?;
        trace!("{:?} -> {:?}", prev_state, new_state);
        *state = new_state;
    }
}

/// Parameters agreed from the ClientHello.
#[derive(Debug)]
struct Negotiated {
    cipher_suite: CipherSuite,
    named_group: NamedGroup,
    signature_scheme: SignatureScheme,
    session_id: SessionId,
    peer_key: ArrayVec<u8, 32>,
}

/// Per connection state of one `accept` call.
struct Handshake<'a, R: ?Sized, W: ?Sized> {
    config: &'a Config,
    rng: &'a mut SeededRng,
    reader: &'a mut R,
    writer: &'a mut W,
    transcript: Transcript,
    record: Option<RecordHeader>,
    negotiated: Option<Negotiated>,
    server_random: Option<Random>,
    key_exchange: Option<KeyExchange>,
    key_schedule: Option<KeySchedule>,
    handshake_secrets: Option<HandshakeSecrets>,
    outcome: Option<HandshakeOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitClientHello,
    NegotiateParameters,
    EmitServerHello,
    DeriveHandshakeSecrets,
    EmitEncryptedFlight,
    Done,
    Fatal,
}

impl State {
    #[cfg(test)]
    fn name(&self) -> &'static str {
        match self {
            State::AwaitClientHello => "AwaitClientHello",
            State::NegotiateParameters => "NegotiateParameters",
            State::EmitServerHello => "EmitServerHello",
            State::DeriveHandshakeSecrets => "DeriveHandshakeSecrets",
            State::EmitEncryptedFlight => "EmitEncryptedFlight",
            State::Done => "Done",
            State::Fatal => "Fatal",
        }
    }

    fn make_progress<R, W>(self, hs: &mut Handshake<'_, R, W>) -> Result<Self, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        match self {
            State::AwaitClientHello => self.await_client_hello(hs),
            State::NegotiateParameters => self.negotiate_parameters(hs),
            State::EmitServerHello => self.emit_server_hello(hs),
            State::DeriveHandshakeSecrets => self.derive_handshake_secrets(hs),
            State::EmitEncryptedFlight => self.emit_encrypted_flight(hs),
            State::Done | State::Fatal => unreachable!("{:?} has no successor", self),
        }
    }

    fn await_client_hello<R, W>(self, hs: &mut Handshake<'_, R, W>) -> Result<Self, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let header = RecordHeader::read(&mut *hs.reader)?;
        let length = header.length as usize;

        if length > MAX_PLAINTEXT_LEN {
            return Err(Error::IllegalLength(length));
        }
        if header.content_type != ContentType::Handshake {
            return Err(Error::UnexpectedRecordType(header.content_type));
        }
        if length < HANDSHAKE_HEADER_LEN {
            return Err(Error::Decode("Record too short for a handshake message"));
        }

        trace!("ClientHello record of {} bytes", length);
        hs.record = Some(header);
        Ok(State::NegotiateParameters)
    }

    fn negotiate_parameters<R, W>(self, hs: &mut Handshake<'_, R, W>) -> Result<Self, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let record = hs
            .record
            .take()
            .ok_or_else(|| Error::Crypto("No record header".to_string()))?;
        let record_len = record.length as usize;

        let mut body = Buf::with_limit(record_len - HANDSHAKE_HEADER_LEN)?;
        let mut limited = (&mut *hs.reader).take(record_len as u64);

        let client_hello = {
            let mut hashing = HashingReader::new(&mut limited, &mut hs.transcript);
            read_client_hello(&mut hashing, &mut body)?
        };

        // One handshake message per record, no coalescing or fragmentation.
        if limited.limit() != 0 {
            return Err(Error::Decode("Record has bytes after the ClientHello"));
        }

        let negotiated = negotiate(hs.config, &client_hello)?;
        debug!(
            "ClientHello processed: cipher_suite={:?}, group={:?}, signature_scheme={:?}",
            negotiated.cipher_suite, negotiated.named_group, negotiated.signature_scheme
        );

        if hs.key_exchange.is_none() {
            hs.key_exchange = Some(KeyExchange::generate(negotiated.named_group, hs.rng)?);
        }
        hs.negotiated = Some(negotiated);

        Ok(State::EmitServerHello)
    }

    fn emit_server_hello<R, W>(self, hs: &mut Handshake<'_, R, W>) -> Result<Self, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let negotiated = hs
            .negotiated
            .as_ref()
            .ok_or_else(|| Error::Crypto("No negotiated parameters".to_string()))?;
        let key_exchange = hs
            .key_exchange
            .as_ref()
            .ok_or_else(|| Error::Crypto("No key exchange".to_string()))?;

        let random = match hs.server_random.take() {
            Some(random) => random,
            None => Random::new(hs.rng),
        };

        let server_hello = ServerHello::new(
            random,
            negotiated.session_id.clone(),
            negotiated.cipher_suite,
            KeyShareEntry::new(key_exchange.group(), key_exchange.public_key()),
        );

        let mut message = Buf::with_limit(server_hello.message_len())?;
        server_hello.serialize(&mut message)?;

        let header = RecordHeader::new(ContentType::Handshake, message.len() as u16);
        header.write(&mut *hs.writer)?;
        HashingWriter::new(&mut *hs.writer, &mut hs.transcript).write_all(&message)?;
        hs.writer.flush()?;

        debug!("Sent ServerHello");
        Ok(State::DeriveHandshakeSecrets)
    }

    fn derive_handshake_secrets<R, W>(self, hs: &mut Handshake<'_, R, W>) -> Result<Self, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let negotiated = hs
            .negotiated
            .as_ref()
            .ok_or_else(|| Error::Crypto("No negotiated parameters".to_string()))?;
        let key_exchange = hs
            .key_exchange
            .take()
            .ok_or_else(|| Error::Crypto("No key exchange".to_string()))?;

        let shared_secret = key_exchange.complete(&negotiated.peer_key)?;

        let mut key_schedule = KeySchedule::new()?;
        let secrets = key_schedule
            .derive_handshake_secrets(shared_secret.as_ref(), &hs.transcript.current_hash())?;

        hs.key_schedule = Some(key_schedule);
        hs.handshake_secrets = Some(secrets);
        Ok(State::EmitEncryptedFlight)
    }

    fn emit_encrypted_flight<R, W>(self, hs: &mut Handshake<'_, R, W>) -> Result<Self, Error>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let config = hs.config;
        let negotiated = hs
            .negotiated
            .as_ref()
            .ok_or_else(|| Error::Crypto("No negotiated parameters".to_string()))?;
        let secrets = hs
            .handshake_secrets
            .as_ref()
            .ok_or_else(|| Error::Crypto("No handshake secrets".to_string()))?;
        let scheme = negotiated.signature_scheme;

        let mut cipher = Cipher::new(&secrets.server_keys);
        let mut builder = RecordBuilder::new(&mut hs.transcript)?;

        builder.write_message(MessageType::EncryptedExtensions, |body| {
            EncryptedExtensions.serialize(body)
        })?;

        builder
            .write_message(MessageType::Certificate, |body| {
                Certificate::new(config.certificate()).serialize(body)
            })
            .map_err(flight_overflow)?;

        let mut signature = Vec::new();
        match config.signing_key() {
            Some(key) => {
                let content = CertificateVerify::signed_content(&builder.transcript_hash());
                key.sign(scheme, &content, &mut signature)
                    .map_err(|e| Error::Crypto(format!("CertificateVerify signing: {}", e)))?;
            }
            None => debug!("No signing key, sending empty CertificateVerify signature"),
        }
        builder
            .write_message(MessageType::CertificateVerify, |body| {
                CertificateVerify::new(scheme, &signature).serialize(body)
            })
            .map_err(flight_overflow)?;

        let verify_data = finished_verify_data(&secrets.server_secret, &builder.transcript_hash())?;
        builder
            .write_message(MessageType::Finished, |body| {
                Finished::new(verify_data).serialize(body)
            })
            .map_err(flight_overflow)?;

        builder
            .write_record(ContentType::Handshake, &mut *hs.writer, Some(&mut cipher))
            .map_err(flight_overflow)?;
        drop(builder);
        debug!("Sent encrypted flight");

        let key_schedule = hs
            .key_schedule
            .as_mut()
            .ok_or_else(|| Error::Crypto("No key schedule".to_string()))?;
        let application = key_schedule.derive_application_secrets(&hs.transcript.current_hash())?;

        hs.outcome = Some(HandshakeOutcome {
            cipher_suite: negotiated.cipher_suite,
            named_group: negotiated.named_group,
            signature_scheme: scheme,
            client_session_id: negotiated.session_id.clone(),
            client_application_keys: application.client_keys.clone(),
            server_application_keys: application.server_keys.clone(),
        });

        Ok(State::Done)
    }
}

/// Overflowing the staged flight is an internal error, not a record_overflow.
fn flight_overflow(e: Error) -> Error {
    match e {
        Error::IllegalLength(len) => {
            Error::Crypto(format!("Encrypted flight of {} bytes does not fit a record", len))
        }
        e => e,
    }
}

/// Pick the parameters for this connection.
///
/// The cipher suite is checked first, then extensions are walked once and
/// the results checked as version, groups, signature algorithms, key share.
/// A client without a key share for a supported group would get a
/// HelloRetryRequest from a full implementation, here it is a failure.
fn negotiate(config: &Config, client_hello: &ClientHello<'_>) -> Result<Negotiated, Error> {
    let cipher_suite = client_hello
        .cipher_suites
        .first_supported(config.cipher_suites())
        .ok_or(Error::UnsupportedCipherSuite)?;

    let mut offers_tls13 = false;
    let mut named_group = None;
    let mut signature_scheme = None;
    let mut key_share = None;
    let mut seen = Vec::new();

    for extension in client_hello.extensions() {
        let extension = extension?;

        let extension_type = extension.extension_type();
        if seen.contains(&extension_type) {
            return Err(Error::Decode("Repeated ClientHello extension"));
        }
        seen.push(extension_type);

        match extension {
            Extension::SupportedVersions(versions) => {
                offers_tls13 = versions.contains(ProtocolVersion::TLS1_3);
            }
            Extension::SupportedGroups(groups) => {
                named_group = groups.first_supported(config.named_groups());
            }
            Extension::SignatureAlgorithms(schemes) => {
                signature_scheme = schemes.first_supported(config.signature_schemes());
            }
            Extension::KeyShare(shares) => {
                key_share = shares.first_supported(config.named_groups());
            }
            Extension::Unrecognized { extension_type, .. } => {
                trace!("Ignoring extension {:?}", extension_type);
            }
        }
    }

    if !offers_tls13 {
        return Err(Error::UnsupportedVersion);
    }
    let named_group = named_group.ok_or(Error::UnsupportedNamedGroup)?;
    let signature_scheme = signature_scheme.ok_or(Error::UnsupportedSignatureAlgorithm)?;
    let key_share = key_share.ok_or(Error::UnsupportedNamedGroup)?;

    // The share decides the group, it need not be the client's first pick.
    if key_share.group != named_group {
        trace!(
            "Key share group {:?} differs from preferred {:?}",
            key_share.group,
            named_group
        );
    }

    KeyExchange::check_peer_key(key_share.group, key_share.key_exchange)?;
    let peer_key = ArrayVec::try_from(key_share.key_exchange)
        .map_err(|_| Error::IllegalParameter("Key share too long for its group"))?;

    Ok(Negotiated {
        cipher_suite,
        named_group: key_share.group,
        signature_scheme,
        session_id: client_hello.legacy_session_id.clone(),
        peer_key,
    })
}
