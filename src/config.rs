use std::fmt;
use std::sync::Arc;

use crate::crypto::{SigningKey, HASH_LEN};
use crate::message::HEADER_LEN as HANDSHAKE_HEADER_LEN;
use crate::record::MAX_PLAINTEXT_LEN;
use crate::types::{CipherSuite, NamedGroup, SignatureScheme};
use crate::Error;

/// Bytes of the sealed flight that are not certificate or signature.
const FLIGHT_OVERHEAD: usize = 4 * HANDSHAKE_HEADER_LEN
    + 2 // EncryptedExtensions
    + 1 + 3 + 3 + 2 // Certificate context, list and entry framing
    + 2 + 2 // CertificateVerify scheme and signature length
    + HASH_LEN // Finished
    + 1; // inner content type

/// Server configuration.
///
/// Built once with [`Config::builder`] and shared between connections as
/// `Arc<Config>`. Nothing in here changes after [`ConfigBuilder::build`].
#[derive(Clone)]
pub struct Config {
    cipher_suites: Vec<CipherSuite>,
    named_groups: Vec<NamedGroup>,
    signature_schemes: Vec<SignatureScheme>,
    certificate: Vec<u8>,
    signing_key: Option<Arc<dyn SigningKey>>,
    rng_seed: Option<u64>,
}

impl Config {
    /// Largest certificate that fits the single encrypted flight record.
    ///
    /// A CertificateVerify signature takes from the same room, so with a
    /// signing key the usable size is smaller by the signature length.
    pub const MAX_CERTIFICATE_LEN: usize = MAX_PLAINTEXT_LEN - FLIGHT_OVERHEAD;

    /// Create a new configuration builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            cipher_suites: CipherSuite::supported().to_vec(),
            named_groups: NamedGroup::supported().to_vec(),
            signature_schemes: SignatureScheme::supported().to_vec(),
            certificate: Vec::new(),
            signing_key: None,
            rng_seed: None,
        }
    }

    /// Cipher suites the server accepts, in server preference order.
    #[inline(always)]
    pub fn cipher_suites(&self) -> &[CipherSuite] {
        &self.cipher_suites
    }

    /// Named groups the server accepts for key exchange.
    #[inline(always)]
    pub fn named_groups(&self) -> &[NamedGroup] {
        &self.named_groups
    }

    /// Signature schemes the server can produce a CertificateVerify with.
    #[inline(always)]
    pub fn signature_schemes(&self) -> &[SignatureScheme] {
        &self.signature_schemes
    }

    /// DER encoded end-entity certificate.
    #[inline(always)]
    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }

    /// Key used to sign the CertificateVerify.
    ///
    /// Without one the CertificateVerify carries an empty signature.
    #[inline(always)]
    pub fn signing_key(&self) -> Option<&dyn SigningKey> {
        self.signing_key.as_deref()
    }

    /// Seed for the random number generator.
    ///
    /// When set, the server random and ephemeral keys are deterministic.
    /// Only use this for tests.
    #[inline(always)]
    pub fn rng_seed(&self) -> Option<u64> {
        self.rng_seed
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("cipher_suites", &self.cipher_suites)
            .field("named_groups", &self.named_groups)
            .field("signature_schemes", &self.signature_schemes)
            .field("certificate_len", &self.certificate.len())
            .field("signing_key", &self.signing_key)
            .field("rng_seed", &self.rng_seed)
            .finish()
    }
}

/// Builder for the server configuration.
pub struct ConfigBuilder {
    cipher_suites: Vec<CipherSuite>,
    named_groups: Vec<NamedGroup>,
    signature_schemes: Vec<SignatureScheme>,
    certificate: Vec<u8>,
    signing_key: Option<Arc<dyn SigningKey>>,
    rng_seed: Option<u64>,
}

impl ConfigBuilder {
    /// Set the accepted cipher suites in preference order.
    ///
    /// Defaults to every implemented suite.
    pub fn cipher_suites(mut self, suites: &[CipherSuite]) -> Self {
        self.cipher_suites = suites.to_vec();
        self
    }

    /// Set the accepted named groups.
    ///
    /// Defaults to every implemented group.
    pub fn named_groups(mut self, groups: &[NamedGroup]) -> Self {
        self.named_groups = groups.to_vec();
        self
    }

    /// Set the signature schemes the signing key can produce.
    ///
    /// Defaults to all TLS 1.3 CertificateVerify schemes, which is only
    /// right when no signing key is configured.
    pub fn signature_schemes(mut self, schemes: &[SignatureScheme]) -> Self {
        self.signature_schemes = schemes.to_vec();
        self
    }

    /// Set the DER encoded certificate sent in the Certificate message.
    pub fn certificate(mut self, der: impl Into<Vec<u8>>) -> Self {
        self.certificate = der.into();
        self
    }

    /// Set the key that signs the CertificateVerify.
    pub fn signing_key(mut self, key: Arc<dyn SigningKey>) -> Self {
        self.signing_key = Some(key);
        self
    }

    /// Make all randomness deterministic. For tests.
    pub fn rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Build the configuration.
    ///
    /// Returns `Error::Config` if a table is empty or names an algorithm this
    /// crate does not implement. A certificate must be set and be at most
    /// [`Config::MAX_CERTIFICATE_LEN`] bytes.
    pub fn build(self) -> Result<Config, Error> {
        if self.cipher_suites.is_empty() {
            return Err(Error::Config("No cipher suites configured".into()));
        }
        if let Some(s) = self.cipher_suites.iter().find(|s| !s.is_supported()) {
            return Err(Error::Config(format!("Cipher suite not implemented: {:?}", s)));
        }

        if self.named_groups.is_empty() {
            return Err(Error::Config("No named groups configured".into()));
        }
        if let Some(g) = self.named_groups.iter().find(|g| !g.is_supported()) {
            return Err(Error::Config(format!("Named group not implemented: {:?}", g)));
        }

        if self.signature_schemes.is_empty() {
            return Err(Error::Config("No signature schemes configured".into()));
        }
        if let Some(s) = self.signature_schemes.iter().find(|s| !s.is_supported()) {
            return Err(Error::Config(format!(
                "Signature scheme not allowed in TLS 1.3: {:?}",
                s
            )));
        }

        if self.certificate.is_empty() {
            return Err(Error::Config("No certificate configured".into()));
        }
        if self.certificate.len() > Config::MAX_CERTIFICATE_LEN {
            return Err(Error::Config(format!(
                "Certificate of {} bytes does not fit the flight record, at most {}",
                self.certificate.len(),
                Config::MAX_CERTIFICATE_LEN
            )));
        }

        Ok(Config {
            cipher_suites: self.cipher_suites,
            named_groups: self.named_groups,
            signature_schemes: self.signature_schemes,
            certificate: self.certificate,
            signing_key: self.signing_key,
            rng_seed: self.rng_seed,
        })
    }
}
