use std::fmt;

use crate::types::SignatureScheme;

/// Server identity key used for the CertificateVerify signature.
///
/// The crate carries no signature algorithms of its own. Implementations
/// wrap whatever key store or signing library the application uses.
pub trait SigningKey: Send + Sync + fmt::Debug {
    /// Sign `message` with `scheme` and append the signature to `out`.
    ///
    /// `scheme` is always one of the schemes configured in
    /// [`Config::signature_schemes`](crate::Config::signature_schemes) that
    /// the client also offered.
    fn sign(
        &self,
        scheme: SignatureScheme,
        message: &[u8],
        out: &mut Vec<u8>,
    ) -> Result<(), String>;
}
