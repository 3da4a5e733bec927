//! HKDF-SHA256 and the TLS 1.3 `HKDF-Expand-Label` construction.

use hkdf::Hkdf;
use sha2::Sha256;

use super::Secret;
use crate::Error;

/// Output size of SHA-256, and so of every secret in the schedule.
pub const HASH_LEN: usize = 32;

const LABEL_PREFIX: &[u8] = b"tls13 ";

/// `HKDF-Extract(salt, ikm)`.
pub fn hkdf_extract(salt: &[u8], ikm: &[u8]) -> Secret {
    let (prk, _) = Hkdf::<Sha256>::extract(Some(salt), ikm);
    let mut bytes = [0u8; HASH_LEN];
    bytes.copy_from_slice(prk.as_slice());
    Secret::new(bytes)
}

/// `HKDF-Expand-Label(secret, label, context, out.len())` (RFC 8446 Section 7.1).
///
/// The label is given without the `"tls13 "` prefix.
pub fn hkdf_expand_label(
    secret: &[u8],
    label: &[u8],
    context: &[u8],
    out: &mut [u8],
) -> Result<(), Error> {
    let full_label_len = LABEL_PREFIX.len() + label.len();
    if full_label_len > 255 || context.len() > 255 || out.len() > u16::MAX as usize {
        return Err(Error::Crypto("HKDF label parameters out of range".into()));
    }

    let length = (out.len() as u16).to_be_bytes();
    let info: [&[u8]; 6] = [
        &length,
        &[full_label_len as u8],
        LABEL_PREFIX,
        label,
        &[context.len() as u8],
        context,
    ];

    let hk = Hkdf::<Sha256>::from_prk(secret)
        .map_err(|e| Error::Crypto(format!("Invalid PRK: {:?}", e)))?;
    hk.expand_multi_info(&info, out)
        .map_err(|e| Error::Crypto(format!("HKDF expand failed: {:?}", e)))?;

    Ok(())
}
