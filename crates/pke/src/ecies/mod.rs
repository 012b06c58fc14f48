//! Elliptic Curve Integrated Encryption Scheme (ECIES) protocol driver.
//!
//! Both directions are pure functions of their inputs: encryption draws an
//! ephemeral key pair and a nonce from the supplied generator, decryption
//! reads nothing but the envelope and the recipient's key.

use rand::{CryptoRng, RngCore};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::kdf::derive_keys;
use crate::keys::{PrivateKey, PublicKey};
use crate::symmetric::{decrypt_symmetric, encrypt_symmetric, sum_tag, verify_tag};

// Declare submodules
pub mod p256;
pub mod p521;

// Re-export the main structs
pub use p256::EciesP256;
pub use p521::EciesP521;

/// Encrypt `plaintext` to `recipient`.
///
/// `s1` is bound into key derivation and `s2` into the tag. Both must be
/// supplied again, unchanged, to decrypt.
pub fn encrypt<R: RngCore + CryptoRng>(
    rng: &mut R,
    recipient: &PublicKey,
    plaintext: &[u8],
    s1: Option<&[u8]>,
    s2: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let curve = recipient.curve();
    let profile = curve.profile();
    let ephemeral = PrivateKey::generate(rng, curve)?;

    let shared = ephemeral.derive_shared(recipient, profile.key_size())?;
    let keys = derive_keys(profile.hash, shared.as_bytes(), s1, profile.key_size())?;

    let body = encrypt_symmetric(rng, plaintext, &keys.ke)?;
    let tag = sum_tag(&body, s2, &keys.km);

    let ephemeral_key = ephemeral.public_key().to_encoded();
    Ok(Envelope {
        ephemeral_key: &ephemeral_key,
        body: &body,
        tag,
    }
    .encode())
}

/// Decrypt an envelope addressed to `recipient`.
///
/// The tag is checked before any decryption happens; on failure nothing of
/// the plaintext is returned.
pub fn decrypt(
    recipient: &PrivateKey,
    envelope: &[u8],
    s1: Option<&[u8]>,
    s2: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let curve = recipient.curve();
    let profile = curve.profile();
    let envelope = Envelope::parse(curve, envelope)?;

    let ephemeral = PublicKey::from_encoded(curve, envelope.ephemeral_key)?;
    let shared = recipient.derive_shared(&ephemeral, profile.key_size())?;
    let keys = derive_keys(profile.hash, shared.as_bytes(), s1, profile.key_size())?;

    if !verify_tag(&envelope.tag, envelope.body, s2, &keys.km) {
        return Err(Error::TagMismatch);
    }
    decrypt_symmetric(envelope.body, &keys.ke)
}
