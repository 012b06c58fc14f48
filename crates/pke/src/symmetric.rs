//! AES-CTR encryption and the Poly1305 tag.
//!
//! Neither half is an AEAD on its own: the driver verifies the tag over the
//! nonce-prefixed ciphertext before it decrypts anything.

use aes::{Aes128, Aes192, Aes256};
use ctr::cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;
use poly1305::universal_hash::KeyInit;
use poly1305::Poly1305;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// AES block size, also the nonce length.
pub const BLOCK_SIZE: usize = 16;
/// Poly1305 tag length.
pub const TAG_SIZE: usize = 16;
/// Poly1305 key length.
pub const MAC_KEY_SIZE: usize = 32;

/// One-time Poly1305 key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MacKey([u8; MAC_KEY_SIZE]);

impl MacKey {
    pub fn as_bytes(&self) -> &[u8; MAC_KEY_SIZE] {
        &self.0
    }
}

impl TryFrom<&[u8]> for MacKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let key: [u8; MAC_KEY_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            context: "MacKey",
            expected: MAC_KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(MacKey(key))
    }
}

/// Poly1305 authentication tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag([u8; TAG_SIZE]);

impl Tag {
    pub fn as_bytes(&self) -> &[u8; TAG_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Tag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Tag {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let tag: [u8; TAG_SIZE] = bytes.try_into().map_err(|_| Error::InvalidLength {
            context: "Tag",
            expected: TAG_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Tag(tag))
    }
}

/// XOR `buf` with the AES-CTR keystream, the variant picked by key length.
fn apply_ctr(key: &[u8], nonce: &[u8], buf: &mut [u8]) -> Result<()> {
    match key.len() {
        16 => Ctr128BE::<Aes128>::new_from_slices(key, nonce)
            .map_err(|_| Error::CipherInit)?
            .apply_keystream(buf),
        24 => Ctr128BE::<Aes192>::new_from_slices(key, nonce)
            .map_err(|_| Error::CipherInit)?
            .apply_keystream(buf),
        32 => Ctr128BE::<Aes256>::new_from_slices(key, nonce)
            .map_err(|_| Error::CipherInit)?
            .apply_keystream(buf),
        _ => return Err(Error::CipherInit),
    }
    Ok(())
}

fn check_key_len(key: &[u8]) -> Result<()> {
    match key.len() {
        16 | 24 | 32 => Ok(()),
        _ => Err(Error::CipherInit),
    }
}

/// Encrypt under a fresh random nonce, returning `nonce ‖ ciphertext`.
pub fn encrypt_symmetric<R: RngCore + CryptoRng>(
    rng: &mut R,
    plaintext: &[u8],
    key: &[u8],
) -> Result<Vec<u8>> {
    check_key_len(key)?;

    let mut out = Vec::with_capacity(BLOCK_SIZE + plaintext.len());
    out.resize(BLOCK_SIZE, 0);
    rng.try_fill_bytes(&mut out[..BLOCK_SIZE])
        .map_err(|_| Error::Entropy)?;
    out.extend_from_slice(plaintext);

    let (nonce, body) = out.split_at_mut(BLOCK_SIZE);
    apply_ctr(key, nonce, body)?;
    Ok(out)
}

/// Decrypt `nonce ‖ ciphertext`. No integrity check happens here.
pub fn decrypt_symmetric(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    check_key_len(key)?;
    if data.len() < BLOCK_SIZE {
        return Err(Error::MessageTooShort);
    }

    let (nonce, ciphertext) = data.split_at(BLOCK_SIZE);
    let mut out = ciphertext.to_vec();
    apply_ctr(key, nonce, &mut out)?;
    Ok(out)
}

/// Poly1305 over `data ‖ associated_data`.
pub fn sum_tag(data: &[u8], associated_data: Option<&[u8]>, key: &MacKey) -> Tag {
    let associated_data = associated_data.unwrap_or(&[]);
    let mut message = Vec::with_capacity(data.len() + associated_data.len());
    message.extend_from_slice(data);
    message.extend_from_slice(associated_data);

    let mac = Poly1305::new(poly1305::Key::from_slice(key.as_bytes()));
    let mut tag = [0u8; TAG_SIZE];
    tag.copy_from_slice(&mac.compute_unpadded(&message));
    Tag(tag)
}

/// Recompute the tag and compare in constant time.
pub fn verify_tag(tag: &Tag, data: &[u8], associated_data: Option<&[u8]>, key: &MacKey) -> bool {
    let computed = sum_tag(data, associated_data, key);
    computed.0[..].ct_eq(&tag.0[..]).into()
}
