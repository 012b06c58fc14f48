//! Wire layout: `ephemeral point ‖ nonce‖ciphertext ‖ tag`.
//!
//! There is no version or length field. Every segment boundary follows from
//! the curve profile and the fixed nonce and tag sizes.

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::curve::CurveId;
use crate::error::{Error, Result};
use crate::symmetric::{Tag, BLOCK_SIZE, TAG_SIZE};

/// Borrowed view of an encoded envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// SEC1 encoding of the sender's ephemeral point, not yet validated.
    pub ephemeral_key: &'a [u8],
    /// Nonce followed by the AES-CTR ciphertext.
    pub body: &'a [u8],
    pub tag: Tag,
}

impl<'a> Envelope<'a> {
    /// Bytes an envelope adds on top of the plaintext.
    pub fn overhead(curve: CurveId) -> usize {
        curve.profile().encoded_point_len() + BLOCK_SIZE + TAG_SIZE
    }

    /// Split `bytes` into its three segments.
    pub fn parse(curve: CurveId, bytes: &'a [u8]) -> Result<Self> {
        let first = *bytes.first().ok_or(Error::EmptyMessage)?;
        if !matches!(first, 0x02..=0x04) {
            return Err(Error::InvalidPublicKeyPrefix);
        }
        if bytes.len() < Self::overhead(curve) {
            return Err(Error::MessageTooShort);
        }

        let (ephemeral_key, rest) = bytes.split_at(curve.profile().encoded_point_len());
        let (body, tag) = rest.split_at(rest.len() - TAG_SIZE);
        Ok(Self {
            ephemeral_key,
            body,
            tag: Tag::try_from(tag)?,
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out =
            Vec::with_capacity(self.ephemeral_key.len() + self.body.len() + TAG_SIZE);
        out.extend_from_slice(self.ephemeral_key);
        out.extend_from_slice(self.body);
        out.extend_from_slice(self.tag.as_ref());
        out
    }
}
