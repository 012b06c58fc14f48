//! Static-ephemeral ECDH.

use zeroize::Zeroizing;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};
use crate::point;

/// x-coordinate of an ECDH result, big-endian with leading zeros stripped.
///
/// The length varies between calls; callers must not assume the field width.
pub struct SharedSecret(Zeroizing<Vec<u8>>);

impl SharedSecret {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PrivateKey {
    /// Derive the shared secret with `public`, reserving `2 * key_size` bytes of key material.
    pub fn derive_shared(&self, public: &PublicKey, key_size: usize) -> Result<SharedSecret> {
        let curve = self.curve();
        if curve != public.curve() {
            return Err(Error::CurveMismatch);
        }
        let profile = curve.profile();
        if 2 * key_size > (profile.bit_size + 7) / 8 {
            return Err(Error::KeyTooLong);
        }

        let x = dispatch_curve!(curve, C => point::shared_x::<C>(self.scalar(), public.x(), public.y()))?
            .ok_or(Error::InfinityResult)?;

        let start = x.iter().position(|&b| b != 0).unwrap_or(x.len());
        Ok(SharedSecret(Zeroizing::new(x[start..].to_vec())))
    }
}
