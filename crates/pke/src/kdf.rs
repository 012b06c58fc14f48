//! Single-round hash KDF and sub-key split.

use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::error::Result;
use crate::symmetric::{MacKey, MAC_KEY_SIZE};

/// Hash bound to a curve by its profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Hash the concatenation of `segments`.
    pub fn digest(self, segments: &[&[u8]]) -> Zeroizing<Vec<u8>> {
        match self {
            HashAlgorithm::Sha256 => digest_with(Sha256::new(), segments),
            HashAlgorithm::Sha512 => digest_with(Sha512::new(), segments),
        }
    }
}

fn digest_with<D: Digest>(mut hasher: D, segments: &[&[u8]]) -> Zeroizing<Vec<u8>> {
    for segment in segments {
        hasher.update(segment);
    }
    let mut out = Zeroizing::new(Vec::with_capacity(<D as Digest>::output_size()));
    out.extend_from_slice(&hasher.finalize());
    out
}

/// `H(shared ‖ s1)`, with `s1` omitted when absent.
pub fn kdf(hash: HashAlgorithm, shared: &[u8], s1: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
    match s1 {
        Some(info) => hash.digest(&[shared, info]),
        None => hash.digest(&[shared]),
    }
}

/// Encryption and authentication sub-keys.
pub struct DerivedKeys {
    pub ke: Zeroizing<Vec<u8>>,
    pub km: MacKey,
}

/// Run the KDF and split its output into `Ke ‖ Km`.
///
/// `Km` shorter than a Poly1305 key is replaced by `H(Km)`.
pub fn derive_keys(
    hash: HashAlgorithm,
    shared: &[u8],
    s1: Option<&[u8]>,
    key_size: usize,
) -> Result<DerivedKeys> {
    let k = kdf(hash, shared, s1);
    let split = key_size.min(k.len());
    let (ke, km) = k.split_at(split);

    let km = if km.len() < MAC_KEY_SIZE {
        MacKey::try_from(hash.digest(&[km]).as_slice())?
    } else {
        MacKey::try_from(km)?
    };

    Ok(DerivedKeys {
        ke: Zeroizing::new(ke.to_vec()),
        km,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_kdf_absent_context_is_plain_hash() {
        let shared = b"shared secret";
        let expected = Sha256::digest(shared);
        assert_eq!(kdf(HashAlgorithm::Sha256, shared, None).as_slice(), expected.as_slice());
    }

    #[test]
    fn test_kdf_appends_context() {
        let expected = Sha512::digest(b"sharedinfo");
        let out = kdf(HashAlgorithm::Sha512, b"shared", Some(b"info"));
        assert_eq!(out.as_slice(), expected.as_slice());
        assert_eq!(out.len(), 64);
    }

    #[test]
    fn test_sha256_split_stretches_mac_key() {
        let keys = derive_keys(HashAlgorithm::Sha256, b"z", None, 16).unwrap();
        let k = Sha256::digest(b"z");
        assert_eq!(keys.ke.as_slice(), &k[..16]);
        let stretched = Sha256::digest(&k[16..]);
        assert_eq!(keys.km.as_bytes(), stretched.as_slice());
    }

    #[test]
    fn test_sha512_split_uses_second_half() {
        let keys = derive_keys(HashAlgorithm::Sha512, b"z", Some(b"s1"), 32).unwrap();
        let k = Sha512::digest(b"zs1");
        assert_eq!(keys.ke.as_slice(), &k[..32]);
        assert_eq!(keys.km.as_bytes(), &k[32..]);
    }

    #[test]
    fn test_oversized_mac_half_is_rejected() {
        // 64-byte digest split at 16 leaves 48 bytes for Km
        let res = derive_keys(HashAlgorithm::Sha512, b"z", None, 16);
        assert!(matches!(
            res,
            Err(Error::InvalidLength { expected: 32, actual: 48, .. })
        ));
    }
}
