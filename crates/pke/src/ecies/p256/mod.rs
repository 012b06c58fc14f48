//! ECIES implementation for NIST P-256.
use ecies_nist_api::error::{Error as ApiError, Result as ApiResult};
use ecies_nist_api::traits::Pke;
use rand::{CryptoRng, RngCore};

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::vec::Vec;

use crate::curve::CurveId;
use crate::error::Error as PkeError;
use crate::keys::{PrivateKey, PublicKey};

/// ECIES over P-256 with SHA-256, AES-128-CTR and Poly1305.
///
/// Keys on any other curve are rejected with [`PkeError::CurveMismatch`].
pub struct EciesP256;

impl EciesP256 {
    pub const CURVE: CurveId = CurveId::P256;

    fn check_curve(curve: CurveId) -> ApiResult<()> {
        if curve != Self::CURVE {
            return Err(ApiError::from(PkeError::CurveMismatch));
        }
        Ok(())
    }
}

impl Pke for EciesP256 {
    type PublicKey = PublicKey;
    type SecretKey = PrivateKey;
    type Ciphertext = Vec<u8>;

    fn name() -> &'static str {
        "ECIES-P256-SHA256-AES128CTR-Poly1305"
    }

    fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let sk = PrivateKey::generate(rng, Self::CURVE).map_err(ApiError::from)?;
        Ok((sk.public_key().clone(), sk))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        shared_info: Option<&[u8]>,
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        Self::check_curve(pk_recipient.curve())?;
        super::encrypt(rng, pk_recipient, plaintext, shared_info, aad).map_err(ApiError::from)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        shared_info: Option<&[u8]>,
        aad: Option<&[u8]>,
    ) -> ApiResult<Vec<u8>> {
        Self::check_curve(sk_recipient.curve())?;
        super::decrypt(sk_recipient, ciphertext, shared_info, aad).map_err(ApiError::from)
    }
}
