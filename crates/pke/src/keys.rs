//! Long-term and ephemeral key types.

use core::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{vec, vec::Vec};

use crate::curve::CurveId;
use crate::error::{Error, Result};
use crate::point;

/// SEC1 tag of an uncompressed point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// A point on a named curve, coordinates big-endian at field width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    curve: CurveId,
    x: Vec<u8>,
    y: Vec<u8>,
}

/// A scalar together with its public point.
#[derive(Clone)]
pub struct PrivateKey {
    public: PublicKey,
    d: Zeroizing<Vec<u8>>,
}

fn left_pad(bytes: &[u8], width: usize) -> Option<Zeroizing<Vec<u8>>> {
    if bytes.len() > width {
        return None;
    }
    let mut out = Zeroizing::new(vec![0u8; width]);
    out[width - bytes.len()..].copy_from_slice(bytes);
    Some(out)
}

impl PublicKey {
    /// Build a key from caller-supplied coordinates, checking the point is on the curve.
    ///
    /// Coordinates shorter than the field width are left-padded with zeros.
    pub fn from_coordinates(curve: CurveId, x: &[u8], y: &[u8]) -> Result<Self> {
        let width = curve.profile().field_bytes;
        let x = left_pad(x, width).ok_or(Error::InvalidPublicKey)?;
        let y = left_pad(y, width).ok_or(Error::InvalidPublicKey)?;
        dispatch_curve!(curve, C => point::validate::<C>(&x, &y))?;
        Ok(Self {
            curve,
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Coordinates produced by our own arithmetic are not checked again.
    pub(crate) fn from_trusted(curve: CurveId, (x, y): point::Coordinates) -> Self {
        Self { curve, x, y }
    }

    /// Decode a SEC1 point, compressed or uncompressed.
    pub fn from_encoded(curve: CurveId, bytes: &[u8]) -> Result<Self> {
        let coords = dispatch_curve!(curve, C => point::decode::<C>(bytes))?;
        Ok(Self::from_trusted(curve, coords))
    }

    /// Uncompressed SEC1 encoding, `0x04 ‖ X ‖ Y`.
    pub fn to_encoded(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.curve.profile().encoded_point_len());
        out.push(UNCOMPRESSED_TAG);
        out.extend_from_slice(&self.x);
        out.extend_from_slice(&self.y);
        out
    }

    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn x(&self) -> &[u8] {
        &self.x
    }

    pub fn y(&self) -> &[u8] {
        &self.y
    }
}

impl PrivateKey {
    /// Generate a fresh key pair on `curve`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, curve: CurveId) -> Result<Self> {
        let profile = curve.profile();
        let (d, coords) = dispatch_curve!(curve, C => point::generate::<C, R>(profile, rng))?;
        Ok(Self {
            public: PublicKey::from_trusted(curve, coords),
            d,
        })
    }

    /// Import a big-endian scalar, deriving its public point.
    ///
    /// Input up to the field width is accepted and reduced mod the curve order.
    /// A scalar that reduces to zero is rejected.
    pub fn from_scalar(curve: CurveId, d: &[u8]) -> Result<Self> {
        let d = left_pad(d, curve.profile().field_bytes).ok_or(Error::InvalidPrivateKey)?;
        let (d, coords) = dispatch_curve!(curve, C => point::from_scalar::<C>(&d))?;
        Ok(Self {
            public: PublicKey::from_trusted(curve, coords),
            d,
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn curve(&self) -> CurveId {
        self.public.curve
    }

    /// Big-endian scalar at field width.
    pub fn to_scalar_bytes(&self) -> Zeroizing<Vec<u8>> {
        self.d.clone()
    }

    pub(crate) fn scalar(&self) -> &[u8] {
        &self.d
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public", &self.public)
            .field("d", &"[REDACTED]")
            .finish()
    }
}
