//! Curve-generic point and scalar helpers over RustCrypto `elliptic-curve`.
//!
//! Keys store plain big-endian bytes. Everything that needs group arithmetic
//! goes through these helpers, picked per curve by `dispatch_curve!`.

use elliptic_curve::group::Curve as _;
use elliptic_curve::sec1::{EncodedPoint, FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{
    AffinePoint, CurveArithmetic, Field, FieldBytes, FieldBytesSize, NonZeroScalar, PublicKey,
    SecretKey,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use alloc::{vec, vec::Vec};

use crate::curve::CurveProfile;
use crate::error::{Error, Result};

/// Run `$body` with `$c` bound to the RustCrypto curve type for `$curve`.
macro_rules! dispatch_curve {
    ($curve:expr, $c:ident => $body:expr) => {
        match $curve {
            $crate::curve::CurveId::P256 => {
                type $c = ::p256::NistP256;
                $body
            }
            $crate::curve::CurveId::P521 => {
                type $c = ::p521::NistP521;
                $body
            }
        }
    };
}

/// Affine coordinates, each at field width.
pub(crate) type Coordinates = (Vec<u8>, Vec<u8>);

fn coordinates<C>(public: &PublicKey<C>) -> Result<Coordinates>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let encoded = public.to_encoded_point(false);
    match (encoded.x(), encoded.y()) {
        (Some(x), Some(y)) => Ok((x.to_vec(), y.to_vec())),
        _ => Err(Error::InvalidCurve),
    }
}

fn public_key<C>(x: &[u8], y: &[u8]) -> Result<PublicKey<C>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let width = FieldBytes::<C>::default().len();
    if x.len() != width || y.len() != width {
        return Err(Error::InvalidPublicKey);
    }
    let encoded = EncodedPoint::<C>::from_affine_coordinates(
        FieldBytes::<C>::from_slice(x),
        FieldBytes::<C>::from_slice(y),
        false,
    );
    Option::from(PublicKey::<C>::from_encoded_point(&encoded)).ok_or(Error::InvalidCurve)
}

fn secret_key<C>(d: &[u8]) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    if d.len() != FieldBytes::<C>::default().len() {
        return Err(Error::InvalidPrivateKey);
    }
    SecretKey::<C>::from_bytes(FieldBytes::<C>::from_slice(d)).map_err(|_| Error::InvalidPrivateKey)
}

/// Secret key for big-endian `d` of any length, reduced mod the group order. Zero is rejected.
fn reduced_secret_key<C>(d: &[u8]) -> Result<SecretKey<C>>
where
    C: CurveArithmetic,
{
    let radix = C::Scalar::from(256u64);
    let scalar = d
        .iter()
        .fold(C::Scalar::ZERO, |acc, &byte| acc * radix + C::Scalar::from(u64::from(byte)));
    Option::<NonZeroScalar<C>>::from(NonZeroScalar::new(scalar))
        .map(SecretKey::from)
        .ok_or(Error::InvalidPrivateKey)
}

/// Draw a scalar by rejection sampling and derive its public point.
pub(crate) fn generate<C, R>(
    profile: &CurveProfile,
    rng: &mut R,
) -> Result<(Zeroizing<Vec<u8>>, Coordinates)>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    R: RngCore + CryptoRng,
{
    let mut d = Zeroizing::new(vec![0u8; profile.field_bytes]);
    loop {
        rng.try_fill_bytes(&mut d).map_err(|_| Error::Entropy)?;
        d[0] &= profile.top_byte_mask();
        if let Ok(secret) = secret_key::<C>(&d) {
            let coords = coordinates(&secret.public_key())?;
            return Ok((d, coords));
        }
    }
}

/// Reduce a scalar mod the group order, returning it at field width with its public point.
pub(crate) fn from_scalar<C>(d: &[u8]) -> Result<(Zeroizing<Vec<u8>>, Coordinates)>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let secret = reduced_secret_key::<C>(d)?;
    let coords = coordinates(&secret.public_key())?;
    Ok((Zeroizing::new(secret.to_bytes().to_vec()), coords))
}

/// Check that field-width coordinates name a non-identity point on the curve.
pub(crate) fn validate<C>(x: &[u8], y: &[u8]) -> Result<()>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    public_key::<C>(x, y).map(|_| ())
}

/// Decode a SEC1 point, compressed or uncompressed.
pub(crate) fn decode<C>(bytes: &[u8]) -> Result<Coordinates>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let encoded = EncodedPoint::<C>::from_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
    let public: PublicKey<C> =
        Option::from(PublicKey::<C>::from_encoded_point(&encoded)).ok_or(Error::InvalidCurve)?;
    coordinates(&public)
}

/// x-coordinate of `d·(x, y)` at field width, or `None` for the identity.
pub(crate) fn shared_x<C>(d: &[u8], x: &[u8], y: &[u8]) -> Result<Option<Zeroizing<Vec<u8>>>>
where
    C: CurveArithmetic,
    FieldBytesSize<C>: ModulusSize,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
{
    let secret = secret_key::<C>(d)?;
    let public = public_key::<C>(x, y)?;
    let product = (public.to_projective() * *secret.to_nonzero_scalar()).to_affine();
    let encoded = product.to_encoded_point(false);
    Ok(encoded.x().map(|x| Zeroizing::new(x.to_vec())))
}
