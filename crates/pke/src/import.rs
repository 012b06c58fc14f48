//! Import of existing ECDSA keys.
//!
//! Accepts SEC1 `EC PRIVATE KEY` structures and SPKI public keys, as DER or
//! PEM. Only P-256 keys are supported. PEM labels are not checked.

use der::asn1::ObjectIdentifier;
use der::{Document, SecretDocument};
use sec1::EcPrivateKey;
use spki::SubjectPublicKeyInfoRef;

use crate::curve::CurveId;
use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};

/// id-ecPublicKey
const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
/// secp256r1, NIST P-256
const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// Import a DER-encoded SEC1 private key, deriving its public point.
pub fn import_ecdsa_private_der(bytes: &[u8]) -> Result<PrivateKey> {
    let key = EcPrivateKey::try_from(bytes)
        .map_err(|_| Error::KeyEncoding("malformed SEC1 private key"))?;

    match key.parameters.and_then(|params| params.named_curve()) {
        Some(oid) if oid == SECP256R1 => PrivateKey::from_scalar(CurveId::P256, key.private_key),
        _ => Err(Error::UnsupportedCurve),
    }
}

/// Import a PEM-encoded SEC1 private key.
pub fn import_ecdsa_private_pem(pem: &str) -> Result<PrivateKey> {
    let (_label, doc) = SecretDocument::from_pem(pem.trim())
        .map_err(|_| Error::KeyEncoding("malformed PEM private key"))?;
    import_ecdsa_private_der(doc.as_bytes())
}

/// Import a DER-encoded SPKI public key.
pub fn import_ecdsa_public_der(bytes: &[u8]) -> Result<PublicKey> {
    let spki = SubjectPublicKeyInfoRef::try_from(bytes)
        .map_err(|_| Error::KeyEncoding("malformed SPKI public key"))?;

    if spki.algorithm.oid != ID_EC_PUBLIC_KEY {
        return Err(Error::KeyEncoding("not an elliptic-curve public key"));
    }
    match spki.algorithm.parameters_oid() {
        Ok(oid) if oid == SECP256R1 => {}
        _ => return Err(Error::UnsupportedCurve),
    }

    let point = spki
        .subject_public_key
        .as_bytes()
        .ok_or(Error::KeyEncoding("public key is not a whole number of bytes"))?;
    PublicKey::from_encoded(CurveId::P256, point)
}

/// Import a PEM-encoded SPKI public key.
pub fn import_ecdsa_public_pem(pem: &str) -> Result<PublicKey> {
    let (_label, doc) = Document::from_pem(pem.trim())
        .map_err(|_| Error::KeyEncoding("malformed PEM public key"))?;
    import_ecdsa_public_der(doc.as_bytes())
}
