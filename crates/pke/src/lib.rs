//! Elliptic Curve Integrated Encryption Scheme over NIST P-256 and P-521.
//!
//! An envelope is `ephemeral point ‖ nonce‖ciphertext ‖ tag`: the ephemeral
//! point is SEC1 uncompressed, the ciphertext is AES-CTR under a key derived
//! from the ECDH shared secret, and the tag is Poly1305 over the nonce and
//! ciphertext plus optional associated data.
#![cfg_attr(not(feature = "std"), no_std)]

// Required for Vec in no_std + alloc environments
#[cfg(all(not(feature = "std"), feature = "alloc"))]
extern crate alloc;

#[macro_use]
mod point;

pub mod agreement;
pub mod curve;
pub mod ecies;
pub mod envelope;
pub mod error;
pub mod import;
pub mod kdf;
pub mod keys;
pub mod symmetric;

// Re-export key items
pub use agreement::SharedSecret;
pub use curve::{CurveId, CurveProfile};
pub use ecies::{decrypt, encrypt, EciesP256, EciesP521};
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use import::{
    import_ecdsa_private_der, import_ecdsa_private_pem, import_ecdsa_public_der,
    import_ecdsa_public_pem,
};
pub use kdf::{DerivedKeys, HashAlgorithm};
pub use keys::{PrivateKey, PublicKey};
pub use symmetric::{MacKey, Tag};
