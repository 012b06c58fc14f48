//! # ecies-nist
//!
//! Elliptic Curve Integrated Encryption Scheme (ECIES) over NIST P-256 and P-521.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ecies-nist = "0.3"
//! ```
//!
//! ```
//! use ecies_nist::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let recipient = PrivateKey::generate(&mut OsRng, CurveId::P256).unwrap();
//! let envelope = encrypt(&mut OsRng, recipient.public_key(), b"abc123", None, None).unwrap();
//! let plaintext = decrypt(&recipient, &envelope, None, None).unwrap();
//! assert_eq!(plaintext, b"abc123");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, `std::error::Error` impls
//! - `alloc`: heap allocation without the standard library
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`ecies-nist-api`]: Public traits and the trait-level error type
//! - [`ecies-nist-pke`]: Key agreement, KDF, envelope codec and the ECIES driver

#![cfg_attr(not(feature = "std"), no_std)]

pub use ecies_nist_api as api;
pub use ecies_nist_pke as pke;

/// Common imports for ecies-nist users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::Pke;

    // Re-export the scheme
    pub use crate::pke::{
        decrypt, encrypt, CurveId, EciesP256, EciesP521, PrivateKey, PublicKey,
    };
}
