//! Public API traits and types for the ecies-nist workspace
//!
//! This crate provides the public API surface shared by the scheme crates: the
//! [`Pke`] trait implemented by every curve-specific ECIES instance, and the
//! trait-level [`Error`] type those implementations report.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::Pke;

// Re-export trait modules for direct access
pub use traits::pke;
