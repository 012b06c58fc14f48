//! Trait definitions for the scheme crates

pub mod pke;

pub use pke::Pke;
