//! Error handling for ECIES operations.

use core::fmt;
use ecies_nist_api::error::Error as CoreError;

/// Error type for ECIES operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The two keys of an agreement, or a key and a scheme, use different curves
    CurveMismatch,
    /// Requested key material exceeds what the curve can provide
    KeyTooLong,
    /// Scalar multiplication produced the point at infinity
    InfinityResult,
    /// Decrypt was handed an empty buffer
    EmptyMessage,
    /// The envelope cannot hold a point, a nonce and a tag
    MessageTooShort,
    /// The envelope does not start with a SEC1 point tag
    InvalidPublicKeyPrefix,
    /// The ephemeral point bytes do not decode
    InvalidPublicKey,
    /// The point is not on the curve, or is the identity
    InvalidCurve,
    /// Authentication failed
    TagMismatch,
    /// Import requested for a curve other than P-256
    UnsupportedCurve,
    /// The symmetric cipher rejected its key
    CipherInit,
    /// The private scalar is zero, not below the group order, or too long
    InvalidPrivateKey,
    /// A sized byte type was built from a slice of the wrong length
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The entropy source reported an error
    Entropy,
    /// Malformed DER or PEM on import
    KeyEncoding(&'static str),
}

impl Error {
    fn reason(&self) -> &'static str {
        match self {
            Error::CurveMismatch => "curves don't match",
            Error::KeyTooLong => "shared key length is too long",
            Error::InfinityResult => "scalar multiplication resulted in infinity",
            Error::EmptyMessage => "invalid empty message",
            Error::MessageTooShort => "message is too short",
            Error::InvalidPublicKeyPrefix => "invalid public key prefix",
            Error::InvalidPublicKey => "invalid public key, maybe the wrong curve was selected",
            Error::InvalidCurve => "point is not on the curve",
            Error::TagMismatch => "message tags don't match",
            Error::UnsupportedCurve => "only ECDSA P-256 keys are supported",
            Error::CipherInit => "invalid symmetric key length",
            Error::InvalidPrivateKey => "invalid private scalar",
            Error::InvalidLength { context, .. } => *context,
            Error::Entropy => "entropy source failure",
            Error::KeyEncoding(reason) => *reason,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { context, expected, actual } => write!(
                f,
                "ECIES invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::KeyEncoding(reason) => write!(f, "ECIES key encoding error: {}", reason),
            other => write!(f, "ECIES error: {}", other.reason()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Conversion from ECIES Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::CurveMismatch
            | Error::UnsupportedCurve
            | Error::InvalidPrivateKey
            | Error::KeyEncoding(_) => CoreError::InvalidKey {
                context: "ECIES",
                message: err.reason(),
            },
            Error::KeyTooLong | Error::InfinityResult => CoreError::Other {
                context: "ECIES key agreement",
                message: err.reason(),
            },
            Error::EmptyMessage
            | Error::MessageTooShort
            | Error::InvalidPublicKeyPrefix
            | Error::InvalidPublicKey
            | Error::InvalidCurve => CoreError::InvalidCiphertext {
                context: "ECIES",
                message: err.reason(),
            },
            Error::TagMismatch => CoreError::DecryptionFailed {
                context: "ECIES Decryption",
                message: err.reason(),
            },
            Error::CipherInit => CoreError::Other {
                context: "ECIES symmetric",
                message: err.reason(),
            },
            Error::InvalidLength { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Entropy => CoreError::RandomGenerationError {
                context: "ECIES",
                message: err.reason(),
            },
        }
    }
}

/// Result type for ECIES operations.
pub type Result<T> = core::result::Result<T, Error>;
