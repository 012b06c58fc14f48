//! Curve identifiers and their fixed protocol parameters.

use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::kdf::HashAlgorithm;

/// Curves the scheme runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    P256,
    P521,
}

/// Per-curve protocol parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveProfile {
    pub id: CurveId,
    pub name: &'static str,
    pub bit_size: usize,
    /// Big-endian width of a coordinate or scalar.
    pub field_bytes: usize,
    pub hash: HashAlgorithm,
    /// Correction on top of `(bit_size + 7) / 4` to reach the SEC1 length.
    pub point_len_adjustment: usize,
}

const P256_PROFILE: CurveProfile = CurveProfile {
    id: CurveId::P256,
    name: "P-256",
    bit_size: 256,
    field_bytes: 32,
    hash: HashAlgorithm::Sha256,
    point_len_adjustment: 0,
};

const P521_PROFILE: CurveProfile = CurveProfile {
    id: CurveId::P521,
    name: "P-521",
    bit_size: 521,
    field_bytes: 66,
    hash: HashAlgorithm::Sha512,
    point_len_adjustment: 1,
};

impl CurveId {
    /// All supported curves.
    pub const ALL: [CurveId; 2] = [CurveId::P256, CurveId::P521];

    pub fn profile(self) -> &'static CurveProfile {
        match self {
            CurveId::P256 => &P256_PROFILE,
            CurveId::P521 => &P521_PROFILE,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }
}

impl CurveProfile {
    /// Length of an uncompressed SEC1 point on this curve.
    pub fn encoded_point_len(&self) -> usize {
        (self.bit_size + 7) / 4 + self.point_len_adjustment
    }

    /// Length of the AES key, half the digest size.
    pub fn key_size(&self) -> usize {
        self.hash.output_size() / 2
    }

    /// Mask applied to the most significant scalar byte during key generation.
    pub(crate) fn top_byte_mask(&self) -> u8 {
        0xff >> ((8 - self.bit_size % 8) % 8)
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CurveId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("P-256") || s.eq_ignore_ascii_case("P256") {
            Ok(CurveId::P256)
        } else if s.eq_ignore_ascii_case("P-521") || s.eq_ignore_ascii_case("P521") {
            Ok(CurveId::P521)
        } else {
            Err(Error::UnsupportedCurve)
        }
    }
}
