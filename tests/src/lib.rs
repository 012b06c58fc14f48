//! Shared helpers for the ecies-nist integration tests and benchmarks

use ecies_nist_pke::{CurveId, PrivateKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Deterministic generator so failures can be replayed from the seed
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Fresh recipient key on `curve`
pub fn recipient(curve: CurveId, seed: u64) -> PrivateKey {
    match PrivateKey::generate(&mut seeded_rng(seed), curve) {
        Ok(key) => key,
        Err(e) => panic!("key generation failed for {}: {}", curve, e),
    }
}

/// Copy of `data` with bit `bit` flipped, counting from the first byte's LSB
pub fn flip_bit(data: &[u8], bit: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Byte ranges of the three envelope segments: point, nonce‖ciphertext, tag
pub fn segments(curve: CurveId, envelope_len: usize) -> [core::ops::Range<usize>; 3] {
    let point = curve.profile().encoded_point_len();
    let tag_start = envelope_len - 16;
    [0..point, point..tag_start, tag_start..envelope_len]
}
