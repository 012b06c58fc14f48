//! Single-bit tampering in every envelope segment must be detected

use ecies_nist_pke::{decrypt, encrypt, CurveId, Error, PrivateKey};
use ecies_nist_tests::{flip_bit, recipient, seeded_rng, segments};

const PLAINTEXT: &[u8] = b"attack at dawn, bring the maps";

fn envelope_for(key: &PrivateKey, s2: Option<&[u8]>) -> Vec<u8> {
    encrypt(&mut seeded_rng(9), key.public_key(), PLAINTEXT, None, s2).unwrap()
}

#[test]
fn every_bit_of_tag_and_body_is_authenticated() {
    for curve in CurveId::ALL {
        let key = recipient(curve, 3);
        let envelope = envelope_for(&key, Some(b"header"));
        let [_, body, tag] = segments(curve, envelope.len());

        for bit in body.start * 8..tag.end * 8 {
            let tampered = flip_bit(&envelope, bit);
            assert_eq!(
                decrypt(&key, &tampered, None, Some(b"header")),
                Err(Error::TagMismatch),
                "{}: flip of bit {} was accepted",
                curve,
                bit
            );
        }
    }
}

#[test]
fn every_bit_of_ephemeral_point_is_checked() {
    for curve in CurveId::ALL {
        let key = recipient(curve, 4);
        let envelope = envelope_for(&key, None);
        let [point, _, _] = segments(curve, envelope.len());

        for bit in point.start * 8..point.end * 8 {
            let tampered = flip_bit(&envelope, bit);
            assert!(
                decrypt(&key, &tampered, None, None).is_err(),
                "{}: flip of bit {} was accepted",
                curve,
                bit
            );
        }
    }
}

#[test]
fn truncation_and_extension_fail() {
    let key = recipient(CurveId::P256, 5);
    let envelope = envelope_for(&key, None);

    let mut extended = envelope.clone();
    extended.push(0);
    assert_eq!(decrypt(&key, &extended, None, None), Err(Error::TagMismatch));

    let truncated = &envelope[..envelope.len() - 1];
    assert_eq!(decrypt(&key, truncated, None, None), Err(Error::TagMismatch));
}

#[test]
fn prefix_byte_rules() {
    let key = recipient(CurveId::P256, 6);
    let envelope = envelope_for(&key, None);

    let mut bad = envelope.clone();
    bad[0] = 0x07;
    assert_eq!(decrypt(&key, &bad, None, None), Err(Error::InvalidPublicKeyPrefix));

    for prefix in [0x02, 0x03] {
        let mut compressed = envelope.clone();
        compressed[0] = prefix;
        assert_eq!(decrypt(&key, &compressed, None, None), Err(Error::InvalidPublicKey));
    }
}

#[test]
fn cross_curve_agreement_is_rejected() {
    let p256 = recipient(CurveId::P256, 7);
    let p521 = recipient(CurveId::P521, 8);
    assert_eq!(
        p256.derive_shared(p521.public_key(), 16).err(),
        Some(Error::CurveMismatch)
    );
}
