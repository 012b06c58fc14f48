//! Property-based round-trip and context-binding tests

use ecies_nist_pke::{decrypt, encrypt, CurveId, Error};
use ecies_nist_tests::{recipient, seeded_rng};
use proptest::prelude::*;

fn curve() -> impl Strategy<Value = CurveId> {
    prop_oneof![Just(CurveId::P256), Just(CurveId::P521)]
}

fn context() -> impl Strategy<Value = Option<Vec<u8>>> {
    prop::option::of(prop::collection::vec(any::<u8>(), 0..48))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn roundtrip_any_plaintext_and_context(
        curve in curve(),
        seed in any::<u64>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..512),
        s1 in context(),
        s2 in context(),
    ) {
        let key = recipient(curve, seed);
        let mut rng = seeded_rng(seed ^ 0x5eed);

        let envelope = encrypt(&mut rng, key.public_key(), &plaintext, s1.as_deref(), s2.as_deref()).unwrap();
        prop_assert_eq!(
            envelope.len(),
            curve.profile().encoded_point_len() + 16 + plaintext.len() + 16
        );

        let decrypted = decrypt(&key, &envelope, s1.as_deref(), s2.as_deref()).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn mismatched_shared_info_fails(
        curve in curve(),
        seed in any::<u64>(),
        s1 in prop::collection::vec(any::<u8>(), 1..32),
        other in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        prop_assume!(s1 != other);
        let key = recipient(curve, seed);
        let envelope = encrypt(&mut seeded_rng(seed), key.public_key(), b"payload", Some(s1.as_slice()), None).unwrap();

        prop_assert!(decrypt(&key, &envelope, Some(other.as_slice()), None).is_err());
        prop_assert!(decrypt(&key, &envelope, None, None).is_err());
    }

    #[test]
    fn mismatched_associated_data_fails(
        curve in curve(),
        seed in any::<u64>(),
        s2 in prop::collection::vec(any::<u8>(), 1..32),
        other in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        prop_assume!(s2 != other);
        let key = recipient(curve, seed);
        let envelope = encrypt(&mut seeded_rng(seed), key.public_key(), b"payload", None, Some(s2.as_slice())).unwrap();

        prop_assert!(decrypt(&key, &envelope, None, Some(other.as_slice())).is_err());
        prop_assert!(decrypt(&key, &envelope, None, None).is_err());
    }

    #[test]
    fn short_inputs_are_rejected_without_panic(
        curve in curve(),
        prefix in 2u8..=4,
        len in 0usize..149,
    ) {
        let key = recipient(curve, 1);
        let len = len % (curve.profile().encoded_point_len() + 16);
        let mut bytes = vec![0xa5u8; len];
        if let Some(first) = bytes.first_mut() {
            *first = prefix;
        }

        let expected = if len == 0 { Error::EmptyMessage } else { Error::MessageTooShort };
        prop_assert_eq!(decrypt(&key, &bytes, None, None), Err(expected));
    }
}

#[test]
fn freshness_same_inputs_differ() {
    for curve in CurveId::ALL {
        let key = recipient(curve, 42);
        let mut rng = seeded_rng(43);
        let first = encrypt(&mut rng, key.public_key(), b"abc123", None, None).unwrap();
        let second = encrypt(&mut rng, key.public_key(), b"abc123", None, None).unwrap();

        assert_ne!(first, second);
        assert_ne!(first[..curve.profile().encoded_point_len()], second[..curve.profile().encoded_point_len()]);
        assert_eq!(decrypt(&key, &first, None, None).unwrap(), b"abc123");
        assert_eq!(decrypt(&key, &second, None, None).unwrap(), b"abc123");
    }
}
