//! End-to-end tests for the password envelope through the facade crate

use aesvault::symmetric::{
    decrypt, decrypt_with_config, encrypt_with_config, encrypt_with_rng, Envelope, EnvelopeConfig,
    TagSize,
};
use aesvault::Error;
use aesvault_tests::seeded_rng;
use proptest::prelude::*;

const WORKLOAD: u32 = 1;

#[test]
fn test_module_scope_roundtrip() {
    let sealed = aesvault::encrypt(b"pw", b"facade message", WORKLOAD).unwrap();
    assert_eq!(aesvault::decrypt(b"pw", &sealed, WORKLOAD).unwrap(), b"facade message");
}

#[test]
fn test_default_layout_offsets() {
    let mut rng = seeded_rng(11);
    let sealed = encrypt_with_rng(b"pw", &[0u8; 16], WORKLOAD, &mut rng).unwrap();

    // 16 salt + 16 IV + 32 tag + 32 ciphertext (one forced padding block)
    assert_eq!(Envelope::header_len(TagSize::Full), 64);
    assert_eq!(sealed.len(), 96);

    let parsed = Envelope::parse(&sealed, TagSize::Full).unwrap();
    assert_eq!(parsed.ciphertext.len(), 32);
}

#[test]
fn test_shared_config_across_threads() {
    let config = EnvelopeConfig::new(WORKLOAD).with_tag_size(TagSize::Truncated);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                scope.spawn(move || {
                    let mut rng = seeded_rng(i);
                    let message = vec![i as u8; 40];
                    let sealed =
                        encrypt_with_config(b"pw", &message, &config, &mut rng).unwrap();
                    assert_eq!(decrypt_with_config(b"pw", &sealed, &config).unwrap(), message);
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn envelope_roundtrip(
        password in prop::collection::vec(any::<u8>(), 0..32),
        data in prop::collection::vec(any::<u8>(), 0..128),
        workload in 1u32..4,
        seed in any::<u64>()
    ) {
        let mut rng = seeded_rng(seed);
        let sealed = encrypt_with_rng(&password, &data, workload, &mut rng).unwrap();
        prop_assert_eq!(decrypt(&password, &sealed, workload).unwrap(), data);
    }

    #[test]
    fn envelope_detects_any_bit_flip(
        data in prop::collection::vec(any::<u8>(), 0..64),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
        seed in any::<u64>()
    ) {
        let mut rng = seeded_rng(seed);
        let mut sealed = encrypt_with_rng(b"pw", &data, WORKLOAD, &mut rng).unwrap();
        let index = position.index(sealed.len());
        sealed[index] ^= 1 << bit;

        let err = decrypt(b"pw", &sealed, WORKLOAD).unwrap_err();
        prop_assert_eq!(err, Error::IntegrityError { context: "envelope" });
    }

    #[test]
    fn envelope_is_randomized(data in prop::collection::vec(any::<u8>(), 0..64), seed in any::<u64>()) {
        let mut rng = seeded_rng(seed);
        let a = encrypt_with_rng(b"pw", &data, WORKLOAD, &mut rng).unwrap();
        let b = encrypt_with_rng(b"pw", &data, WORKLOAD, &mut rng).unwrap();
        prop_assert_ne!(&a, &b);
        prop_assert_eq!(decrypt(b"pw", &a, WORKLOAD).unwrap(), data.clone());
        prop_assert_eq!(decrypt(b"pw", &b, WORKLOAD).unwrap(), data);
    }
}
