//! Property-based tests for the block core and every mode of operation

use aesvault::{new_cipher, BlockCipher, Error, Mode};
use proptest::prelude::*;

fn any_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 16),
        prop::collection::vec(any::<u8>(), 24),
        prop::collection::vec(any::<u8>(), 32),
    ]
}

fn any_mode() -> impl Strategy<Value = Mode> {
    prop::sample::select(Mode::ALL.to_vec())
}

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=200)
}

proptest! {
    #[test]
    fn block_roundtrip(key in any_key(), block in any::<[u8; 16]>()) {
        let cipher = new_cipher(&key).unwrap();
        let mut buf = block;
        cipher.encrypt_block(&mut buf).unwrap();
        cipher.decrypt_block(&mut buf).unwrap();
        prop_assert_eq!(buf, block);
    }

    #[test]
    fn mode_roundtrip(
        key in any_key(),
        mode in any_mode(),
        iv in any::<[u8; 16]>(),
        data in message()
    ) {
        let cipher = new_cipher(&key).unwrap();
        let ciphertext = cipher.encrypt_with(mode, &data, &iv).unwrap();
        let plaintext = cipher.decrypt_with(mode, &ciphertext, &iv).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn padded_mode_length_law(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        data in message()
    ) {
        let cipher = new_cipher(&key).unwrap();
        let expected = 16 * ((data.len() + 1 + 15) / 16);
        prop_assert_eq!(cipher.encrypt_cbc(&data, &iv).unwrap().len(), expected);
        prop_assert_eq!(cipher.encrypt_pcbc(&data, &iv).unwrap().len(), expected);
    }

    #[test]
    fn stream_mode_length_law(
        key in any_key(),
        iv in any::<[u8; 16]>(),
        data in message()
    ) {
        let cipher = new_cipher(&key).unwrap();
        prop_assert_eq!(cipher.encrypt_cfb(&data, &iv).unwrap().len(), data.len());
        prop_assert_eq!(cipher.encrypt_ofb(&data, &iv).unwrap().len(), data.len());
        prop_assert_eq!(cipher.encrypt_ctr(&data, &iv).unwrap().len(), data.len());
    }

    #[test]
    fn different_ivs_produce_different_ciphertexts(
        key in any_key(),
        mode in any_mode(),
        iv1 in any::<[u8; 16]>(),
        iv2 in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 16..=128)
    ) {
        prop_assume!(iv1 != iv2);

        let cipher = new_cipher(&key).unwrap();
        let ct1 = cipher.encrypt_with(mode, &data, &iv1).unwrap();
        let ct2 = cipher.encrypt_with(mode, &data, &iv2).unwrap();
        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 16]>(),
        key2 in any::<[u8; 16]>(),
        mode in any_mode(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 16..=64)
    ) {
        prop_assume!(key1 != key2);

        let ct1 = new_cipher(&key1).unwrap().encrypt_with(mode, &data, &iv).unwrap();
        let ct2 = new_cipher(&key2).unwrap().encrypt_with(mode, &data, &iv).unwrap();
        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn rejects_bad_key_lengths(len in 0usize..64) {
        prop_assume!(![16, 24, 32].contains(&len));
        let rejected = matches!(
            new_cipher(&vec![0u8; len]),
            Err(Error::InvalidKeyLength { .. })
        );
        prop_assert!(rejected);
    }
}
