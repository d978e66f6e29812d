use aesvault::prelude::*;
use aesvault_tests::unhex;
use aesvault_tests::vectors::{FIPS197, SP800_38A};

#[test]
fn test_fips197_vectors() {
    for v in FIPS197 {
        let cipher = new_cipher(&unhex(v.key)).unwrap();

        let mut block = unhex(v.plaintext);
        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), v.ciphertext, "{}", v.name);

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(&block), v.plaintext, "{}", v.name);
    }
}

#[test]
fn test_sp800_38a_vectors() {
    for v in SP800_38A {
        let cipher = new_cipher(&unhex(v.key)).unwrap();
        let iv = unhex(v.iv);
        let plaintext = unhex(v.plaintext);

        let ciphertext = cipher.encrypt_with(v.mode, &plaintext, &iv).unwrap();
        // CBC appends a padding block after the vector's aligned blocks
        assert_eq!(
            hex::encode(&ciphertext[..plaintext.len()]),
            v.ciphertext,
            "{}",
            v.mode
        );
        assert_eq!(cipher.decrypt_with(v.mode, &ciphertext, &iv).unwrap(), plaintext);
    }
}

#[test]
fn test_rejected_inputs() {
    assert!(matches!(
        new_cipher(&[0u8; 9]),
        Err(Error::InvalidKeyLength { actual: 9, .. })
    ));

    let cipher = new_cipher(&[0u8; 16]).unwrap();
    assert!(matches!(
        cipher.encrypt_cbc(b"message", &[0u8; 9]),
        Err(Error::InvalidIvLength { actual: 9, .. })
    ));

    let mut short = [0u8; 8];
    assert!(matches!(
        cipher.encrypt_block(&mut short),
        Err(Error::InvalidBlockLength { actual: 8, .. })
    ));
}
