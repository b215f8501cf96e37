use hex_literal::hex;
use quickcheck::quickcheck;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rijndael_crypto::{decrypt, encrypt, Rijndael};
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use symmetric_cipher::CipherError;

fn keyed(key: &[u8]) -> Rijndael {
    let mut cipher = Rijndael::new();
    cipher.set_key(key).expect("valid AES key");
    cipher
}

fn check_block(key: &[u8], plaintext: [u8; 16], expected: [u8; 16]) {
    let cipher = keyed(key);
    let encrypted = cipher.encrypt_block(&plaintext).unwrap();
    assert_eq!(encrypted, expected.to_vec(), "{}-bit encryption mismatch", key.len() * 8);

    let decrypted = cipher.decrypt_block(&encrypted).unwrap();
    assert_eq!(decrypted, plaintext.to_vec(), "{}-bit decryption failed to invert", key.len() * 8);
}

#[test]
fn test_aes128_fips197_appendix_b() {
    check_block(
        &hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        hex!("3243f6a8885a308d313198a2e0370734"),
        hex!("3925841d02dc09fbdc118597196a0b32"),
    );
}

#[test]
fn test_aes128_fips197_appendix_c() {
    check_block(
        &hex!("000102030405060708090a0b0c0d0e0f"),
        hex!("00112233445566778899aabbccddeeff"),
        hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    );
}

#[test]
fn test_aes192_fips197_appendix_c() {
    check_block(
        &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        hex!("00112233445566778899aabbccddeeff"),
        hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
    );
}

#[test]
fn test_aes256_fips197_appendix_c() {
    check_block(
        &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        hex!("00112233445566778899aabbccddeeff"),
        hex!("8ea2b7ca516745bfeafc49904b496089"),
    );
}

#[test]
fn test_cbc_sp800_38a_f21() {
    let key = hex!("2b7e151628aed2a6abf7158809cf4f3c");
    let iv = hex!("000102030405060708090a0b0c0d0e0f");
    let plaintext = hex!(
        "6bc1bee22e409f96e93d7e117393172a ae2d8a571e03ac9c9eb76fac45af8e51
         30c81c46a35ce411e5fbc1191a0a52ef f69f2445df4f9b17ad2b417be66c3710"
    );
    let expected = hex!(
        "7649abac8119b246cee98e9b12e9197d 5086cb9b507219ee95db113a917678b2
         73bed6b8e3c1743b7116e69e22229516 3ff1caa1681fac09120eca307586e1a7"
    );

    let ciphertext = encrypt(&plaintext, &key, &iv).unwrap();
    // aligned input gains one full padding block
    assert_eq!(ciphertext.len(), plaintext.len() + 16);
    assert_eq!(&ciphertext[..64], &expected[..]);

    assert_eq!(decrypt(&ciphertext, &key, &iv).unwrap(), plaintext.to_vec());
}

#[test]
fn test_cbc_roundtrip_all_key_widths() {
    let mut rng = StdRng::seed_from_u64(0xdead_beef);
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);

    for key_len in [16usize, 24, 32] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);

        for data_len in [0usize, 1, 15, 16, 17, 100] {
            let mut data = vec![0u8; data_len];
            rng.fill_bytes(&mut data);

            let ciphertext = encrypt(&data, &key, &iv).unwrap();
            assert_eq!(ciphertext.len(), (data_len / 16 + 1) * 16);
            assert_eq!(
                decrypt(&ciphertext, &key, &iv).unwrap(),
                data,
                "KeyLen: {}, DataLen: {}",
                key_len,
                data_len
            );
        }
    }
}

#[test]
fn test_empty_plaintext_is_one_block() {
    let key = [7u8; 16];
    let iv = [0u8; 16];
    let ciphertext = encrypt(b"", &key, &iv).unwrap();
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(decrypt(&ciphertext, &key, &iv).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_invalid_key_lengths() {
    for len in [0usize, 1, 15, 17, 20, 31, 33, 64] {
        let mut cipher = Rijndael::new();
        assert_eq!(
            cipher.set_key(&vec![0u8; len]),
            Err(CipherError::InvalidKeyLength {
                actual: len,
                expected: "16, 24 or 32"
            })
        );
        assert!(encrypt(b"data", &vec![0u8; len], &[0u8; 16]).is_err());
    }
}

#[test]
fn test_invalid_iv_length() {
    assert_eq!(
        encrypt(b"data", &[0u8; 16], &[0u8; 8]),
        Err(CipherError::InvalidIvLength {
            expected: 16,
            actual: 8
        })
    );
}

#[test]
fn test_misaligned_ciphertext() {
    let key = [1u8; 16];
    let iv = [2u8; 16];
    assert!(matches!(
        decrypt(&[0u8; 20], &key, &iv),
        Err(CipherError::Decryption { len: 20, block_size: 16 })
    ));
    assert!(matches!(
        decrypt(&[], &key, &iv),
        Err(CipherError::Decryption { len: 0, .. })
    ));
}

#[test]
fn test_tampered_iv_breaks_padding() {
    let key = [9u8; 32];
    let iv = [0u8; 16];
    let ciphertext = encrypt(b"hello", &key, &iv).unwrap();

    // Flipping IV byte 15 flips the decrypted pad byte from 0x0b to 0x00.
    let mut tampered_iv = iv;
    tampered_iv[15] ^= 0x0b;
    assert_eq!(decrypt(&ciphertext, &key, &tampered_iv), Err(CipherError::Padding));
}

quickcheck! {
    fn prop_cbc_roundtrip(data: Vec<u8>, seed: u64) -> bool {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut key = [0u8; 16];
        let mut iv = [0u8; 16];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut iv);

        let ciphertext = encrypt(&data, &key, &iv).unwrap();
        decrypt(&ciphertext, &key, &iv).unwrap() == data
    }
}
