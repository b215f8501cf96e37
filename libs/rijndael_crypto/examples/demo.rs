// examples/demo.rs

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use rijndael_crypto::{decrypt, encrypt, Rijndael};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::CipherError;

fn random_bytes(len: usize, rng: &mut impl RngCore) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}

fn main() -> Result<(), CipherError> {
    // --------------------------------------------------------
    // 0) Single-block AES (FIPS-197 Appendix B)
    // --------------------------------------------------------
    println!("=== Single-block AES demo ===");
    let key128 = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
        0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
    ];
    let block = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d,
        0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34,
    ];
    let mut cipher = Rijndael::new();
    cipher.set_key(&key128)?;
    let enc = cipher.encrypt_block(&block)?;
    let dec = cipher.decrypt_block(&enc)?;
    println!(" Encrypted block: {:02x?}", enc);
    assert_eq!(dec, block);

    // --------------------------------------------------------
    // 1) Random data: modes, paddings, key sizes
    // --------------------------------------------------------
    println!("\n=== Random data demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let data = random_bytes(1024, &mut rng);

    for ks in [16usize, 24, 32] {
        let key = random_bytes(ks, &mut rng);
        for mode in [CipherMode::ECB, CipherMode::CBC] {
            for pad in [PaddingMode::PKCS7, PaddingMode::ANSI_X923] {
                let iv = match mode {
                    CipherMode::ECB => None,
                    CipherMode::CBC => Some(random_bytes(16, &mut rng)),
                };
                let ctx = CipherContext::with_key(Box::new(Rijndael::new()), &key, mode, pad, iv)?;

                let encrypted = ctx.encrypt(&data)?;
                let decrypted = ctx.decrypt(&encrypted)?;
                assert_eq!(decrypted, data);

                println!(
                    "key={}b {}+{} OK",
                    ks * 8,
                    format!("{:?}", mode).to_lowercase(),
                    format!("{:?}", pad).to_lowercase()
                );
            }
        }
    }

    // --------------------------------------------------------
    // 2) Text through the CBC helpers
    // --------------------------------------------------------
    println!("\n=== Text demo ===");
    let key = random_bytes(16, &mut rng);
    let iv = random_bytes(16, &mut rng);
    let text = "Привет, AES!";
    let encrypted = encrypt(text.as_bytes(), &key, &iv)?;
    let decrypted = decrypt(&encrypted, &key, &iv)?;
    println!(" {} -> {} bytes -> {}", text, encrypted.len(), String::from_utf8_lossy(&decrypted));

    Ok(())
}
