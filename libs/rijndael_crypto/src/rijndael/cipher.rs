use aes::{Aes128, Aes192, Aes256};
use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{BlockCipher, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherMode, KeyWidth, PaddingMode};
use symmetric_cipher::CipherError;

/// Rijndael with a 128-bit block, i.e. AES.
pub const BLOCK_SIZE: usize = 16;

enum KeySchedule {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl KeySchedule {
    fn expand(key: &[u8]) -> Result<Self, CipherError> {
        let width = KeyWidth::from_bytes(key.len())?;
        let invalid = |_| CipherError::InvalidKeyLength {
            actual: key.len(),
            expected: "16, 24 or 32",
        };
        let schedule = match width {
            KeyWidth::Aes128 => KeySchedule::Aes128(Aes128::new_from_slice(key).map_err(invalid)?),
            KeyWidth::Aes192 => KeySchedule::Aes192(Aes192::new_from_slice(key).map_err(invalid)?),
            KeyWidth::Aes256 => KeySchedule::Aes256(Aes256::new_from_slice(key).map_err(invalid)?),
        };
        Ok(schedule)
    }

    fn encrypt(&self, block: &mut GenericArray<u8, cipher::consts::U16>) {
        match self {
            KeySchedule::Aes128(c) => c.encrypt_block(block),
            KeySchedule::Aes192(c) => c.encrypt_block(block),
            KeySchedule::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt(&self, block: &mut GenericArray<u8, cipher::consts::U16>) {
        match self {
            KeySchedule::Aes128(c) => c.decrypt_block(block),
            KeySchedule::Aes192(c) => c.decrypt_block(block),
            KeySchedule::Aes256(c) => c.decrypt_block(block),
        }
    }
}

/// Block primitive for [`CipherContext`]. Unkeyed until `set_key` succeeds.
#[derive(Default)]
pub struct Rijndael {
    schedule: Option<KeySchedule>,
}

impl Rijndael {
    pub fn new() -> Self {
        Self::default()
    }

    fn process(&self, block: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError> {
        let schedule = self.schedule.as_ref().ok_or(CipherError::KeyNotSet)?;
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockLength {
                expected: BLOCK_SIZE,
                actual: block.len(),
            });
        }

        let mut state = GenericArray::clone_from_slice(block);
        if encrypt {
            schedule.encrypt(&mut state);
        } else {
            schedule.decrypt(&mut state);
        }
        Ok(state.to_vec())
    }
}

impl SymmetricCipher for Rijndael {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.schedule = Some(KeySchedule::expand(key)?);
        log::debug!("rijndael keyed with a {}-bit key", key.len() * 8);
        Ok(())
    }
}

impl BlockCipher for Rijndael {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(block, true)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.process(block, false)
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

fn cbc_context(key: &[u8], iv: &[u8]) -> Result<CipherContext, CipherError> {
    CipherContext::with_key(
        Box::new(Rijndael::new()),
        key,
        CipherMode::CBC,
        PaddingMode::PKCS7,
        Some(iv.to_vec()),
    )
}

/// AES-CBC with PKCS#7 padding.
pub fn encrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
    cbc_context(key, iv)?.encrypt(data)
}

/// Inverse of [`encrypt`]. A wrong key or IV usually surfaces as
/// `CipherError::Padding`.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>, CipherError> {
    cbc_context(key, iv)?.decrypt(ciphertext)
}
