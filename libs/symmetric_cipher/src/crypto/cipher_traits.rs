use crate::crypto::error::CipherError;

pub trait SymmetricCipher {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
}

/// Block primitive driven by `CipherContext`. Blocks are exactly
/// `block_size()` bytes long.
pub trait BlockCipher: SymmetricCipher {
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn block_size(&self) -> usize;
}
