use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid key length: {actual} bytes, expected {expected}")]
    InvalidKeyLength { actual: usize, expected: &'static str },

    #[error("invalid IV length: {actual} bytes, expected {expected}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("{0:?} mode requires an initialization vector")]
    MissingIv(crate::crypto::cipher_types::CipherMode),

    #[error("invalid block length: {actual} bytes, expected {expected}")]
    InvalidBlockLength { expected: usize, actual: usize },

    #[error("cipher key has not been set")]
    KeyNotSet,

    #[error("ciphertext length {len} is not a positive multiple of the block size {block_size}")]
    Decryption { len: usize, block_size: usize },

    #[error("invalid padding in final block")]
    Padding,
}
