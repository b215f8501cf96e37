use crate::crypto::cipher_traits::BlockCipher;
use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use crate::crypto::error::CipherError;
use crate::crypto::utils::{apply_padding, remove_padding, xor_in_place};

/// Mode and padding around a keyed block primitive.
///
/// A context owns its algorithm (and with it the key schedule) and is meant
/// to live for a single encrypt or decrypt call; dropping it on any return
/// path releases everything it holds.
pub struct CipherContext {
    algorithm: Box<dyn BlockCipher + Send + Sync>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
}

impl CipherContext {
    pub fn new(
        algorithm: Box<dyn BlockCipher + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, CipherError> {
        let block_size = algorithm.block_size();

        match (&mode, &iv) {
            (CipherMode::CBC, None) => return Err(CipherError::MissingIv(mode)),
            (_, Some(iv)) if iv.len() != block_size => {
                return Err(CipherError::InvalidIvLength {
                    expected: block_size,
                    actual: iv.len(),
                })
            }
            (CipherMode::ECB, Some(_)) => log::debug!("IV is ignored in ECB mode"),
            _ => {}
        }

        Ok(Self {
            algorithm,
            mode,
            padding,
            iv,
        })
    }

    /// Keys `algorithm` and wraps it in one step.
    pub fn with_key(
        mut algorithm: Box<dyn BlockCipher + Send + Sync>,
        key: &[u8],
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, CipherError> {
        algorithm.set_key(key)?;
        Self::new(algorithm, mode, padding, iv)
    }

    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.algorithm.set_key(key)
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    fn initial_chain(&self) -> Vec<u8> {
        self.iv
            .clone()
            .unwrap_or_else(|| vec![0u8; self.algorithm.block_size()])
    }

    fn process_single_block(
        &self,
        block: &[u8],
        prev: &mut Vec<u8>,
        encrypt: bool,
    ) -> Result<Vec<u8>, CipherError> {
        match self.mode {
            CipherMode::ECB => {
                if encrypt {
                    self.algorithm.encrypt_block(block)
                } else {
                    self.algorithm.decrypt_block(block)
                }
            }
            CipherMode::CBC => {
                if encrypt {
                    let mut block = block.to_vec();
                    xor_in_place(&mut block, prev);

                    let encrypted = self.algorithm.encrypt_block(&block)?;

                    prev.clear();
                    prev.extend_from_slice(&encrypted);

                    Ok(encrypted)
                } else {
                    let mut result = self.algorithm.decrypt_block(block)?;
                    xor_in_place(&mut result, prev);

                    prev.clear();
                    prev.extend_from_slice(block);

                    Ok(result)
                }
            }
        }
    }

    /// Pads and encrypts; output length is a non-zero multiple of the block size.
    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.algorithm.block_size();
        let prepared_data = apply_padding(data.to_vec(), block_size, self.padding);

        let mut prev = self.initial_chain();
        let mut result = Vec::with_capacity(prepared_data.len());
        for chunk in prepared_data.chunks(block_size) {
            let processed = self.process_single_block(chunk, &mut prev, true)?;
            result.extend_from_slice(&processed);
        }

        Ok(result)
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.algorithm.block_size();
        if data.is_empty() || data.len() % block_size != 0 {
            return Err(CipherError::Decryption {
                len: data.len(),
                block_size,
            });
        }

        let mut prev = self.initial_chain();
        let mut result = Vec::with_capacity(data.len());
        for chunk in data.chunks(block_size) {
            let processed = self.process_single_block(chunk, &mut prev, false)?;
            result.extend_from_slice(&processed);
        }

        remove_padding(result, block_size, self.padding)
    }
}
