use crate::crypto::cipher_types::{KeyWidth, PaddingMode};
use crate::crypto::error::CipherError;
use num_bigint::BigUint;

/// Always appends 1..=block_size bytes, so aligned input gains a full block.
pub fn apply_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    let padding_length = block_size - (data.len() % block_size);

    match padding {
        PaddingMode::ANSI_X923 => {
            data.extend(vec![0; padding_length - 1]);
            data.push(padding_length as u8);
        }
        PaddingMode::PKCS7 => {
            data.extend(vec![padding_length as u8; padding_length]);
        }
    }
    data
}

pub fn remove_padding(
    mut data: Vec<u8>,
    block_size: usize,
    padding: PaddingMode,
) -> Result<Vec<u8>, CipherError> {
    let last_byte = *data.last().ok_or(CipherError::Padding)?;
    let pad_len = last_byte as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        return Err(CipherError::Padding);
    }

    let pad_region = &data[data.len() - pad_len..data.len() - 1];
    let consistent = match padding {
        PaddingMode::PKCS7 => pad_region.iter().all(|&b| b == last_byte),
        PaddingMode::ANSI_X923 => pad_region.iter().all(|&b| b == 0),
    };
    if !consistent {
        return Err(CipherError::Padding);
    }

    data.truncate(data.len() - pad_len);
    Ok(data)
}

/// Unsigned little-endian bytes of `secret`, right-padded with zeros to
/// `width`. A secret wider than `width` is rejected rather than truncated.
pub fn derive_key_bytes(secret: &BigUint, width: KeyWidth) -> Result<Vec<u8>, CipherError> {
    let mut key = secret.to_bytes_le();
    if key.len() > width.bytes() {
        return Err(CipherError::InvalidKeyLength {
            actual: key.len(),
            expected: width.limit(),
        });
    }
    key.resize(width.bytes(), 0);
    Ok(key)
}

#[inline]
pub fn xor_in_place(block: &mut [u8], other: &[u8]) {
    for (b, &o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor_is_an_involution() {
        let mut block = vec![0x12, 0x34, 0x56];
        xor_in_place(&mut block, &[0xff, 0x00, 0x0f]);
        assert_eq!(block, vec![0xed, 0x34, 0x59]);
        xor_in_place(&mut block, &[0xff, 0x00, 0x0f]);
        assert_eq!(block, vec![0x12, 0x34, 0x56]);
    }
}
