use crate::crypto::error::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    ECB,
    CBC,
}

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingMode {
    PKCS7,
    ANSI_X923,
}

/// Key widths accepted by the block cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyWidth {
    Aes128,
    Aes192,
    Aes256,
}

impl KeyWidth {
    pub const ALL: [KeyWidth; 3] = [KeyWidth::Aes128, KeyWidth::Aes192, KeyWidth::Aes256];

    pub fn bytes(self) -> usize {
        match self {
            KeyWidth::Aes128 => 16,
            KeyWidth::Aes192 => 24,
            KeyWidth::Aes256 => 32,
        }
    }

    /// Exact match only.
    pub fn from_bytes(len: usize) -> Result<Self, CipherError> {
        Self::ALL
            .into_iter()
            .find(|width| width.bytes() == len)
            .ok_or(CipherError::InvalidKeyLength {
                actual: len,
                expected: "16, 24 or 32",
            })
    }

    /// Smallest width that holds `len` bytes.
    pub fn fitting(len: usize) -> Result<Self, CipherError> {
        Self::ALL
            .into_iter()
            .find(|width| width.bytes() >= len)
            .ok_or(CipherError::InvalidKeyLength {
                actual: len,
                expected: "at most 32",
            })
    }

    pub(crate) fn limit(self) -> &'static str {
        match self {
            KeyWidth::Aes128 => "at most 16",
            KeyWidth::Aes192 => "at most 24",
            KeyWidth::Aes256 => "at most 32",
        }
    }
}
