use dh_crypto::DhError;
use rsa_crypto::RsaError;
use symmetric_cipher::CipherError;
use thiserror::Error;

/// The primitive that failed inside an encryption or decryption stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageFailure {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Rsa(#[from] RsaError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("cannot parse {field} from {value:?}: {reason}")]
    Parse {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("key agreement failed: {0}")]
    KeyAgreement(#[from] DhError),

    #[error("key derivation failed: {0}")]
    KeyDerivation(#[from] RsaError),

    #[error("cannot build cipher key from shared secret: {0}")]
    KeyMaterial(#[source] CipherError),

    #[error("decryption failed: {0}")]
    Decryption(#[source] StageFailure),

    #[error("encryption failed: {0}")]
    Encryption(#[source] StageFailure),
}

impl CliError {
    pub(crate) fn parse(field: &'static str, value: &str, reason: impl ToString) -> Self {
        CliError::Parse {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
