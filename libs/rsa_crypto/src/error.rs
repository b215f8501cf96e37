use number_theory::NumberTheoryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    #[error("RSA key derivation failed: {0}")]
    KeyDerivation(#[from] NumberTheoryError),
}
