use num_bigint::BigUint;
use number_theory::NumberTheoryError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DhError {
    #[error("invalid Diffie-Hellman parameter: {0}")]
    Parameter(#[from] NumberTheoryError),

    #[error("base {g} must lie in (0, {p})")]
    BaseOutOfRange { g: BigUint, p: BigUint },
}
