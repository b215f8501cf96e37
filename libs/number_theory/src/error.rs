use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberTheoryError {
    #[error("2^{exponent} - {subtrahend} is not strictly positive")]
    InvalidParameter { exponent: u32, subtrahend: BigUint },

    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigUint, modulus: BigUint },

    #[error("modulus must be non-zero")]
    ZeroModulus,
}
