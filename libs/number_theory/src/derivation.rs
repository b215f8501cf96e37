use crate::error::NumberTheoryError;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

/// Значение вида 2^exponent - subtrahend, строго положительное
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedValue {
    exponent: u32,
    subtrahend: BigUint,
    value: BigUint,
}

impl DerivedValue {
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn subtrahend(&self) -> &BigUint {
        &self.subtrahend
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    pub fn into_value(self) -> BigUint {
        self.value
    }

    /// Human-readable origin, e.g. `2^127 - 1`.
    pub fn describe(&self) -> String {
        format!("2^{} - {}", self.exponent, self.subtrahend)
    }
}

impl fmt::Display for DerivedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Вычисляет 2^exponent - subtrahend.
///
/// Ошибка `InvalidParameter`, если результат не строго положителен.
pub fn derive_value(exponent: u32, subtrahend: &BigUint) -> Result<DerivedValue, NumberTheoryError> {
    let power = BigUint::one() << exponent;

    if subtrahend >= &power {
        return Err(NumberTheoryError::InvalidParameter {
            exponent,
            subtrahend: subtrahend.clone(),
        });
    }

    let value = power - subtrahend;
    debug_assert!(!value.is_zero());
    log::debug!(
        "derived 2^{} - {} ({} bits)",
        exponent,
        subtrahend,
        value.bits()
    );

    Ok(DerivedValue {
        exponent,
        subtrahend: subtrahend.clone(),
        value,
    })
}
