use crate::error::NumberTheoryError;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// НОД двух неотрицательных чисел (итеративный алгоритм Евклида)
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a % &b;
        a = b;
        b = r;
    }
    a
}

/// Возвращает (g, x, y) такие что: ax + by = g = gcd(a, b), g >= 0.
///
/// Коэффициенты ведутся итеративно, так что глубина стека не зависит
/// от длины операндов.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let tmp_r = old_r - &q * &r;
        old_r = r;
        r = tmp_r;

        let tmp_s = old_s - &q * &s;
        old_s = s;
        s = tmp_s;

        let tmp_t = old_t - &q * &t;
        old_t = t;
        t = tmp_t;
    }

    if old_r.is_negative() {
        (-old_r, -old_s, -old_t)
    } else {
        (old_r, old_s, old_t)
    }
}

/// Возведение в степень по модулю: base^exp mod modulus.
///
/// Результат всегда лежит в [0, modulus), в том числе при modulus = 1.
pub fn mod_pow(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, NumberTheoryError> {
    if modulus.is_zero() {
        return Err(NumberTheoryError::ZeroModulus);
    }
    let mut base = base % modulus;
    let mut exp = exponent.clone();
    let mut result = BigUint::one() % modulus;

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }
    Ok(result)
}

/// Обратный элемент: x в [0, m) такой, что a * x ≡ 1 (mod m)
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, NumberTheoryError> {
    if modulus.is_zero() {
        return Err(NumberTheoryError::ZeroModulus);
    }

    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let value = BigInt::from_biguint(Sign::Plus, a.clone());
    let (g, x, _) = extended_gcd(&value, &m);

    if !g.is_one() {
        return Err(NumberTheoryError::NoInverse {
            value: a.clone(),
            modulus: modulus.clone(),
        });
    }

    // mod_floor keeps the representative non-negative
    let x = x.mod_floor(&m);
    x.to_biguint().ok_or(NumberTheoryError::NoInverse {
        value: a.clone(),
        modulus: modulus.clone(),
    })
}
