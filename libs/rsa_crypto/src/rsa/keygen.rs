use crate::error::RsaError;
use crate::primality::{MillerRabinTest, PrimalityTest};
use num_bigint::BigUint;
use num_traits::One;
use number_theory::{derive_value, mod_inverse, DerivedValue};

const PRIMALITY_CONFIDENCE: f64 = 0.99;

/// Ключевой материал RSA, полученный из параметров вида 2^k - c
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyMaterial {
    pub p: BigUint,
    pub q: BigUint,
    pub e: BigUint,
    pub n: BigUint,
    pub phi: BigUint,
    pub d: BigUint,
}

impl RsaKeyMaterial {
    /// Собирает ключ из готовых p, q, e: n = pq, phi = (p-1)(q-1), d = e^-1 mod phi
    pub fn from_components(p: BigUint, q: BigUint, e: BigUint) -> Result<Self, RsaError> {
        let one = BigUint::one();
        let n = &p * &q;
        let phi = (&p - &one) * (&q - &one);
        let d = mod_inverse(&e, &phi)?;

        Ok(Self { p, q, e, n, phi, d })
    }
}

/// Выводит p, q, e и вычисляет закрытую экспоненту d.
///
/// Ошибка `NoInverse`, если gcd(e, phi) != 1.
pub fn derive_private_exponent(
    p_exp: u32,
    p_sub: &BigUint,
    q_exp: u32,
    q_sub: &BigUint,
    e_exp: u32,
    e_sub: &BigUint,
) -> Result<RsaKeyMaterial, RsaError> {
    let p = derive_value(p_exp, p_sub)?;
    let q = derive_value(q_exp, q_sub)?;
    let e = derive_value(e_exp, e_sub)?;

    check_factor("p", &p);
    check_factor("q", &q);
    if p == q {
        log::warn!("p and q are equal; phi(n) will not match Euler's totient of n");
    }

    let material = RsaKeyMaterial::from_components(p.into_value(), q.into_value(), e.into_value())?;
    log::debug!(
        "RSA modulus: {} bits, private exponent: {} bits",
        material.n.bits(),
        material.d.bits()
    );
    Ok(material)
}

fn check_factor(name: &str, factor: &DerivedValue) {
    if !MillerRabinTest.is_probably_prime(factor.value(), PRIMALITY_CONFIDENCE) {
        log::warn!("{} = {} is not prime", name, factor.describe());
    }
}
