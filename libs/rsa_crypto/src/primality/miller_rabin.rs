use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use number_theory::mod_pow;
use rand::thread_rng;

/// Структура, реализующая тест Миллера–Рабина
pub struct MillerRabinTest;

impl PrimalityTest for MillerRabinTest {
    fn run_iteration(&self, n: &BigUint) -> bool {
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        let upper = n - &one;

        let mut d = upper.clone();
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        let mut rng = thread_rng();
        // свидетель a ∈ [2, n-2]
        let a = rng.gen_biguint_range(&two, &upper);
        let mut x = match mod_pow(&a, &d, n) {
            Ok(x) => x,
            Err(_) => return false,
        };

        if x == one || x == upper {
            return true;
        }

        for _ in 1..s {
            x = (&x * &x) % n;

            if x == upper {
                return true;
            }

            if x == one {
                return false;
            }
        }

        false
    }
}
