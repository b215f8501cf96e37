pub(crate) mod miller_rabin;
pub use miller_rabin::MillerRabinTest;

use num_bigint::BigUint;

/// Интерфейс для вероятностного теста простоты.
/// Использует шаблонный метод: фиксированный public API, переопределяется одна итерация.
pub trait PrimalityTest {
    /// Основной метод: возвращает true, если n вероятно простое с заданной вероятностью
    fn is_probably_prime(&self, n: &BigUint, confidence: f64) -> bool {
        if let Some(verdict) = self.trivial_verdict(n) {
            return verdict;
        }
        let iterations = confidence_to_iterations(confidence);
        for _ in 0..iterations {
            if !self.run_iteration(n) {
                return false;
            }
        }
        true
    }

    /// Ответ без случайных свидетелей для малых и чётных n
    fn trivial_verdict(&self, n: &BigUint) -> Option<bool> {
        if *n < BigUint::from(2u32) {
            return Some(false);
        }
        if *n < BigUint::from(4u32) {
            return Some(true);
        }
        if !n.bit(0) {
            return Some(false);
        }
        None
    }

    /// Одна итерация теста для нечётного n >= 5
    fn run_iteration(&self, n: &BigUint) -> bool;
}

fn confidence_to_iterations(confidence: f64) -> u32 {
    // вероятность ошибки одной итерации не больше 1/2:
    // confidence = 1 - (1/2)^k  =>  k = log2(1 / (1 - confidence))
    let iterations = (1.0 / (1.0 - confidence)).log2().ceil();
    if iterations.is_finite() && iterations >= 1.0 {
        iterations as u32
    } else {
        1
    }
}
