//! Arbitrary-precision modular arithmetic shared by the key agreement and
//! RSA crates.

pub mod derivation;
pub mod error;
pub mod modular;

pub use derivation::{derive_value, DerivedValue};
pub use error::NumberTheoryError;
pub use modular::{extended_gcd, gcd, mod_inverse, mod_pow};
