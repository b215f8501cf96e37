//! Diffie-Hellman key agreement over parameters of the form `2^k - c`.

pub mod diffie_hellman_algorithm;
pub mod error;
pub mod key_exchange_traits;

// Re-export main components for easier access from outside the crypto module.
pub use self::diffie_hellman_algorithm::{compute_shared_secret, DhParameters, DiffieHellman};
pub use self::error::DhError;
pub use self::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
