pub mod crypto;
pub use crypto::diffie_hellman_algorithm::{compute_shared_secret, DhParameters, DiffieHellman};
pub use crypto::error::DhError;
pub use crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
