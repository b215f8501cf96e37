pub mod crypto;
pub use crypto::cipher_context::*;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::error::CipherError;
pub use crypto::utils::derive_key_bytes;
