pub mod error;
pub mod primality;
pub mod rsa;

pub use error::RsaError;
pub use rsa::{decrypt, derive_private_exponent, encrypt, RsaKeyMaterial, RsaService};
