pub mod keygen;
pub mod rsa;

pub use keygen::{derive_private_exponent, RsaKeyMaterial};
pub use rsa::{decrypt, encrypt, RsaService};
