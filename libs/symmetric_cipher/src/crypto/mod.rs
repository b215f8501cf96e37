pub mod cipher_context;
pub mod cipher_traits;
pub mod cipher_types;
pub mod error;
pub mod utils;
