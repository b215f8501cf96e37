pub mod rijndael;

pub use rijndael::cipher::{decrypt, encrypt, Rijndael, BLOCK_SIZE};
