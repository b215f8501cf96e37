use std::fmt;

use num_bigint::BigUint;
use symmetric_cipher::{derive_key_bytes, CipherError, KeyWidth};

use crate::args::{DhkeArgs, RsaArgs};
use crate::codec::{bytes_from_hex, hex_from_bytes, parse_decimal, parse_exponent};
use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhkeOutput {
    pub decrypted: String,
    pub encrypted: Vec<u8>,
}

impl fmt::Display for DhkeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.decrypted, hex_from_bytes(&self.encrypted))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaOutput {
    pub decrypted: BigUint,
    pub encrypted: BigUint,
}

impl fmt::Display for RsaOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.decrypted, self.encrypted)
    }
}

/// Shared secret as AES key bytes. Without an explicit width the smallest
/// AES key size holding the secret's little-endian bytes is used.
fn secret_to_key(secret: &BigUint, width: Option<KeyWidth>) -> Result<Vec<u8>, CipherError> {
    let width = match width {
        Some(width) => width,
        None => KeyWidth::fitting(secret.to_bytes_le().len())?,
    };
    log::debug!("AES key width: {} bits", width.bytes() * 8);
    derive_key_bytes(secret, width)
}

pub fn run_dhke(args: &DhkeArgs) -> Result<DhkeOutput, CliError> {
    let iv = bytes_from_hex("IV", &args.iv)?;
    let base_exp = parse_exponent("BASE_EXP", &args.base_exp)?;
    let base_sub = parse_decimal("BASE_SUB", &args.base_sub)?;
    let mod_exp = parse_exponent("MOD_EXP", &args.mod_exp)?;
    let mod_sub = parse_decimal("MOD_SUB", &args.mod_sub)?;
    let private = parse_decimal("PRIVATE", &args.private)?;
    let peer_public = parse_decimal("PEER_PUBLIC", &args.peer_public)?;
    let ciphertext = bytes_from_hex("CIPHERTEXT", &args.ciphertext)?;

    let secret = dh_crypto::compute_shared_secret(
        base_exp,
        &base_sub,
        mod_exp,
        &mod_sub,
        &private,
        &peer_public,
    )?;

    let key = secret_to_key(&secret, args.key_width).map_err(CliError::KeyMaterial)?;

    let decrypted = rijndael_crypto::decrypt(&ciphertext, &key, &iv)
        .map_err(|e| CliError::Decryption(e.into()))?;
    let encrypted = rijndael_crypto::encrypt(args.plaintext.as_bytes(), &key, &iv)
        .map_err(|e| CliError::Encryption(e.into()))?;

    Ok(DhkeOutput {
        decrypted: String::from_utf8_lossy(&decrypted).into_owned(),
        encrypted,
    })
}

pub fn run_rsa(args: &RsaArgs) -> Result<RsaOutput, CliError> {
    let p_exp = parse_exponent("P_EXP", &args.p_exp)?;
    let p_sub = parse_decimal("P_SUB", &args.p_sub)?;
    let q_exp = parse_exponent("Q_EXP", &args.q_exp)?;
    let q_sub = parse_decimal("Q_SUB", &args.q_sub)?;
    let e_exp = parse_exponent("E_EXP", &args.e_exp)?;
    let e_sub = parse_decimal("E_SUB", &args.e_sub)?;
    let ciphertext = parse_decimal("CIPHERTEXT", &args.ciphertext)?;
    let plaintext = parse_decimal("PLAINTEXT", &args.plaintext)?;

    let material = rsa_crypto::derive_private_exponent(p_exp, &p_sub, q_exp, &q_sub, e_exp, &e_sub)?;
    let service = rsa_crypto::RsaService::new(material);

    let decrypted = service
        .decrypt(&ciphertext)
        .map_err(|e| CliError::Decryption(e.into()))?;
    let encrypted = service
        .encrypt(&plaintext)
        .map_err(|e| CliError::Encryption(e.into()))?;

    Ok(RsaOutput {
        decrypted,
        encrypted,
    })
}
