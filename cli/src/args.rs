use clap::{ArgAction, Args, Parser};
use symmetric_cipher::KeyWidth;

/// Diffie-Hellman key agreement followed by AES-CBC decryption and encryption.
///
/// Base and modulus are given as `2^EXP - SUB`. Options go before the
/// positionals; the last two positionals take any token, including ones
/// starting with `-`.
#[derive(Debug, Clone, Parser)]
#[command(name = "dhke", version, disable_help_flag = true, disable_version_flag = true)]
pub struct DhkeArgs {
    /// Initialization vector, 16 bytes of hex (spaces allowed)
    pub iv: String,
    /// Exponent of the base g = 2^BASE_EXP - BASE_SUB
    pub base_exp: String,
    pub base_sub: String,
    /// Exponent of the modulus p = 2^MOD_EXP - MOD_SUB
    pub mod_exp: String,
    pub mod_sub: String,
    /// Own private value, decimal
    pub private: String,
    /// Peer's public value, decimal
    pub peer_public: String,
    /// Ciphertext to decrypt, hex (spaces allowed)
    #[arg(allow_hyphen_values = true)]
    pub ciphertext: String,
    /// Text to encrypt
    #[arg(allow_hyphen_values = true)]
    pub plaintext: String,
    /// AES key size in bytes; by default the smallest size that holds the shared secret
    #[arg(long, value_parser = parse_key_width)]
    pub key_width: Option<KeyWidth>,
    #[command(flatten)]
    pub info: InfoFlags,
}

/// `--help` and `--version` without their short forms, so that `-h...`
/// reaches the plaintext.
#[derive(Debug, Clone, Default, Args)]
pub struct InfoFlags {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,
}

/// RSA key derivation from `2^EXP - SUB` parameters, then decryption and encryption.
#[derive(Debug, Clone, Parser)]
#[command(name = "rsa", version)]
pub struct RsaArgs {
    pub p_exp: String,
    pub p_sub: String,
    pub q_exp: String,
    pub q_sub: String,
    pub e_exp: String,
    pub e_sub: String,
    /// Ciphertext integer to decrypt, decimal
    #[arg(allow_hyphen_values = true)]
    pub ciphertext: String,
    /// Message integer to encrypt, decimal
    #[arg(allow_hyphen_values = true)]
    pub plaintext: String,
}

fn parse_key_width(s: &str) -> Result<KeyWidth, String> {
    let bytes: usize = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    KeyWidth::from_bytes(bytes).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_width_flag() {
        let args = DhkeArgs::try_parse_from([
            "dhke", "--key-width", "24", "00", "4", "1", "5", "3", "3", "20", "", "hi",
        ])
        .unwrap();
        assert_eq!(args.key_width, Some(KeyWidth::Aes192));
        assert_eq!(args.plaintext, "hi");

        assert!(DhkeArgs::try_parse_from([
            "dhke", "--key-width", "20", "00", "4", "1", "5", "3", "3", "20", "", "hi",
        ])
        .is_err());
    }

    #[test]
    fn plaintext_may_start_with_dashes() {
        for text in ["-hello", "-V", "--- dashes lead this text"] {
            let args =
                DhkeArgs::try_parse_from(["dhke", "00", "4", "1", "5", "3", "3", "20", "", text]).unwrap();
            assert_eq!(args.plaintext, text);
            assert_eq!(args.key_width, None);
        }

        let args = DhkeArgs::try_parse_from(["dhke", "00", "4", "1", "5", "3", "3", "20", "-0A", "x"]).unwrap();
        assert_eq!(args.ciphertext, "-0A");
    }

    #[test]
    fn long_help_still_works() {
        let err = DhkeArgs::try_parse_from(["dhke", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn rsa_negative_looking_message_is_a_value() {
        let args = RsaArgs::try_parse_from(["rsa", "6", "3", "6", "11", "5", "15", "2790", "-65"]).unwrap();
        assert_eq!(args.plaintext, "-65");
    }

    #[test]
    fn rsa_needs_all_positionals() {
        assert!(RsaArgs::try_parse_from(["rsa", "6", "3", "6", "11", "5", "15", "2790"]).is_err());
        let args = RsaArgs::try_parse_from(["rsa", "6", "3", "6", "11", "5", "15", "2790", "65"]).unwrap();
        assert_eq!(args.ciphertext, "2790");
    }
}
