use crate::error::CliError;
use num_bigint::BigUint;

/// Hex to bytes. Whitespace anywhere in `s` is ignored; either case is accepted.
pub fn bytes_from_hex(field: &'static str, s: &str) -> Result<Vec<u8>, CliError> {
    let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&compact).map_err(|e| CliError::parse(field, s, e))
}

/// Uppercase hex pairs separated by single spaces, e.g. `"0A FF 10"`.
pub fn hex_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn parse_decimal(field: &'static str, s: &str) -> Result<BigUint, CliError> {
    BigUint::parse_bytes(s.trim().as_bytes(), 10)
        .ok_or_else(|| CliError::parse(field, s, "not a non-negative decimal integer"))
}

pub fn parse_exponent(field: &'static str, s: &str) -> Result<u32, CliError> {
    s.trim().parse::<u32>().map_err(|e| CliError::parse(field, s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_output_is_uppercase_and_spaced() {
        assert_eq!(hex_from_bytes(&[0x0a, 0xff, 0x10]), "0A FF 10");
        assert_eq!(hex_from_bytes(&[]), "");
    }

    #[test]
    fn hex_input_tolerates_spaces() {
        assert_eq!(bytes_from_hex("IV", "0a FF 1 0").unwrap(), vec![0x0a, 0xff, 0x10]);
        assert_eq!(bytes_from_hex("IV", "").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn malformed_hex_is_a_parse_error() {
        assert!(matches!(bytes_from_hex("IV", "ABC"), Err(CliError::Parse { field: "IV", .. })));
        assert!(matches!(bytes_from_hex("IV", "ZZ"), Err(CliError::Parse { .. })));
    }
}
