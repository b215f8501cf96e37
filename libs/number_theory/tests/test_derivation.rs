use num_bigint::BigUint;
use num_traits::{One, Zero};
use number_theory::{derive_value, NumberTheoryError};

#[test]
fn test_derive_small_values() {
    let v = derive_value(4, &BigUint::from(1u32)).unwrap();
    assert_eq!(v.value(), &BigUint::from(15u32));
    assert_eq!(v.exponent(), 4);
    assert_eq!(v.describe(), "2^4 - 1");

    let v = derive_value(5, &BigUint::from(3u32)).unwrap();
    assert_eq!(v.into_value(), BigUint::from(29u32));
}

#[test]
fn test_derive_zero_subtrahend() {
    let v = derive_value(0, &BigUint::zero()).unwrap();
    assert_eq!(v.value(), &BigUint::one());
}

#[test]
fn test_derive_mersenne_prime() {
    let v = derive_value(127, &BigUint::one()).unwrap();
    let expected = BigUint::parse_bytes(b"170141183460469231731687303715884105727", 10).unwrap();
    assert_eq!(v.value(), &expected);
    assert_eq!(v.to_string(), expected.to_string());
}

#[test]
fn test_derive_rejects_zero_result() {
    let err = derive_value(4, &BigUint::from(16u32)).unwrap_err();
    assert_eq!(
        err,
        NumberTheoryError::InvalidParameter {
            exponent: 4,
            subtrahend: BigUint::from(16u32),
        }
    );
}

#[test]
fn test_derive_rejects_negative_result() {
    assert!(matches!(
        derive_value(3, &BigUint::from(100u32)),
        Err(NumberTheoryError::InvalidParameter { exponent: 3, .. })
    ));
}
