use num_bigint::BigUint;
use num_traits::One;

use rsa_crypto::{derive_private_exponent, RsaError, RsaService};

fn main() -> Result<(), RsaError> {
    // 1) p = 2^89 - 1, q = 2^107 - 1, e = 2^17 - 65535 = 65537
    let keypair = derive_private_exponent(
        89,
        &BigUint::one(),
        107,
        &BigUint::one(),
        17,
        &BigUint::from(65535u32),
    )?;
    let rsa = RsaService::new(keypair);

    let (n, e) = rsa.public_key();
    let (_n, d) = rsa.private_key();
    println!("Выведен ключ:\n  n = {}\n  e = {}\n  d = {}", n, e, d);

    // 2) Шифрование/дешифрование через методы RsaService
    let msg = BigUint::from(42u32);
    let c = rsa.encrypt(&msg)?;
    let m = rsa.decrypt(&c)?;
    assert_eq!(m, msg);
    println!("Шифрование→дешифрование успешно: {msg} → {c} → {m}");

    Ok(())
}
