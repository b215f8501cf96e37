use dh_crypto::{DhError, DhParameters, DiffieHellman, KeyExchangeAlgorithm};
use num_bigint::BigUint;
use num_traits::One;

fn main() -> Result<(), DhError> {
    println!("=== Diffie-Hellman Key Agreement Demo ===");

    // g = 2^2 - 1 = 3, p = 2^127 - 1
    let dh_params = DhParameters::derive(2, &BigUint::one(), 127, &BigUint::one())?;
    println!("Using DH Parameters:");
    println!("  Prime p: {}", dh_params.p);
    println!("  Generator g: {}", dh_params.g);

    let dh_context = DiffieHellman::new(dh_params)?;
    println!("Diffie-Hellman context created successfully.\n");

    let alice_private = BigUint::parse_bytes(b"31415926535897932384626433832795", 10)
        .unwrap_or_else(BigUint::one);
    let bob_private = BigUint::parse_bytes(b"27182818284590452353602874713526", 10)
        .unwrap_or_else(BigUint::one);

    let alice_keypair = dh_context.keypair_from_private(alice_private)?;
    let bob_keypair = dh_context.keypair_from_private(bob_private)?;
    println!("  Alice's Public Value: {}", alice_keypair.public_key);
    println!("  Bob's Public Value:   {}\n", bob_keypair.public_key);

    let shared_secret_alice =
        dh_context.compute_shared_secret(&alice_keypair.private_key, &bob_keypair.public_key)?;
    let shared_secret_bob =
        dh_context.compute_shared_secret(&bob_keypair.private_key, &alice_keypair.public_key)?;

    if shared_secret_alice == shared_secret_bob {
        println!("SUCCESS: Shared secrets match!");
        println!("Shared Secret (hex): {}", shared_secret_alice.to_str_radix(16));
    } else {
        println!("ERROR: Shared secrets DO NOT match!");
    }

    Ok(())
}
