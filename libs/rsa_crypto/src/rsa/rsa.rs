use crate::error::RsaError;
use crate::rsa::keygen::RsaKeyMaterial;
use num_bigint::BigUint;
use number_theory::mod_pow;

/// c = m^e mod n. Сообщения m >= n теряют информацию при приведении.
pub fn encrypt(message: &BigUint, e: &BigUint, n: &BigUint) -> Result<BigUint, RsaError> {
    if message >= n {
        log::warn!("message does not fit the modulus and will be reduced");
    }
    Ok(mod_pow(message, e, n)?)
}

/// m = c^d mod n
pub fn decrypt(ciphertext: &BigUint, d: &BigUint, n: &BigUint) -> Result<BigUint, RsaError> {
    Ok(mod_pow(ciphertext, d, n)?)
}

pub struct RsaService {
    keypair: RsaKeyMaterial,
}

impl RsaService {
    pub fn new(keypair: RsaKeyMaterial) -> Self {
        Self { keypair }
    }

    pub fn encrypt(&self, m: &BigUint) -> Result<BigUint, RsaError> {
        encrypt(m, &self.keypair.e, &self.keypair.n)
    }

    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint, RsaError> {
        decrypt(ciphertext, &self.keypair.d, &self.keypair.n)
    }

    pub fn public_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.e.clone())
    }

    pub fn private_key(&self) -> (BigUint, BigUint) {
        (self.keypair.n.clone(), self.keypair.d.clone())
    }

    pub fn key_material(&self) -> &RsaKeyMaterial {
        &self.keypair
    }
}
