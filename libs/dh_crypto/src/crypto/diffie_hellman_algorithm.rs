use crate::crypto::error::DhError;
use crate::crypto::key_exchange_traits::KeyExchangeAlgorithm;
use num_bigint::BigUint;
use num_traits::Zero;
use number_theory::{derive_value, mod_pow};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

impl DhParameters {
    /// Builds `g = 2^base_exp - base_sub` and `p = 2^mod_exp - mod_sub`.
    pub fn derive(
        base_exp: u32,
        base_sub: &BigUint,
        mod_exp: u32,
        mod_sub: &BigUint,
    ) -> Result<Self, DhError> {
        let g = derive_value(base_exp, base_sub)?;
        let p = derive_value(mod_exp, mod_sub)?;
        log::debug!(
            "DH parameters: g = {}, p = {} ({} bits)",
            g.describe(),
            p.describe(),
            p.value().bits()
        );
        Ok(Self {
            p: p.into_value(),
            g: g.into_value(),
        })
    }
}

#[derive(Debug)]
pub struct DiffieHellman {
    params: DhParameters,
}

impl DiffieHellman {
    pub fn params(&self) -> &DhParameters {
        &self.params
    }
}

impl KeyExchangeAlgorithm for DiffieHellman {
    type Parameters = DhParameters;
    type SharedSecret = BigUint;
    type Error = DhError;

    fn new(params: Self::Parameters) -> Result<Self, DhError> {
        if params.g.is_zero() || params.g >= params.p {
            return Err(DhError::BaseOutOfRange {
                g: params.g,
                p: params.p,
            });
        }
        Ok(Self { params })
    }

    fn public_value(&self, private_key: &BigUint) -> Result<BigUint, DhError> {
        Ok(mod_pow(&self.params.g, private_key, &self.params.p)?)
    }

    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> Result<Self::SharedSecret, DhError> {
        if other_public_key >= &self.params.p {
            log::debug!("peer public value exceeds the modulus and will be reduced");
        }
        Ok(mod_pow(other_public_key, own_private_key, &self.params.p)?)
    }
}

/// Shared secret `peer_public_value^private_value mod p` for parameters
/// given in compact `(exponent, subtrahend)` form. Stateless.
pub fn compute_shared_secret(
    base_exp: u32,
    base_sub: &BigUint,
    mod_exp: u32,
    mod_sub: &BigUint,
    private_value: &BigUint,
    peer_public_value: &BigUint,
) -> Result<BigUint, DhError> {
    let params = DhParameters::derive(base_exp, base_sub, mod_exp, mod_sub)?;
    let dh_context = DiffieHellman::new(params)?;
    let secret = dh_context.compute_shared_secret(private_value, peer_public_value)?;
    log::debug!("shared secret computed ({} bits)", secret.bits());
    Ok(secret)
}
