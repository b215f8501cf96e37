use num_bigint::BigUint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: BigUint,
    pub public_key: BigUint,
}

pub trait KeyExchangeAlgorithm: Sized {
    type Parameters;
    type SharedSecret;
    type Error;

    fn new(params: Self::Parameters) -> Result<Self, Self::Error>;

    /// Public value published for `private_key`. Not used when the peer's
    /// value is already known; see `compute_shared_secret`.
    fn public_value(&self, private_key: &BigUint) -> Result<BigUint, Self::Error>;

    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> Result<Self::SharedSecret, Self::Error>;

    fn keypair_from_private(&self, private_key: BigUint) -> Result<KeyPair, Self::Error> {
        let public_key = self.public_value(&private_key)?;
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }
}
