use crate::{Context, Error};

/// A private key bound to the [Context] that imported or generated it.
///
/// Holding the pair together avoids threading a context through call sites that only ever
/// sign with one algorithm.
///
/// # Example
/// ```rust
/// use sigil_signing::{Context, Secp256k1, Signer};
/// use rand::rngs::OsRng;
///
/// let context = Secp256k1::new();
/// let private_key = context.random_private_key(&mut OsRng);
/// let signer = Signer::new(context, private_key);
///
/// let signature = signer.sign(b"hello, world!").unwrap();
/// let public_key = signer.public_key().unwrap();
/// assert!(context.verify(&signature, b"hello, world!", &public_key).unwrap());
/// ```
#[derive(Clone)]
pub struct Signer<C: Context> {
    context: C,
    private_key: C::PrivateKey,
}

impl<C: Context> Signer<C> {
    /// Binds `private_key` to `context`.
    pub fn new(context: C, private_key: C::PrivateKey) -> Self {
        Self {
            context,
            private_key,
        }
    }

    /// Signs `payload` with the bound private key.
    pub fn sign(&self, payload: &[u8]) -> Result<String, Error> {
        self.context.sign(payload, &self.private_key)
    }

    /// Derives the public key for the bound private key.
    pub fn public_key(&self) -> Result<C::PublicKey, Error> {
        self.context.public_key(&self.private_key)
    }

    /// Returns the bound context.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Returns the name of the algorithm the bound context implements.
    pub fn algorithm(&self) -> &'static str {
        C::ALGORITHM
    }
}
