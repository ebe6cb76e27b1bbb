//! Create key pairs, sign opaque payloads, and verify signatures.
//!
//! # Status
//!
//! `sigil-signing` is **ALPHA** software and is not yet recommended for production use. Developers
//! should expect breaking changes and occasional instability.
//!
//! # Example
//! ```rust
//! use sigil_signing::{Context, Secp256k1};
//! use rand::rngs::OsRng;
//!
//! // Generate a new private key
//! let context = Secp256k1::new();
//! let private_key = context.random_private_key(&mut OsRng);
//!
//! // Derive the corresponding public key
//! let public_key = context.public_key(&private_key).unwrap();
//!
//! // Sign a payload
//! let signature = context.sign(b"hello, world!", &private_key).unwrap();
//!
//! // Verify the signature
//! assert!(context.verify(&signature, b"hello, world!", &public_key).unwrap());
//! ```

use rand::{CryptoRng, Rng};
use sigil_utils::{hex, DecodeError};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};
use thiserror::Error;

pub mod secp256k1;
pub use secp256k1::Secp256k1;
mod signer;
pub use signer::Signer;

/// Errors that can occur when handling key material, signing, or verifying.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid private key")]
    InvalidPrivateKey,
    #[error("invalid public key")]
    InvalidPublicKey,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid private key length")]
    InvalidPrivateKeyLength,
    #[error("invalid public key length")]
    InvalidPublicKeyLength,
    #[error("invalid hex: {0}")]
    Hex(#[from] DecodeError),
}

/// Fixed-length key material exchanged as hex strings.
pub trait Key:
    Clone + Eq + Ord + Hash + AsRef<[u8]> + Debug + Display + Send + Sync + 'static
{
    /// The name of the algorithm this key belongs to.
    const ALGORITHM: &'static str;

    /// Decodes a key from a hex string.
    ///
    /// Fails if the encoding is not valid hex or the bytes do not form a valid key.
    fn from_hex(encoded: &str) -> Result<Self, Error>;

    /// Returns the raw bytes of the key.
    fn as_bytes(&self) -> &[u8] {
        self.as_ref()
    }

    /// Encodes the key as a lowercase hex string.
    fn to_hex(&self) -> String {
        hex(self.as_bytes())
    }
}

/// A [Key] that must remain secret.
pub trait PrivateKey: Key {}

/// A [Key] that can be shared and used to verify signatures.
pub trait PublicKey: Key {}

/// A signature algorithm over a fixed curve and payload digest.
///
/// Contexts are cheap to construct, hold no per-operation state, and can be shared freely
/// across threads.
pub trait Context: Clone + Send + Sync + 'static {
    /// The private key type accepted by this context.
    type PrivateKey: PrivateKey;

    /// The public key type accepted by this context.
    type PublicKey: PublicKey;

    /// The name of the algorithm this context implements.
    const ALGORITHM: &'static str;

    /// Signs `payload` with `private_key`, returning the signature as a hex string.
    ///
    /// The payload should not be hashed prior to calling this function; it is digested
    /// internally exactly once.
    fn sign(&self, payload: &[u8], private_key: &Self::PrivateKey) -> Result<String, Error>;

    /// Verifies a hex-encoded signature over `payload` with `public_key`.
    ///
    /// Returns `Ok(false)` only when a well-formed signature does not match the payload and
    /// public key. Malformed or non-canonical signatures are rejected with
    /// [Error::InvalidSignature].
    fn verify(
        &self,
        signature: &str,
        payload: &[u8],
        public_key: &Self::PublicKey,
    ) -> Result<bool, Error>;

    /// Derives the public key that corresponds to `private_key`.
    fn public_key(&self, private_key: &Self::PrivateKey) -> Result<Self::PublicKey, Error>;

    /// Generates a fresh private key from `rng`.
    ///
    /// Candidates are drawn until one is a valid key for this algorithm. A failure of the
    /// randomness source itself is fatal and propagates from the source (e.g.
    /// [rand::rngs::OsRng] panics).
    fn random_private_key<R: Rng + CryptoRng>(&self, rng: &mut R) -> Self::PrivateKey;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn random_private_key<C: Context>(context: &C, seed: u64) -> C::PrivateKey {
        let mut rng = StdRng::seed_from_u64(seed);
        context.random_private_key(&mut rng)
    }

    fn test_sign_and_verify<C: Context>(context: C) {
        let private_key = random_private_key(&context, 0);
        let public_key = context.public_key(&private_key).unwrap();
        let signature = context.sign(b"test_message", &private_key).unwrap();
        assert!(context
            .verify(&signature, b"test_message", &public_key)
            .unwrap());
    }

    fn test_sign_and_verify_wrong_payload<C: Context>(context: C) {
        let private_key = random_private_key(&context, 0);
        let public_key = context.public_key(&private_key).unwrap();
        let signature = context.sign(b"test_message", &private_key).unwrap();
        assert!(!context
            .verify(&signature, b"wrong_message", &public_key)
            .unwrap());
    }

    fn test_sign_and_verify_wrong_public_key<C: Context>(context: C) {
        let private_key = random_private_key(&context, 0);
        let other_key = random_private_key(&context, 1);
        let other_public_key = context.public_key(&other_key).unwrap();
        let signature = context.sign(b"test_message", &private_key).unwrap();
        assert!(!context
            .verify(&signature, b"test_message", &other_public_key)
            .unwrap());
    }

    fn test_signature_determinism<C: Context>(context: C) {
        let private_key_1 = random_private_key(&context, 0);
        let private_key_2 = random_private_key(&context, 0);
        let signature_1 = context.sign(b"test_message", &private_key_1).unwrap();
        let signature_2 = context.sign(b"test_message", &private_key_2).unwrap();
        assert_eq!(
            context.public_key(&private_key_1).unwrap(),
            context.public_key(&private_key_2).unwrap()
        );
        assert_eq!(signature_1, signature_2);
    }

    fn test_key_hex_round_trip<C: Context>(context: C) {
        let private_key = random_private_key(&context, 0);
        let decoded = C::PrivateKey::from_hex(&private_key.to_hex()).unwrap();
        assert_eq!(private_key, decoded);

        let public_key = context.public_key(&private_key).unwrap();
        let decoded = C::PublicKey::from_hex(&public_key.to_hex()).unwrap();
        assert_eq!(public_key, decoded);
    }

    #[test]
    fn test_secp256k1_sign_and_verify() {
        test_sign_and_verify(Secp256k1::new());
    }

    #[test]
    fn test_secp256k1_sign_and_verify_wrong_payload() {
        test_sign_and_verify_wrong_payload(Secp256k1::new());
    }

    #[test]
    fn test_secp256k1_sign_and_verify_wrong_public_key() {
        test_sign_and_verify_wrong_public_key(Secp256k1::new());
    }

    #[test]
    fn test_secp256k1_signature_determinism() {
        test_signature_determinism(Secp256k1::new());
    }

    #[test]
    fn test_secp256k1_key_hex_round_trip() {
        test_key_hex_round_trip(Secp256k1::new());
    }
}
